use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::errors::AppResult;
use crate::ui::messages::{done, info};
use crate::ui::prompt::confirmer;

/// Empty the editable dates of one table.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { table } = &cli.command {
        let mut ws = Worksheet::open(cfg)?;

        if !ws.state.table(*table).has_editable_data() {
            info(format!("Nothing to clear in {}.", ws.tr.table_name(*table)));
            return Ok(());
        }

        let mut confirm = confirmer(cli.yes);

        if ws.state.clear_fields(*table, confirm.as_mut(), &ws.tr) {
            ws.persist()?;
            done(ws.tr.get("clearedTitle"), ws.tr.get("clearedText"));
            print_worksheet(&ws, cfg)?;
        } else {
            info(ws.tr.get("operationCancelled"));
        }
    }

    Ok(())
}
