use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::save::cancel_editing;
use crate::db::log::{Operation, ttlog_quiet};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Cancel) {
        let mut ws = Worksheet::open(cfg)?;
        let session = ws.editing()?;

        cancel_editing(&mut ws.state, &mut ws.pool)?;
        ws.persist()?;

        match session {
            Some(s) => {
                ttlog_quiet(
                    &ws.pool.conn,
                    Operation::Cancel,
                    &s.id().to_string(),
                    "Editing cancelled",
                );
                info(ws.tr.get("editCancelled"));
                print_worksheet(&ws, cfg)?;
            }
            None => info("No calculation is being edited."),
        }
    }

    Ok(())
}
