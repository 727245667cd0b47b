use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::Cli;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::table::Mutation;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{done, info, warning};
use crate::ui::prompt::confirmer;

/// Remove an editable row. Rows holding dates need confirmation.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = &cli.command {
        let mut ws = Worksheet::open(cfg)?;

        let had_data = ws
            .state
            .find_row(*id)
            .ok_or(AppError::RowNotFound(*id))?
            .has_data();

        let mut confirm = confirmer(cli.yes);

        match ws.state.remove_row(*id, confirm.as_mut(), &ws.tr)? {
            Mutation::Applied => {
                ws.persist()?;
                if had_data {
                    done(ws.tr.get("deletedTitle"), ws.tr.get("deletedText"));
                }
                print_worksheet(&ws, cfg)?;
            }
            Mutation::ReadOnly => warning(ws.tr.get("rowReadOnly")),
            Mutation::Declined => info(ws.tr.get("operationCancelled")),
            Mutation::NotFound => return Err(AppError::RowNotFound(*id)),
        }
    }

    Ok(())
}
