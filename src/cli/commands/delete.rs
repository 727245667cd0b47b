use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::save::{cancel_editing, delete_calculation};
use crate::db::log::{Operation, ttlog_quiet};
use crate::errors::AppResult;
use crate::ui::messages::{done, info, warning};
use crate::ui::prompt::confirmer;

/// Delete a saved calculation after confirmation.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id } = &cli.command {
        let mut ws = Worksheet::open(cfg)?;
        ws.persist()?;
        let mut confirm = confirmer(cli.yes);

        if !delete_calculation(&mut ws.pool, confirm.as_mut(), &ws.tr, *id)? {
            info(ws.tr.get("operationCancelled"));
            return Ok(());
        }

        ttlog_quiet(
            &ws.pool.conn,
            Operation::Delete,
            &id.to_string(),
            "Calculation deleted",
        );

        // The record being edited is gone: nothing left to save into
        if ws.editing()?.is_some_and(|s| s.id() == *id) {
            cancel_editing(&mut ws.state, &mut ws.pool)?;
            ws.persist()?;
            warning("The deleted calculation was open for editing: editing cancelled.");
        }

        done(ws.tr.get("deletedCalcTitle"), ws.tr.get("deletedCalcText"));
    }

    Ok(())
}
