use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::save::{SaveDetails, SaveOutcome, save_calculation};
use crate::db::log::{Operation, ttlog_quiet};
use crate::errors::AppResult;
use crate::ui::messages::{done, info};
use crate::ui::prompt::confirmer;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        registro,
        first_name,
        last_name,
        as_new,
    } = &cli.command
    {
        // Nessun campo → si riusano i dati del calcolo in modifica (se presente)
        let details = if registro.is_none() && first_name.is_none() && last_name.is_none() {
            None
        } else {
            Some(SaveDetails::new(
                registro.as_deref().unwrap_or_default(),
                first_name.as_deref().unwrap_or_default(),
                last_name.as_deref().unwrap_or_default(),
            ))
        };

        let mut ws = Worksheet::open(cfg)?;
        let mut confirm = confirmer(cli.yes);

        let outcome = save_calculation(
            &mut ws.state,
            &mut ws.pool,
            confirm.as_mut(),
            &ws.tr,
            details,
            *as_new,
        )?;
        ws.persist()?;

        let (operation, id) = match outcome {
            SaveOutcome::Created(id) => (Operation::Save, id),
            SaveOutcome::Updated(id) => (Operation::Update, id),
            SaveOutcome::Cancelled => {
                info(ws.tr.get("operationCancelled"));
                return Ok(());
            }
        };

        ttlog_quiet(
            &ws.pool.conn,
            operation,
            &id.to_string(),
            "Calculation saved",
        );

        done(ws.tr.get("saveSuccessTitle"), ws.tr.get("saveSuccessText"));
        info(format!("Calculation id: {}", id));
        print_worksheet(&ws, cfg)?;
    }

    Ok(())
}
