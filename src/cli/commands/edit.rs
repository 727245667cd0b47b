use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::persistence::stage_for_edit;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::done;

/// Hand a saved calculation over to the worksheet and open it for editing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id } = cmd {
        // 1️⃣ listing side: fill the transfer slot
        {
            let mut pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;
            stage_for_edit(&mut pool, *id)?;
        }

        // 2️⃣ worksheet side: consume it
        let mut ws = Worksheet::open(cfg)?;
        ws.persist()?;

        if let Some(calc) = &ws.loaded {
            done(
                ws.tr.get("loadCalculation"),
                ws.tr.fill("loadCalculationText", "name", &calc.full_name()),
            );
        }

        print_worksheet(&ws, cfg)?;
    }

    Ok(())
}
