use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::persistence;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::Translations;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, rule};
use crate::utils::table::{Column, Table};

/// Listing view: every saved calculation with its totals.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        // same language as the worksheet, without touching the transfer slot
        let language = persistence::load_worksheet(&pool, &cfg.language)?.language;
        let tr = Translations::load(&language)?;
        let saved = persistence::load_all(&pool)?;

        header(tr.get("savedCalculations"));

        if saved.is_empty() {
            info(tr.get("noSavedCalculations"));
            return Ok(());
        }

        let mut out = Table::new(vec![
            Column::new("id"),
            Column::new(tr.get("registroNumber")),
            Column::new(tr.get("lastName")),
            Column::new(tr.get("firstName")),
            Column::new(tr.get("specificExperience")),
            Column::new(tr.get("generalExperience")),
        ]);

        for calc in &saved {
            out.add_row(vec![
                calc.id.to_string(),
                calc.registro_number.clone(),
                calc.last_name.clone(),
                calc.first_name.clone(),
                tr.period(&calc.total_specific),
                tr.period(&calc.total_general),
            ]);
        }

        println!("{}", bold(&out.header_line()));
        println!("{}", rule(&cfg.separator_char, out.width()));
        for line in out.row_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
