use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_optional_date;

/// Add a row (empty or with dates) to one of the tables.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { table, start, end } = cmd {
        //
        // 1. Parse dates (both optional: an empty row awaits completion)
        //
        let start = parse_optional_date(start.as_ref())?;
        let end = parse_optional_date(end.as_ref())?;

        //
        // 2. Apply on the stored worksheet
        //
        let mut ws = Worksheet::open(cfg)?;
        let id = ws.state.add_row(*table, start, end);
        ws.persist()?;

        success(format!("Row {} added to {}.", id, ws.tr.table_name(*table)));

        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            warning(format!(
                "Start date {} is after end date {}: the row is not counted.",
                s, e
            ));
        }

        print_worksheet(&ws, cfg)?;
    }

    Ok(())
}
