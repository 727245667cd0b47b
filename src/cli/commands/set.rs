use crate::cli::commands::show::print_worksheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::core::table::Mutation;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_optional_date;

/// Change one or both dates of an editable row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        id,
        start,
        end,
        clear_start,
        clear_end,
    } = cmd
    {
        let start_parsed = parse_optional_date(start.as_ref())?;
        let end_parsed = parse_optional_date(end.as_ref())?;

        let mut ws = Worksheet::open(cfg)?;

        let row = ws.state.find_row(*id).ok_or(AppError::RowNotFound(*id))?;

        // Fields not mentioned keep their current value
        let new_start = if *clear_start {
            None
        } else {
            start_parsed.or(row.start)
        };
        let new_end = if *clear_end {
            None
        } else {
            end_parsed.or(row.end)
        };

        match ws.state.update_row(*id, new_start, new_end)? {
            Mutation::Applied => {
                ws.persist()?;
                success(format!("Row {} updated.", id));
                print_worksheet(&ws, cfg)?;
            }
            Mutation::ReadOnly => warning(ws.tr.get("rowReadOnly")),
            Mutation::NotFound => return Err(AppError::RowNotFound(*id)),
            Mutation::Declined => {}
        }
    }

    Ok(())
}
