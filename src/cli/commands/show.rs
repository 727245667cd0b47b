use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::errors::AppResult;
use crate::models::table_kind::TableKind;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_row, colorize_total, or_dashes};
use crate::utils::formatting::{bold, rule};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Show) {
        let mut ws = Worksheet::open(cfg)?;
        // the transfer slot may have been consumed: keep the loaded state
        ws.persist()?;
        print_worksheet(&ws, cfg)?;
    }
    Ok(())
}

/// Print both tables, their per-row durations and the deduplicated totals.
pub fn print_worksheet(ws: &Worksheet, cfg: &Config) -> AppResult<()> {
    let tr = &ws.tr;

    if let Some(session) = ws.editing()? {
        info(tr.fill(
            "editingCalculation",
            "name",
            &session.calculation.full_name(),
        ));
    }

    for kind in [TableKind::Specific, TableKind::General] {
        let table = ws.state.table(kind);

        println!();
        header(tr.table_name(kind));

        let mut out = Table::new(vec![
            Column::new("#"),
            Column::new(tr.get("startDate")),
            Column::new(tr.get("endDate")),
            Column::new(tr.get("total")),
            Column::new(""),
        ]);

        for row in table.rows() {
            let marker = if row.editable {
                tr.get("remove")
            } else {
                tr.get("readOnly")
            };

            out.add_row(vec![
                row.id.to_string(),
                or_dashes(&row.start_str()),
                or_dashes(&row.end_str()),
                tr.period(&row.span),
                format!("[{}]", marker),
            ]);
        }

        println!("{}", bold(&out.header_line()));
        println!("{}", rule(&cfg.separator_char, out.width()));
        for (line, row) in out.row_lines().iter().zip(table.rows()) {
            println!("{}", colorize_row(line, row.editable));
        }
        println!("{}", rule(&cfg.separator_char, out.width()));

        let total = table.total();
        println!(
            "{}: {}",
            bold(tr.get("total")),
            colorize_total(&tr.period(&total), total.is_zero())
        );
    }

    Ok(())
}
