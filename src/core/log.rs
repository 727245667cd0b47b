use crate::db::log::Operation;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::pad_right;
use ansi_term::Colour;
use regex::Regex;

/// Maximum visible width of the "operation (target)" column.
const OP_COLUMN_MAX: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        op if op == Operation::Save.as_str() => Colour::Green,
        op if op == Operation::Update.as_str() => Colour::Cyan,
        op if op == Operation::Delete.as_str() => Colour::Red,
        op if op == Operation::Edit.as_str() => Colour::Yellow,
        op if op == Operation::Cancel.as_str() => Colour::Fixed(245),
        op if op == Operation::Language.as_str() => Colour::Blue,
        op if op == Operation::Init.as_str() => Colour::RGB(255, 153, 51), // arancione
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// One row of the internal log, already formatted for display.
struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    op_target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Unica colonna op+target
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(LogEntry {
                id,
                date,
                operation,
                op_target,
                message,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        println!("📜 Internal log:\n");

        if entries.is_empty() {
            println!("(empty)");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let op_w = entries
            .iter()
            .map(|e| e.op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_COLUMN_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(1);

        for entry in entries {
            let color = color_for_operation(&entry.operation);

            // taglio a 57 + "..." sulla parte visibile
            let visible = if entry.op_target.chars().count() > OP_COLUMN_MAX {
                let mut s = entry
                    .op_target
                    .chars()
                    .take(OP_COLUMN_MAX - 3)
                    .collect::<String>();
                s.push_str("...");
                s
            } else {
                entry.op_target.clone()
            };

            // solo la prima parola resta colorata
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            // padding calcolato senza ANSI
            let padding =
                " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).chars().count()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                entry.id,
                pad_right(&entry.date, date_w),
                colored,
                padding,
                entry.message,
                id_w = id_w,
            );
        }

        Ok(())
    }
}
