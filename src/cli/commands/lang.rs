use crate::cli::parser::Cli;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Worksheet;
use crate::db::log::{Operation, ttlog_quiet};
use crate::errors::AppResult;
use crate::i18n::Translations;
use crate::ui::messages::success;

/// Switch language for the worksheet and, outside test mode, the config file.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Lang { code } = &cli.command {
        let tr = Translations::load(code)?;

        if !cli.test {
            let mut updated = cfg.clone();
            updated.language = tr.code().to_string();
            updated.save()?;
        }

        let mut ws = Worksheet::open(cfg)?;
        ws.set_language(tr.code())?;
        ws.persist()?;

        ttlog_quiet(&ws.pool.conn, Operation::Language, tr.code(), "Language changed");

        success(format!("{}: {}", tr.get("title"), tr.code()));
    }

    Ok(())
}
