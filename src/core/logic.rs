use crate::config::Config;
use crate::core::persistence::{self, EditingSession};
use crate::core::state::AppState;
use crate::db::initialize::init_db;
use crate::db::log::{Operation, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::Translations;
use crate::models::calculation::Calculation;

/// The worksheet as seen by one CLI invocation: stored state, the
/// translations for its language and the open store.
pub struct Worksheet {
    pub pool: DbPool,
    pub state: AppState,
    pub tr: Translations,
    /// Calculation picked up from the transfer slot by this invocation.
    pub loaded: Option<Calculation>,
}

impl Worksheet {
    /// Open the store and restore the worksheet.
    ///
    /// A calculation waiting in the transfer slot replaces the stored
    /// worksheet and starts an edit session.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let (state, loaded) = match persistence::take_transfer(&mut pool)? {
            Some(session) => {
                let mut state = AppState::from_calculation(&session.calculation, &cfg.language);
                state.suspend_sync();

                ttlog_quiet(
                    &pool.conn,
                    Operation::Edit,
                    &session.id().to_string(),
                    &format!("Loaded calculation of {}", session.calculation.full_name()),
                );

                (state, Some(session.calculation))
            }
            None => (persistence::load_worksheet(&pool, &cfg.language)?, None),
        };

        let tr = Translations::load(&state.language)?;

        Ok(Self {
            pool,
            state,
            tr,
            loaded,
        })
    }

    pub fn editing(&self) -> AppResult<Option<EditingSession>> {
        persistence::editing(&self.pool)
    }

    /// Switch the worksheet language (totals are language-neutral).
    pub fn set_language(&mut self, code: &str) -> AppResult<()> {
        let tr = Translations::load(code)?;
        self.state.language = tr.code().to_string();
        self.tr = tr;
        Ok(())
    }

    pub fn persist(&mut self) -> AppResult<()> {
        persistence::store_worksheet(&mut self.pool, &self.state)
    }
}
