use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Wait this long for a concurrent invocation holding the write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Prepare a connection for use: lock timeout, then pending migrations.
///
/// Tables are never created here; the migration engine owns the schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    run_pending_migrations(conn)?;
    Ok(())
}
