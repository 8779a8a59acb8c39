use rusqlite::Connection;

use crate::error::Result;

/// Initialise the schedules table. Safe to call on every startup (idempotent).
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schedules (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT NOT NULL,
            content     TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_schedules_created
            ON schedules(created_at DESC, id DESC);",
    )?;
    Ok(())
}
