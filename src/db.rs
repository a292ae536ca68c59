use anyhow::Result;
use rusqlite::Connection;

/// Initialization script, applied once when the database file is created.
pub const SCHEMA: &str = include_str!("../migrations/001_init.sql");

// One table and no references, so foreign_keys stays at its default. Every
// request opens its own connection; busy_timeout makes them queue for the
// write lock instead of failing with SQLITE_BUSY.
fn set_pragmas(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA busy_timeout = 5000;",
    )?;
    Ok(())
}

pub fn open(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    set_pragmas(&conn)?;
    Ok(conn)
}

pub fn init(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
pub fn open_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    set_pragmas(&conn)?;
    init(&conn)?;
    Ok(conn)
}
