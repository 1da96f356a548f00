//! SQLite connection management for the inventory database.
//!
//! Every command opens its own connection with [`open_db`] and drops it when
//! done; nothing holds a long-lived handle.
//!
//! CHANGELOG:
//! - 10/18/2026 - Read-write open with schema bootstrap, env/data-dir path resolution
//! - 01/10/2026 - Initial stub

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::schema;

/// Database file name, kept from the original deployment.
pub const DB_FILE_NAME: &str = "sales_inventory.db";

/// Environment variable overriding the default database location.
pub const DB_PATH_ENV: &str = "STOCKROOM_DB";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default database path.
///
/// Tries, in order:
/// 1. STOCKROOM_DB env var
/// 2. `<data dir>/stockroom/sales_inventory.db`
/// 3. `./sales_inventory.db`
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join("stockroom").join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

/// Open a read-write connection, creating the file and schema if needed.
pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open inventory database at {:?}", path))?;

    configure(&conn)?;
    schema::create_tables(&conn)?;

    tracing::debug!(path = %path.display(), "opened inventory database");
    Ok(conn)
}

/// Apply per-connection pragmas.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)
        .context("Failed to set busy timeout")?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .context("Failed to enable foreign keys")?;
    Ok(())
}
