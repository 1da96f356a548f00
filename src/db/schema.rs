//! Table definitions for the inventory store.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::queries;

/// Create the products and sales tables if they don't exist.
///
/// Safe to call on an already-initialized database.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(queries::CREATE_PRODUCTS, [])
        .context("Failed to create products table")?;
    conn.execute(queries::CREATE_SALES, [])
        .context("Failed to create sales table")?;

    tracing::trace!("inventory schema ensured");
    Ok(())
}

/// Row counts for both tables, used by `init` to report store state.
pub fn table_counts(conn: &Connection) -> Result<(i64, i64)> {
    let products: i64 = conn
        .query_row(queries::COUNT_PRODUCTS, [], |row| row.get(0))
        .context("Failed to count products")?;
    let sales: i64 = conn
        .query_row(queries::COUNT_SALES, [], |row| row.get(0))
        .context("Failed to count sales")?;
    Ok((products, sales))
}
