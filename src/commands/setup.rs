//! Init command: create the inventory database and report its state.
//!
//! CHANGELOG:
//! - 10/18/2026 - Schema bootstrap and row counts
//! - 01/10/2026 - Initial stub implementation

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use crate::db::{connection::open_db, schema};
use crate::output::OutputControls;

/// Create both tables if missing and print where the database lives.
pub fn run(db_path: &Path, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let (products, sales) = schema::table_counts(&conn)?;

    tracing::info!(path = %db_path.display(), products, sales, "inventory database ready");

    if output.json {
        output.print(&json!({
            "success": true,
            "database": db_path.display().to_string(),
            "products": products,
            "sales": sales
        }));
    } else {
        println!("Database ready: {}", db_path.display());
        println!("products: {}", products);
        println!("sales: {}", sales);
    }

    Ok(())
}
