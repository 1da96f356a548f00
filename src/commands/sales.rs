//! Sales commands: record-sale, sales.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use anyhow::{anyhow, Result};
use chrono::Local;
use serde_json::json;
use std::path::Path;

use super::print_no_products;
use crate::catalog;
use crate::db::connection::open_db;
use crate::db::helpers::{self, SaleOutcome};
use crate::output::{render_table, OutputControls};

/// Record a sale dated today.
pub fn record(db_path: &Path, product: &str, quantity: i64, output: &OutputControls) -> Result<()> {
    let mut conn = open_db(db_path)?;

    let products = helpers::get_products(&conn)?;
    if products.is_empty() {
        print_no_products(output);
        return Ok(());
    }

    let selected = catalog::resolve(&products, product)?;
    let today = Local::now().date_naive();

    match helpers::record_sale(&mut conn, selected.product_id, quantity, today)? {
        SaleOutcome::Recorded(sale) => {
            if output.json {
                output.print(&json!({
                    "success": true,
                    "product": selected.name,
                    "sale": sale
                }));
            } else {
                println!("Sale recorded successfully!");
                println!(
                    "{} x {} on {} ({} left)",
                    sale.quantity, selected.name, sale.sale_date, sale.remaining_stock
                );
            }
            Ok(())
        }
        SaleOutcome::InsufficientStock { available, requested } => Err(anyhow!(
            "Not enough stock! {} has {} left, {} requested.",
            selected.name,
            available,
            requested
        )),
    }
}

/// List every sale with its product name.
pub fn list(db_path: &Path, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let sales = helpers::get_sales(&conn)?;

    if output.json {
        output.print(&sales);
        return Ok(());
    }

    println!("Sales Records ({}):", sales.len());
    if sales.is_empty() {
        println!("No sales recorded.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = sales
        .iter()
        .map(|s| {
            vec![
                s.sale_id.to_string(),
                s.product_name.clone(),
                s.quantity.to_string(),
                s.sale_date.to_string(),
            ]
        })
        .collect();
    print!("{}", render_table(&["sale_id", "product_name", "quantity", "sale_date"], &rows));

    Ok(())
}
