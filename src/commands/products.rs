//! Product commands: add-product, update-stock, inventory.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use anyhow::{anyhow, Result};
use serde_json::json;
use std::path::Path;

use super::print_no_products;
use crate::catalog;
use crate::db::connection::open_db;
use crate::db::helpers::{self, AddProductOutcome};
use crate::output::{render_table, OutputControls};

/// Add a new product.
pub fn add(db_path: &Path, name: &str, price: f64, quantity: i64, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;

    match helpers::add_product(&conn, name, price, quantity)? {
        AddProductOutcome::Added(product) => {
            if output.json {
                output.print(&json!({
                    "success": true,
                    "product": product
                }));
            } else {
                println!("Product '{}' added successfully!", product.name);
            }
            Ok(())
        }
        AddProductOutcome::AlreadyExists => Err(anyhow!("Product '{}' already exists.", name.trim())),
    }
}

/// Add stock to an existing product.
pub fn update_stock(db_path: &Path, product: &str, quantity: i64, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;

    let products = helpers::get_products(&conn)?;
    if products.is_empty() {
        print_no_products(output);
        return Ok(());
    }

    let selected = catalog::resolve(&products, product)?;
    let updated = helpers::update_product_quantity(&conn, selected.product_id, quantity)?;

    if output.json {
        output.print(&json!({
            "success": true,
            "product": updated
        }));
    } else {
        println!("Stock updated for {}!", updated.name);
        println!("quantity: {}", updated.quantity);
    }

    Ok(())
}

/// Show the current inventory.
pub fn inventory(db_path: &Path, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let products = helpers::get_products(&conn)?;

    if output.json {
        output.print(&products);
        return Ok(());
    }

    println!("Current Inventory ({}):", products.len());
    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.product_id.to_string(),
                p.name.clone(),
                format!("{:.2}", p.price),
                p.quantity.to_string(),
            ]
        })
        .collect();
    print!("{}", render_table(&["product_id", "name", "price", "quantity"], &rows));

    Ok(())
}
