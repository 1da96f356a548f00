//! Command implementations.
//!
//! CHANGELOG:
//! - 10/18/2026 - Inventory screens: products, sales, dashboard
//! - 01/10/2026 - Initial module structure

pub mod dashboard;
pub mod products;
pub mod sales;
pub mod setup;

use crate::output::OutputControls;
use serde_json::{json, Value};

/// Shown when a command needs a product but the catalog is empty.
pub const NO_PRODUCTS: &str = "No products found. Please add products first.";

fn no_products_json() -> Value {
    json!({
        "success": true,
        "message": NO_PRODUCTS
    })
}

/// Print the empty-catalog notice. The command still succeeds.
pub(crate) fn print_no_products(output: &OutputControls) {
    if output.json {
        output.print(&no_products_json());
    } else {
        println!("{}", NO_PRODUCTS);
    }
}
