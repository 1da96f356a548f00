//! Dashboard command: stock levels and sales over time.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use anyhow::Result;
use std::path::Path;

use crate::db::connection::open_db;
use crate::db::helpers;
use crate::output::OutputControls;
use crate::report::{self, Dashboard};

/// Render both charts.
pub fn show(db_path: &Path, output: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let products = helpers::get_products(&conn)?;
    let sales = helpers::get_sales(&conn)?;
    drop(conn);

    let dashboard = Dashboard::build(&products, &sales);

    if output.json {
        output.print(&dashboard);
        return Ok(());
    }

    println!("Sales and Inventory Dashboard");
    println!("{:=<40}", "");
    println!();

    println!("Inventory Stock Levels");
    println!("{:-<40}", "");
    if dashboard.stock_levels.is_empty() {
        println!("No products found.");
    } else {
        print!("{}", report::render_bar_chart(&dashboard.stock_levels, report::BAR_WIDTH));
    }
    println!();

    println!("Sales Over Time");
    println!("{:-<40}", "");
    if dashboard.sales_over_time.is_empty() {
        println!("No sales records to display.");
    } else {
        print!("{}", report::render_line_chart(&dashboard.sales_over_time, report::PLOT_HEIGHT));
    }

    Ok(())
}
