//! Dashboard aggregation and text charts.
//!
//! CHANGELOG:
//! - 10/18/2026 - Stock bar chart and sales-over-time plot

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::helpers::{Product, SaleRecord};

/// Default bar length for the largest stock level.
pub const BAR_WIDTH: usize = 40;

/// Default plot height in rows.
pub const PLOT_HEIGHT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stock_levels: Vec<StockLevel>,
    pub sales_over_time: Vec<SalesPoint>,
}

impl Dashboard {
    pub fn build(products: &[Product], sales: &[SaleRecord]) -> Self {
        Self {
            stock_levels: stock_levels(products),
            sales_over_time: sales_over_time(sales),
        }
    }
}

/// One bar per product, in catalog order.
pub fn stock_levels(products: &[Product]) -> Vec<StockLevel> {
    products
        .iter()
        .map(|p| StockLevel {
            name: p.name.clone(),
            quantity: p.quantity,
        })
        .collect()
}

/// Total quantity sold per date, oldest first.
pub fn sales_over_time(sales: &[SaleRecord]) -> Vec<SalesPoint> {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for sale in sales {
        *by_date.entry(sale.sale_date).or_insert(0) += sale.quantity;
    }
    by_date
        .into_iter()
        .map(|(date, quantity)| SalesPoint { date, quantity })
        .collect()
}

/// Horizontal bar chart, bars scaled so the largest quantity spans `width`.
pub fn render_bar_chart(levels: &[StockLevel], width: usize) -> String {
    let label_width = levels.iter().map(|l| l.name.chars().count()).max().unwrap_or(0);
    let max = levels.iter().map(|l| l.quantity).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for level in levels {
        let len = scale(level.quantity, max, width);
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            level.name,
            "█".repeat(len),
            level.quantity,
        ));
    }
    out
}

/// Point plot of quantity sold per date, one column per date.
pub fn render_line_chart(points: &[SalesPoint], height: usize) -> String {
    if points.is_empty() || height == 0 {
        return String::new();
    }

    let max = points.iter().map(|p| p.quantity).max().unwrap_or(0).max(1);
    let rows: Vec<usize> = points
        .iter()
        .map(|p| scale(p.quantity, max, height - 1))
        .collect();
    let axis_width = max.to_string().len();

    let mut out = String::new();
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            max.to_string()
        } else if row == 0 {
            "0".to_string()
        } else {
            String::new()
        };
        out.push_str(&format!("{:>axis_width$} |", label));
        for &y in &rows {
            out.push_str(if y == row { " o " } else { "   " });
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>axis_width$} +{}\n", "", "-".repeat(points.len() * 3)));

    let first = points[0].date.to_string();
    let last = points[points.len() - 1].date.to_string();
    if points.len() == 1 {
        out.push_str(&format!("{:>axis_width$}  {}\n", "", first));
    } else {
        out.push_str(&format!("{:>axis_width$}  {} .. {}\n", "", first, last));
    }
    out
}

fn scale(value: i64, max: i64, span: usize) -> usize {
    if value <= 0 {
        return 0;
    }
    ((value as f64 / max as f64) * span as f64).round() as usize
}
