//! stockroom library
//!
//! Inventory and sales tracking over a local SQLite file. The `stockroom`
//! binary is a thin clap front end over these modules.
//!
//! CHANGELOG:
//! - 10/18/2026 - Inventory modules replace the messaging ones
//! - 01/10/2026 - Initial library structure

pub mod catalog;
pub mod commands;
pub mod db;
pub mod error;
pub mod output;
pub mod report;

pub use db::helpers::{AddProductOutcome, Product, Sale, SaleOutcome, SaleRecord};
pub use error::InventoryError;
