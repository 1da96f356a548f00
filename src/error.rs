//! Domain errors for inventory operations.
//!
//! Duplicate names and short stock are outcomes, not errors; see
//! `db::helpers::AddProductOutcome` and `db::helpers::SaleOutcome`.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("Please enter a product name.")]
    EmptyName,

    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    #[error("Quantity must be at least 1, got {0}")]
    NonPositiveQuantity(i64),

    #[error("Adding {added} to a stock of {current} exceeds the largest storable quantity")]
    QuantityOverflow { current: i64, added: i64 },

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    /// A product reference from the command line matched nothing.
    #[error("Product '{query}' not found{}", did_you_mean(.suggestion))]
    UnknownProduct {
        query: String,
        suggestion: Option<String>,
    },

    /// A product reference matched several names equally well.
    #[error("Product '{query}' is ambiguous, matches {}", quoted(.candidates))]
    AmbiguousProduct {
        query: String,
        candidates: Vec<String>,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}
