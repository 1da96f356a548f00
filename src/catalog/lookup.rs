//! Resolve a product reference typed on the command line.
//!
//! CHANGELOG:
//! - 10/18/2026 - Fuzzy scores only suggest; case-sensitive exact match first
//! - 10/18/2026 - Initial implementation

use super::fuzzy;
use crate::db::helpers::Product;
use crate::error::InventoryError;

/// Find the product a user meant.
///
/// Order of matching:
/// 1. Numeric product id
/// 2. Exact name match (case-sensitive)
/// 3. Exact name match (case-insensitive), only when unambiguous
/// 4. Partial name match (name contains query), only when unambiguous
///
/// Fuzzy scores never select a product, since the result feeds writes. When
/// nothing matches, the closest name above the suggestion threshold is
/// carried in the error instead.
pub fn resolve<'a>(products: &'a [Product], query: &str) -> Result<&'a Product, InventoryError> {
    let query = query.trim();

    if let Ok(id) = query.parse::<i64>() {
        if let Some(product) = products.iter().find(|p| p.product_id == id) {
            return Ok(product);
        }
    }

    if let Some(product) = products.iter().find(|p| p.name == query) {
        return Ok(product);
    }

    let query_lower = query.to_lowercase();
    let same_name: Vec<&Product> = products
        .iter()
        .filter(|p| p.name.to_lowercase() == query_lower)
        .collect();
    if let Some(product) = single(query, &same_name)? {
        return Ok(product);
    }

    if !query_lower.is_empty() {
        let partial: Vec<&Product> = products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query_lower))
            .collect();
        if let Some(product) = single(query, &partial)? {
            return Ok(product);
        }
    }

    Err(InventoryError::UnknownProduct {
        query: query.to_string(),
        suggestion: best_match(products, query)
            .filter(|(_, score)| *score >= fuzzy::SUGGESTION_THRESHOLD)
            .map(|(p, _)| p.name.clone()),
    })
}

/// `Ok(None)` for no candidates, the product for exactly one, an error for more.
fn single<'a>(query: &str, candidates: &[&'a Product]) -> Result<Option<&'a Product>, InventoryError> {
    match candidates {
        [] => Ok(None),
        [product] => Ok(Some(*product)),
        _ => Err(InventoryError::AmbiguousProduct {
            query: query.to_string(),
            candidates: candidates.iter().map(|p| p.name.clone()).collect(),
        }),
    }
}

fn best_match<'a>(products: &'a [Product], query: &str) -> Option<(&'a Product, f64)> {
    let mut best: Option<(&Product, f64)> = None;
    for product in products {
        let m = fuzzy::multi_match(query, &product.name);
        tracing::debug!(query, candidate = %product.name, score = m.score, strategy = m.strategy, "fuzzy score");
        if best.map_or(true, |(_, s)| m.score > s) {
            best = Some((product, m.score));
        }
    }
    best
}
