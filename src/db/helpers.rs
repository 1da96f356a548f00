//! Inventory data-access helpers - shared by every CLI command.
//!
//! These functions accept a borrowed `Connection` so the caller owns the
//! connection's lifetime (one per command). Writes that must land together
//! run inside a single transaction.
//!
//! CHANGELOG:
//! - 10/18/2026 - Product and sale operations on the inventory schema
//! - 01/10/2026 - Initial extraction from analytics.rs (Phase 5)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{self, params, Connection, ErrorCode, OptionalExtension, Row, TransactionBehavior};
use serde::Serialize;

use super::queries;
use crate::error::InventoryError;

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            product_id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            quantity: row.get(3)?,
        })
    }
}

/// A sale as just written by [`record_sale`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub sale_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub sale_date: NaiveDate,
    pub remaining_stock: i64,
}

/// A sale joined with its product's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub sale_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub sale_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddProductOutcome {
    Added(Product),
    /// Another product already uses this name; nothing was written.
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    Recorded(Sale),
    /// Not enough stock on hand; nothing was written.
    InsufficientStock { available: i64, requested: i64 },
}

// ============================================================================
// Write Operations
// ============================================================================

/// Insert a new product.
///
/// The name is trimmed before insert. A name collision is reported as
/// [`AddProductOutcome::AlreadyExists`] rather than an error.
pub fn add_product(conn: &Connection, name: &str, price: f64, quantity: i64) -> Result<AddProductOutcome> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InventoryError::EmptyName.into());
    }
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::InvalidPrice(price).into());
    }
    if quantity < 0 {
        return Err(InventoryError::NegativeQuantity(quantity).into());
    }

    match conn.execute(queries::INSERT_PRODUCT, params![name, price, quantity]) {
        Ok(_) => {
            let product = Product {
                product_id: conn.last_insert_rowid(),
                name: name.to_string(),
                price,
                quantity,
            };
            tracing::debug!(product_id = product.product_id, name, "product added");
            Ok(AddProductOutcome::Added(product))
        }
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!(name, "product name already exists");
            Ok(AddProductOutcome::AlreadyExists)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to insert product '{}'", name)),
    }
}

/// Add `quantity` units to a product's stock and return the updated product.
pub fn update_product_quantity(conn: &Connection, product_id: i64, quantity: i64) -> Result<Product> {
    if quantity < 1 {
        return Err(InventoryError::NonPositiveQuantity(quantity).into());
    }

    let updated = conn
        .execute(queries::ADD_STOCK, params![quantity, product_id])
        .with_context(|| format!("Failed to update stock for product {}", product_id))?;
    if updated == 0 {
        // Either the product is missing or the guard refused the sum.
        return match get_product(conn, product_id)? {
            Some(product) => {
                tracing::warn!(product_id, current = product.quantity, added = quantity, "stock update would overflow");
                Err(InventoryError::QuantityOverflow {
                    current: product.quantity,
                    added: quantity,
                }
                .into())
            }
            None => Err(InventoryError::ProductNotFound(product_id).into()),
        };
    }

    tracing::debug!(product_id, added = quantity, "stock updated");
    get_product(conn, product_id)?.ok_or_else(|| InventoryError::ProductNotFound(product_id).into())
}

/// Record a sale of `quantity` units dated `sale_date`.
///
/// The stock check, the decrement and the sale insert share one IMMEDIATE
/// transaction. When stock is short the transaction is rolled back and
/// [`SaleOutcome::InsufficientStock`] is returned.
pub fn record_sale(
    conn: &mut Connection,
    product_id: i64,
    quantity: i64,
    sale_date: NaiveDate,
) -> Result<SaleOutcome> {
    if quantity < 1 {
        return Err(InventoryError::NonPositiveQuantity(quantity).into());
    }

    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin sale transaction")?;

    let available: i64 = tx
        .query_row(queries::PRODUCT_STOCK, [product_id], |row| row.get(0))
        .optional()
        .context("Failed to read stock")?
        .ok_or(InventoryError::ProductNotFound(product_id))?;

    if available < quantity {
        tracing::warn!(product_id, available, requested = quantity, "sale rejected: not enough stock");
        return Ok(SaleOutcome::InsufficientStock { available, requested: quantity });
    }

    let updated = tx
        .execute(queries::REMOVE_STOCK, params![quantity, product_id])
        .context("Failed to decrement stock")?;
    if updated == 0 {
        return Ok(SaleOutcome::InsufficientStock { available, requested: quantity });
    }

    tx.execute(queries::INSERT_SALE, params![product_id, quantity, sale_date])
        .context("Failed to insert sale")?;
    let sale_id = tx.last_insert_rowid();

    tx.commit().context("Failed to commit sale")?;

    tracing::debug!(sale_id, product_id, quantity, %sale_date, "sale recorded");
    Ok(SaleOutcome::Recorded(Sale {
        sale_id,
        product_id,
        quantity,
        sale_date,
        remaining_stock: available - quantity,
    }))
}

// ============================================================================
// Read Operations
// ============================================================================

/// All products in insertion order.
pub fn get_products(conn: &Connection) -> Result<Vec<Product>> {
    let mut stmt = conn.prepare(queries::ALL_PRODUCTS)?;
    let products = stmt
        .query_map([], Product::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read products")?;
    Ok(products)
}

/// All sales joined with product names, in insertion order.
pub fn get_sales(conn: &Connection) -> Result<Vec<SaleRecord>> {
    let mut stmt = conn.prepare(queries::ALL_SALES)?;
    let sales = stmt
        .query_map([], |row| {
            Ok(SaleRecord {
                sale_id: row.get(0)?,
                product_name: row.get(1)?,
                quantity: row.get(2)?,
                sale_date: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read sales")?;
    Ok(sales)
}

pub fn get_product(conn: &Connection, product_id: i64) -> Result<Option<Product>> {
    conn.query_row(queries::PRODUCT_BY_ID, [product_id], Product::from_row)
        .optional()
        .with_context(|| format!("Failed to read product {}", product_id))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        schema::create_tables(&conn).unwrap();
        conn
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn added(outcome: AddProductOutcome) -> Product {
        match outcome {
            AddProductOutcome::Added(p) => p,
            AddProductOutcome::AlreadyExists => panic!("expected product to be added"),
        }
    }

    fn sale_count(conn: &Connection) -> i64 {
        conn.query_row(queries::COUNT_SALES, [], |row| row.get(0)).unwrap()
    }

    fn inventory_error(err: &anyhow::Error) -> &InventoryError {
        err.downcast_ref::<InventoryError>().expect("expected InventoryError")
    }

    #[test]
    fn test_add_product_inserts_exact_values() {
        let conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());

        let products = get_products(&conn).unwrap();
        assert_eq!(products, vec![product.clone()]);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 2.50);
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_add_product_trims_name() {
        let conn = test_db();
        let product = added(add_product(&conn, "  Gadget \t", 1.0, 0).unwrap());
        assert_eq!(product.name, "Gadget");
    }

    #[test]
    fn test_add_duplicate_leaves_table_unchanged() {
        let conn = test_db();
        add_product(&conn, "Widget", 2.50, 10).unwrap();

        let outcome = add_product(&conn, "Widget", 9.99, 99).unwrap();
        assert_eq!(outcome, AddProductOutcome::AlreadyExists);

        let products = get_products(&conn).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, 2.50);
        assert_eq!(products[0].quantity, 10);
    }

    #[test]
    fn test_add_duplicate_after_trim() {
        let conn = test_db();
        add_product(&conn, "Widget", 2.50, 10).unwrap();
        assert_eq!(
            add_product(&conn, " Widget ", 1.0, 1).unwrap(),
            AddProductOutcome::AlreadyExists
        );
    }

    #[test]
    fn test_add_product_rejects_invalid_input() {
        let conn = test_db();

        let err = add_product(&conn, "   ", 1.0, 1).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::EmptyName);

        let err = add_product(&conn, "Widget", -0.01, 1).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::InvalidPrice(-0.01));

        let err = add_product(&conn, "Widget", f64::NAN, 1).unwrap_err();
        assert!(matches!(inventory_error(&err), InventoryError::InvalidPrice(_)));

        let err = add_product(&conn, "Widget", 1.0, -1).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::NegativeQuantity(-1));

        assert!(get_products(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_update_stock_increments_only() {
        let conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());

        let updated = update_product_quantity(&conn, product.product_id, 5).unwrap();
        assert_eq!(updated.quantity, 15);
        assert_eq!(get_products(&conn).unwrap().len(), 1);
        assert_eq!(sale_count(&conn), 0);
    }

    #[test]
    fn test_update_stock_unknown_product() {
        let conn = test_db();
        let err = update_product_quantity(&conn, 404, 1).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::ProductNotFound(404));
    }

    #[test]
    fn test_update_stock_overflow_is_refused() {
        let conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());

        let err = update_product_quantity(&conn, product.product_id, i64::MAX).unwrap_err();
        assert_eq!(
            inventory_error(&err),
            &InventoryError::QuantityOverflow { current: 10, added: i64::MAX }
        );

        // Column stays INTEGER and every typed read still works.
        let kind: String = conn
            .query_row("SELECT typeof(quantity) FROM products", [], |row| row.get(0))
            .unwrap();
        assert_eq!(kind, "integer");
        assert_eq!(get_products(&conn).unwrap()[0].quantity, 10);
    }

    #[test]
    fn test_update_stock_up_to_max() {
        let conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());

        let updated = update_product_quantity(&conn, product.product_id, i64::MAX - 10).unwrap();
        assert_eq!(updated.quantity, i64::MAX);

        let err = update_product_quantity(&conn, product.product_id, 1).unwrap_err();
        assert_eq!(
            inventory_error(&err),
            &InventoryError::QuantityOverflow { current: i64::MAX, added: 1 }
        );
    }

    #[test]
    fn test_add_product_with_max_quantity_then_sell() {
        let mut conn = test_db();
        let product = added(add_product(&conn, "Bulk", 0.0, i64::MAX).unwrap());
        assert_eq!(product.quantity, i64::MAX);

        let outcome = record_sale(&mut conn, product.product_id, i64::MAX, date("2026-10-18")).unwrap();
        assert!(matches!(outcome, SaleOutcome::Recorded(ref s) if s.remaining_stock == 0));
        assert_eq!(get_products(&conn).unwrap()[0].quantity, 0);
    }

    #[test]
    fn test_update_stock_rejects_zero() {
        let conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());

        let err = update_product_quantity(&conn, product.product_id, 0).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::NonPositiveQuantity(0));
        assert_eq!(get_product(&conn, product.product_id).unwrap().unwrap().quantity, 10);
    }

    #[test]
    fn test_record_sale_then_oversell() {
        let mut conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());
        let today = date("2026-10-18");

        let outcome = record_sale(&mut conn, product.product_id, 3, today).unwrap();
        match outcome {
            SaleOutcome::Recorded(sale) => {
                assert_eq!(sale.quantity, 3);
                assert_eq!(sale.sale_date, today);
                assert_eq!(sale.remaining_stock, 7);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(get_product(&conn, product.product_id).unwrap().unwrap().quantity, 7);

        let sales = get_sales(&conn).unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_name, "Widget");
        assert_eq!(sales[0].quantity, 3);
        assert_eq!(sales[0].sale_date, today);

        let outcome = record_sale(&mut conn, product.product_id, 20, today).unwrap();
        assert_eq!(
            outcome,
            SaleOutcome::InsufficientStock { available: 7, requested: 20 }
        );
        assert_eq!(get_product(&conn, product.product_id).unwrap().unwrap().quantity, 7);
        assert_eq!(sale_count(&conn), 1);
    }

    #[test]
    fn test_record_sale_of_entire_stock() {
        let mut conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 4).unwrap());

        let outcome = record_sale(&mut conn, product.product_id, 4, date("2026-10-18")).unwrap();
        assert!(matches!(outcome, SaleOutcome::Recorded(ref s) if s.remaining_stock == 0));
        assert_eq!(get_product(&conn, product.product_id).unwrap().unwrap().quantity, 0);
    }

    #[test]
    fn test_record_sale_unknown_product() {
        let mut conn = test_db();
        let err = record_sale(&mut conn, 9, 1, date("2026-10-18")).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::ProductNotFound(9));
        assert_eq!(sale_count(&conn), 0);
    }

    #[test]
    fn test_record_sale_rejects_zero() {
        let mut conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 4).unwrap());
        let err = record_sale(&mut conn, product.product_id, 0, date("2026-10-18")).unwrap_err();
        assert_eq!(inventory_error(&err), &InventoryError::NonPositiveQuantity(0));
    }

    #[test]
    fn test_get_sales_joins_product_names() {
        let mut conn = test_db();
        let widget = added(add_product(&conn, "Widget", 2.50, 10).unwrap());
        let gadget = added(add_product(&conn, "Gadget", 5.00, 10).unwrap());

        record_sale(&mut conn, widget.product_id, 1, date("2026-10-17")).unwrap();
        record_sale(&mut conn, gadget.product_id, 2, date("2026-10-17")).unwrap();
        record_sale(&mut conn, widget.product_id, 3, date("2026-10-18")).unwrap();

        let sales = get_sales(&conn).unwrap();
        assert_eq!(sales.len() as i64, sale_count(&conn));
        let names: Vec<&str> = sales.iter().map(|s| s.product_name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget", "Widget"]);
    }

    #[test]
    fn test_sale_date_stored_as_iso_text() {
        let mut conn = test_db();
        let product = added(add_product(&conn, "Widget", 2.50, 10).unwrap());
        record_sale(&mut conn, product.product_id, 1, date("2026-01-05")).unwrap();

        let raw: String = conn
            .query_row("SELECT sale_date FROM sales", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2026-01-05");
    }
}
