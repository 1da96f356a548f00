//! SQL statements for the inventory store.
//!
//! CHANGELOG:
//! - 10/18/2026 - Products/sales statements
//! - 01/10/2026 - Initial stub with query constants

pub const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    product_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    price REAL NOT NULL,
    quantity INTEGER NOT NULL
)
"#;

pub const CREATE_SALES: &str = r#"
CREATE TABLE IF NOT EXISTS sales (
    sale_id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    sale_date TEXT NOT NULL,
    FOREIGN KEY(product_id) REFERENCES products(product_id)
)
"#;

pub const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products";

pub const COUNT_SALES: &str = "SELECT COUNT(*) FROM sales";

pub const INSERT_PRODUCT: &str =
    "INSERT INTO products (name, price, quantity) VALUES (?1, ?2, ?3)";

/// Increment stock in place, unless the sum would leave the INTEGER range.
/// SQLite promotes an overflowing sum to REAL, so the guard must live here.
pub const ADD_STOCK: &str = r#"
UPDATE products SET quantity = quantity + ?1
WHERE product_id = ?2 AND quantity <= 9223372036854775807 - ?1
"#;

/// Decrement stock only when enough is on hand; callers check the row count.
pub const REMOVE_STOCK: &str =
    "UPDATE products SET quantity = quantity - ?1 WHERE product_id = ?2 AND quantity >= ?1";

pub const INSERT_SALE: &str =
    "INSERT INTO sales (product_id, quantity, sale_date) VALUES (?1, ?2, ?3)";

pub const PRODUCT_STOCK: &str = "SELECT quantity FROM products WHERE product_id = ?1";

pub const PRODUCT_BY_ID: &str = r#"
SELECT product_id, name, price, quantity
FROM products
WHERE product_id = ?1
"#;

pub const ALL_PRODUCTS: &str = r#"
SELECT product_id, name, price, quantity
FROM products
ORDER BY product_id
"#;

/// Every sale with its product's name.
pub const ALL_SALES: &str = r#"
SELECT
    s.sale_id,
    p.name AS product_name,
    s.quantity,
    s.sale_date
FROM sales s
JOIN products p ON s.product_id = p.product_id
ORDER BY s.sale_id
"#;
