//! Database module for the local SQLite inventory store.
//!
//! CHANGELOG:
//! - 10/18/2026 - Replaced Messages.db modules with inventory schema and helpers
//! - 01/10/2026 - Initial module structure

pub mod connection;
pub mod helpers;
pub mod queries;
pub mod schema;
