//! Database schema and configuration
//!
//! **SoC:** This module ONLY defines schema and connection settings, no queries

use rusqlite::Connection;
use std::path::Path;

/// Storage configuration (declarative)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Read-only connections kept open for request handling
    pub pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "db/winedrops.db".to_string(),
            pool_size: 4,
        }
    }
}

impl StorageConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    /// Pool size actually used: at least one connection is always opened.
    pub fn effective_pool_size(&self) -> usize {
        self.pool_size.max(1)
    }
}

/// Create the order database tables.
///
/// The production database already has this shape; the server never calls
/// this. Used to build fixtures and empty local databases.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    // Wine catalog
    conn.execute(
        "CREATE TABLE IF NOT EXISTS master_wine (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            vintage INTEGER NOT NULL
        )",
        [],
    )?;

    // Sellable products, several per catalog wine (bottle sizes, cases)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS wine_product (
            id INTEGER PRIMARY KEY,
            master_wine_id INTEGER NOT NULL REFERENCES master_wine(id)
        )",
        [],
    )?;

    // Customer orders, one product per order
    conn.execute(
        "CREATE TABLE IF NOT EXISTS customer_order (
            id INTEGER PRIMARY KEY,
            wine_product_id INTEGER NOT NULL REFERENCES wine_product(id),
            quantity INTEGER NOT NULL,
            total_amount REAL NOT NULL,
            status TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_customer_order_status ON customer_order(status)",
        [],
    )?;

    Ok(())
}
