//! Read-only SQLite query layer for winedrops.
//!
//! **Philosophy:** Declarative, Modular, SoC
//! - Declarative: the order join and status filter live in one place ([`query`])
//! - Modular: [`WineStore`] is the only handle the server holds
//! - SoC: this crate ONLY fetches order lines, aggregation happens elsewhere
//!
//! The order database is an external collaborator with a fixed schema;
//! [`schema`] documents it and builds it for fixtures and local databases.

mod error;
pub mod query;
pub mod schema;
mod store;

pub use error::StoreError;
pub use schema::{StorageConfig, init_schema};
pub use store::WineStore;
