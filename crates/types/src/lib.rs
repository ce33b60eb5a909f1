//! Core types for the winedrops sales reports.
//!
//! This crate provides the data shared across the workspace: the flat order
//! line read from the order database, the per-wine summary built from it,
//! the sort criteria, and the exact decimal type used for revenue.

pub mod ids;
pub mod money;
pub mod wine;

pub use ids::WineId;
pub use money::Amount;
pub use wine::{Criteria, OrderLine, WineSummary};
