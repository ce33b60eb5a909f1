//! Server crate: Axum web service for the winedrops sales reports.
//!
//! Serves two JSON reports over the order database and a small htmx
//! frontend that renders them.
//!
//! # Endpoints
//!
//! - `GET /wines?criteria={revenue|quantity|orders}` - per-wine totals, sorted
//! - `GET /wines/search?query=...` - per-wine totals for matching wines
//! - `GET /health` - liveness probe
//! - `GET /` - frontend page
//! - `GET /ui/wines`, `GET /ui/wines/search` - frontend list fragments
//!
//! # Modules
//!
//! - [`app`]: Router builder and server configuration
//! - [`state`]: Shared handler state (the store handle)
//! - [`error`]: Error type and its HTTP mapping
//! - [`reports`]: Fetch, aggregate and sort, shared by JSON and HTML handlers
//! - [`dto`]: Query parameters and JSON response shapes
//! - [`routes`]: HTTP route handlers

pub mod app;
pub mod dto;
pub mod error;
pub mod reports;
pub mod routes;
pub mod state;

pub use app::{ServerConfig, create_app};
pub use error::{AppError, AppResult};
pub use state::AppState;
