//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`wines`]: JSON reporting endpoints
//! - [`health`]: Liveness probe
//! - [`web`]: HTML page and htmx fragments

pub mod health;
pub mod web;
pub mod wines;
