//! Shared server state.

use std::sync::Arc;
use storage::WineStore;

/// State handed to every handler.
///
/// The store is opened once at startup and injected here; handlers never
/// reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WineStore>,
}

impl AppState {
    pub fn new(store: WineStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
