//! Pooled read-only access to the order database.

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use types::OrderLine;

use crate::error::StoreError;
use crate::query::{SEARCH_LINES_SQL, SOLD_LINES_SQL, fetch_lines, search_params};
use crate::schema::StorageConfig;

/// Handle to the order database, shared by every request.
///
/// Holds a fixed set of read-only connections. rusqlite is blocking, so each
/// query checks out a connection round-robin and runs on tokio's blocking
/// pool; the calling task just awaits the result. Dropping the store closes
/// every connection.
pub struct WineStore {
    path: String,
    conns: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl WineStore {
    /// Open the configured number of read-only connections.
    ///
    /// The order database is external, so `:memory:` (always empty) is
    /// refused rather than served as a store with no tables.
    pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        if config.path == ":memory:" {
            return Err(StoreError::InMemory);
        }

        let open_err = |source: rusqlite::Error| StoreError::Open {
            path: config.path.clone(),
            source,
        };

        let conns = (0..config.effective_pool_size())
            .map(|_| {
                Connection::open_with_flags(
                    &config.path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map(Mutex::new)
                .map_err(&open_err)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(path = %config.path, connections = conns.len(), "order database opened");

        Ok(Self {
            path: config.path.clone(),
            conns,
            next: AtomicUsize::new(0),
        })
    }

    /// Wrap an already-open connection (single-connection pool).
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            path: conn
                .path()
                .filter(|p| !p.is_empty())
                .unwrap_or(":memory:")
                .to_string(),
            conns: vec![Mutex::new(conn)],
            next: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pool_size(&self) -> usize {
        self.conns.len()
    }

    /// Every paid or dispatched order line.
    pub async fn sold_lines(self: &Arc<Self>) -> Result<Vec<OrderLine>, StoreError> {
        self.with_connection(|conn| fetch_lines(conn, SOLD_LINES_SQL, []))
            .await
    }

    /// Paid or dispatched order lines whose wine name contains `query`
    /// (ASCII case-insensitive) or whose vintage contains it.
    pub async fn search_lines(
        self: &Arc<Self>,
        query: &str,
    ) -> Result<Vec<OrderLine>, StoreError> {
        let (name, vintage) = search_params(query);
        self.with_connection(move |conn| fetch_lines(conn, SEARCH_LINES_SQL, [name, vintage]))
            .await
    }

    /// Run `f` against the next pooled connection on the blocking pool.
    async fn with_connection<F, T>(self: &Arc<Self>, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(self);
        let result = tokio::task::spawn_blocking(move || {
            let slot = store.next.fetch_add(1, Ordering::Relaxed) % store.conns.len();
            let conn = store.conns[slot].lock();
            f(&conn)
        })
        .await?;

        Ok(result?)
    }
}
