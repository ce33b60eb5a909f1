use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("in-memory database has no order tables; pass a database file")]
    InMemory,

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("query task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
