//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.

use axum::Router;
use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{health, web, wines};
use crate::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // JSON reports
        .route("/wines", get(wines::list_wines))
        .route("/wines/search", get(wines::search_wines))
        // Frontend
        .route("/", get(web::index))
        .route("/ui/wines", get(web::wines_fragment))
        .route("/ui/wines/search", get(web::search_fragment))
        // Health
        .route("/health", get(health::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// The one origin allowed to call the API cross-origin.
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            cors_origin: "http://localhost:5173".into(),
        }
    }
}

impl ServerConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS policy: the configured origin, GET only.
    pub fn cors_layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
        let origin = HeaderValue::from_str(&self.cors_origin)?;
        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let config = ServerConfig {
            cors_origin: "http://bad\norigin".into(),
            ..Default::default()
        };
        assert!(config.cors_layer().is_err());
        assert!(ServerConfig::default().cors_layer().is_ok());
    }
}
