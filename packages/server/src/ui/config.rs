//! Server configuration.

use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g. "127.0.0.1")
    pub host: String,
    /// Port to bind to. `0` picks an ephemeral port.
    pub port: u16,
    /// `*` or a comma separated list of allowed origins
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            cors_origin: "*".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
        let origin = self.cors_origin.trim();
        let allow_origin = if origin == "*" {
            AllowOrigin::from(Any)
        } else {
            let origins = origin
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(HeaderValue::from_str)
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET]))
    }
}
