//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, middleware::map_response, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::{CorsConfig, DatabaseConfig, GatewayConfig};
use crate::diagnostics::{DatabaseProbe, TcpDatabaseProbe};
use crate::http::error::json_error_body;
use crate::http::request::{request_span, MakeRequestUuidV4};
use crate::relay::{RelayError, UpstreamRelay};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: UpstreamRelay,
    pub database: Option<Arc<dyn DatabaseProbe>>,
    pub database_config: Arc<DatabaseConfig>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    config: GatewayConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, RelayError> {
        let relay = UpstreamRelay::new(&config.upstreams, &config.timeouts)?;
        let database = TcpDatabaseProbe::from_config(&config.database)
            .map(|probe| Arc::new(probe) as Arc<dyn DatabaseProbe>);

        let state = AppState {
            relay,
            database,
            database_config: Arc::new(config.database.clone()),
        };

        Ok(Self { config, state })
    }

    /// Replace the database probe used by the diagnostic endpoint.
    pub fn with_database_probe(mut self, probe: Arc<dyn DatabaseProbe>) -> Self {
        self.state.database = Some(probe);
        self
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Body limit and deadline rejections pass through `json_error_body`,
    /// so every error leaves as `{"detail": ...}`.
    pub fn router(&self) -> Router {
        let router = api::routes()
            .with_state(self.state.clone())
            .layer(RequestBodyLimitLayer::new(self.config.limits.max_body_bytes))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::GATEWAY_TIMEOUT,
                Duration::from_secs(self.config.timeouts.request_secs),
            ))
            .layer(map_response(json_error_body))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4));

        match cors_layer(&self.config.cors) {
            Some(cors) => router.layer(cors),
            None => router,
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream_timeout_secs = self.config.timeouts.upstream_secs,
            "HTTP server starting"
        );

        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Permissive policy: origin, methods and headers are mirrored from the
/// request, which is what "allow all" means once credentials are allowed.
fn cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if !config.enabled {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(config.allow_credentials),
    )
}
