//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the application router with middleware (timeout, request ID,
//!   metrics, trace)
//! - Serve the router on a bound listener
//! - Drain and exit when the shutdown coordinator fires

use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::propagate_request_id;
use crate::lifecycle::Shutdown;
use crate::observability::metrics::track_request;

/// HTTP server wrapping the application router.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `app` under the middleware stack.
    pub fn new(config: ServerConfig, app: Router) -> Self {
        let router = Self::build_router(&config, app);
        Self { router, config }
    }

    /// Apply the middleware stack to the application router.
    fn build_router(config: &ServerConfig, app: Router) -> Router {
        app.layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(middleware::from_fn(track_request))
        .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown coordinator fires.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
