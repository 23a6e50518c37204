//! Face Liveness API Server Launcher
//!
//! Startup shim for the face-liveness backend: resolve a port from the
//! environment (`PORT`, default 8000), bind `0.0.0.0`, and serve the
//! application router until a termination signal arrives.
//!
//! # Architecture Overview
//!
//! ```text
//! PORT env / config file
//!     → config (schema, loader, env override, validation)
//!     → net (bind 0.0.0.0:<port>)
//!     → http (middleware stack: timeout, request id, metrics, trace)
//!     → app (the served application: health probe + service identity)
//!
//! Cross-cutting: lifecycle (signals → graceful shutdown),
//!                observability (tracing logs, optional Prometheus exporter)
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
