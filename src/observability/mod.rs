//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Prometheus scrape endpoint (optional, off by default)
//! ```
//!
//! # Design Decisions
//! - Config log level is the default filter; RUST_LOG wins when set
//! - Metrics are cheap (atomic increments) and recorded unconditionally;
//!   only the exporter is gated by config

pub mod logging;
pub mod metrics;
