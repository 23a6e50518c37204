//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger()
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast to subscribers → server drains and exits
//! ```
//!
//! # Design Decisions
//! - Startup is fail fast: any error before the listener is serving is fatal
//! - Shutdown is cooperative: the server finishes in-flight requests

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
