//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign/propagate x-request-id)
//!     → application router (app::main::app)
//!     → response back to client, request id echoed
//! ```

pub mod request;
pub mod server;

pub use request::{propagate_request_id, X_REQUEST_ID};
pub use server::HttpServer;
