//! Network listener subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host + port)
//!     → listener.rs (resolve address, bind TCP socket)
//!     → tokio TcpListener handed to the HTTP server
//! ```

pub mod listener;

pub use listener::{bind_listener, ListenerError};
