//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → env.rs (PORT override from process environment)
//!     → ServerConfig (resolved, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; no runtime reload
//! - All fields have defaults so the server runs with no file at all
//! - Environment wins over file: `PORT` replaces the configured port
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::TimeoutConfig;
pub use schema::DEFAULT_PORT;
