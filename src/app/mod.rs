//! The application the launcher serves.
//!
//! The launcher itself owns no routes; it binds a socket and hands traffic to
//! the router built here. `main::app()` is the static Rust analog of the
//! `app.main:app` entry-point string the original deployment pointed its
//! server runtime at.

pub mod main;

pub use main::app;
