//! TCP listener binding.
//!
//! # Responsibilities
//! - Resolve the configured host and port into a socket address
//! - Bind the listening socket
//! - Distinguish a bad address from a bind failure so startup errors are
//!   actionable (a port already in use reads differently than a typo'd host)

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("invalid bind address {address:?}: {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Bind a TCP listener for the configured address.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr = config.bind_address().map_err(|source| ListenerError::Address {
        address: format!("{}:{}", config.host, config.port),
        source,
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind {
            address: addr.to_string(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
