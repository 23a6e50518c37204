//! Environment overrides for the configuration.
//!
//! The launcher's one environment knob is `PORT`: a valid integer string
//! replaces the configured listener port, absence leaves the default (8000)
//! in place, and anything else is a startup error. Parsing is kept as a pure
//! function so tests never have to touch the process environment.

use crate::config::schema::{ServerConfig, DEFAULT_PORT};

/// Environment variable holding the listener port.
pub const PORT_VAR: &str = "PORT";

/// Error type for environment resolution.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("invalid {PORT_VAR} value {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },

    #[error("{PORT_VAR} is not valid unicode")]
    NotUnicode,
}

/// Resolve the listener port from an optional raw `PORT` value.
///
/// `None` (variable unset) resolves to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> Result<u16, EnvError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| EnvError::InvalidPort {
                value: value.to_string(),
            }),
    }
}

/// Apply environment overrides to a loaded configuration.
pub fn apply_overrides(config: &mut ServerConfig) -> Result<(), EnvError> {
    let raw = match std::env::var(PORT_VAR) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => return Err(EnvError::NotUnicode),
    };

    config.listener.port = resolve_port(raw.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_resolves_to_default() {
        assert_eq!(resolve_port(None).unwrap(), 8000);
    }

    #[test]
    fn valid_integer_resolves_exactly() {
        assert_eq!(resolve_port(Some("9090")).unwrap(), 9090);
        assert_eq!(resolve_port(Some("1")).unwrap(), 1);
        assert_eq!(resolve_port(Some("65535")).unwrap(), 65535);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(resolve_port(Some(" 3001 ")).unwrap(), 3001);
    }

    #[test]
    fn non_integer_is_rejected() {
        assert!(resolve_port(Some("eight thousand")).is_err());
        assert!(resolve_port(Some("")).is_err());
        assert!(resolve_port(Some("80.0")).is_err());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(resolve_port(Some("0")).is_err());
        assert!(resolve_port(Some("70000")).is_err());
        assert!(resolve_port(Some("-1")).is_err());
    }

    #[test]
    fn error_message_names_the_variable_and_value() {
        let err = resolve_port(Some("abc")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PORT"));
        assert!(msg.contains("abc"));
    }

    // The only test that touches the real environment; keeping it singular
    // avoids races between parallel tests over the same variable.
    #[test]
    fn apply_overrides_reads_process_environment() {
        let mut config = ServerConfig::default();
        std::env::set_var(PORT_VAR, "4242");
        let result = apply_overrides(&mut config);
        std::env::remove_var(PORT_VAR);
        result.unwrap();
        assert_eq!(config.listener.port, 4242);
    }
}
