// Folio - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Folio operations.
#[derive(Debug)]
pub enum FolioError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// The native window or rendering backend could not be started.
    Gui { source: eframe::Error },
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Gui { source } => write!(f, "Failed to launch window: {source}"),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Gui { source } => Some(source),
        }
    }
}

impl From<eframe::Error> for FolioError {
    fn from(source: eframe::Error) -> Self {
        Self::Gui { source }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to config.toml loading and validation.
///
/// Only `DirectoryNotFound` stops startup; the loader reports the others as
/// warnings and falls back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// A config directory given on the command line does not exist.
    DirectoryNotFound { path: PathBuf },

    /// The config file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The config file is not valid TOML for the expected shape.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value is outside its accepted range or set.
    InvalidValue {
        key: &'static str,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryNotFound { path } => {
                write!(f, "Config directory '{}' does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "{key} = {value} is invalid (expected {expected})"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::DirectoryNotFound { .. } | Self::InvalidValue { .. } => None,
        }
    }
}

impl From<ConfigError> for FolioError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_chain_preserved() {
        let err: FolioError = ConfigError::Read {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error:"), "got {msg}");
        assert!(msg.contains("config.toml"));
        // FolioError -> ConfigError -> io::Error
        let inner = err.source().and_then(|e| e.source());
        assert!(inner.is_some());
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            key: "[ui] font_size",
            value: "99".to_string(),
            expected: "10-32".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "[ui] font_size = 99 is invalid (expected 10-32)"
        );
        assert!(err.source().is_none());
    }
}
