//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("taxogen.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("taxogen.toml"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation("[build.categories] must be inside the site root".into());
        assert!(format!("{err}").contains("[build.categories]"));
    }
}
