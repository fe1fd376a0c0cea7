//! Error types
//!
//! The decoding pipeline itself never fails; these cover loading
//! configuration and the runner's I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config error in '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = Error::InvalidConfig {
            field: "palette.ansi[1]".to_string(),
            message: "Invalid hex color 'red'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "config error in 'palette.ansi[1]': Invalid hex color 'red'"
        );
    }
}
