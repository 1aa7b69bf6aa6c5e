//! Error types for loading ordering inputs.
//!
//! Ordering itself is total and never fails; only the optional inputs read
//! from disk or text (configuration and checksum indexes) can be rejected.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or a checksum index.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The ordering configuration is not valid TOML for [`crate::OrderingConfig`].
    #[error("invalid ordering configuration: {source}")]
    InvalidConfig {
        /// Parser diagnostic.
        #[from]
        source: toml::de::Error,
    },

    /// The checksum index is not valid JSON for [`crate::ChecksumIndex`].
    #[error("invalid checksum index: {source}")]
    InvalidChecksumIndex {
        /// Parser diagnostic.
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias using [`OrderingError`].
pub type Result<T> = std::result::Result<T, OrderingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn read_error_names_the_path() {
        let err = OrderingError::Read {
            path: Utf8PathBuf::from("conf/ordering.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read conf/ordering.toml: missing");
    }

    #[rstest]
    fn parse_errors_convert_with_question_mark() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        let err = parse("{").expect_err("truncated JSON should fail");
        assert!(matches!(err, OrderingError::InvalidChecksumIndex { .. }));
    }
}
