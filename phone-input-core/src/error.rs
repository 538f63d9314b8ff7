//! Error types for the phone input

use std::path::PathBuf;

/// Errors raised by catalog search, formatter setup and config loading
///
/// Phone input itself never fails: malformed numbers degrade to partially
/// formatted text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search text is not a valid regular expression
    #[error("invalid country search pattern {pattern:?}")]
    InvalidSearch {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Default region is not known to the formatting library
    #[error("unknown default region {0:?}")]
    UnknownRegion(String),

    /// Config file could not be read
    #[error("failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`PhoneInputConfig`](crate::PhoneInputConfig)
    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
