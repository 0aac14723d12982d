//! Error types for the rewrite engine

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building rewrite rules or loading site configuration.
///
/// The pipelines themselves are infallible: unmatched or malformed input is
/// passed through unchanged. Everything that can go wrong surfaces here,
/// before any page is touched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid rewrite pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read site configuration from {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site configuration in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
