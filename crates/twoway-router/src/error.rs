// File: src/error.rs
// Purpose: Error type for configuration loading and validation

use std::path::PathBuf;

/// Errors raised while loading or validating router configuration
///
/// Routing itself never errors: an unmatched path is the location's
/// `NotFound` value, not an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::Config)
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML text given directly is not valid for [`Config`](crate::Config)
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Splitting on an empty separator is meaningless
    #[error("router separator must not be empty")]
    EmptySeparator,
}

pub type Result<T> = std::result::Result<T, Error>;
