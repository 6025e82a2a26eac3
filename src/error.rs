//! Crate error type
//!
//! The simulation itself never fails; errors only come from building a level
//! out of bad data or from reading files in the native runner.

use std::path::PathBuf;

/// Errors raised while constructing a session or loading its inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{what} must have positive size, got {w}x{h}")]
    InvalidSize { what: &'static str, w: f32, h: f32 },

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
