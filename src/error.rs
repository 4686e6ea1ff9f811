//! Error type shared by the library modules.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can abort a run: network, decoding, or file I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
