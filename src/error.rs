// src/error.rs

use thiserror::Error;

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Failure of a single selection call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The candidate list was empty, or nothing in it was eligible with a usable pacing value.
    #[error("no eligible campaign")]
    NoEligibleCampaign,
}

/// Failure while loading campaigns or requests from a source file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: simd_json::Error,
    },
}
