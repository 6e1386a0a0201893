//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DkError` as one variant
//! via `#[from]`.  Decisions made by the lane itself never fail; these errors
//! cover validation of inputs that arrive from outside (files, user config).

use thiserror::Error;

/// The top-level error type for `dk-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DkError {
    #[error("invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `dk-*` crates.
pub type DkResult<T> = Result<T, DkError>;
