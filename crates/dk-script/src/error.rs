use dk_core::DkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script parse error: {0}")]
    Parse(String),

    #[error("script row {row}: {source}")]
    Candidate {
        row:    usize,
        #[source]
        source: DkError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
