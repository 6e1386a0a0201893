use dk_core::DkError;
use dk_script::ScriptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("lane error: {0}")]
    Lane(#[from] DkError),

    #[error("script error: {0}")]
    Script(#[from] ScriptError),
}

pub type SimResult<T> = Result<T, SimError>;
