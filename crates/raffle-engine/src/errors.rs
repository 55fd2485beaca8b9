use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Inconsistent draw state: {0}")]
    InconsistentState(String),
}
