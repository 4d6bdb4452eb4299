use nano_types::TypesError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkError {
    #[error("invalid work {0:?}: expected 16 hex characters")]
    InvalidWork(String),

    #[error("invalid difficulty {0:?}: expected 16 hex characters")]
    InvalidDifficulty(String),

    #[error("invalid block hash {0:?}: expected 64 hex characters")]
    InvalidBlockHash(String),

    #[error("invalid multiplier {0:?}: expected a positive finite number")]
    InvalidMultiplier(String),

    #[error("derived difficulty {0} is outside the 64-bit range")]
    DifficultyOutOfRange(f64),

    #[error("work thread pool: {0}")]
    ThreadPool(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging: {0}")]
    Logging(String),
}

impl From<TypesError> for WorkError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::InvalidBlockHash(s) => Self::InvalidBlockHash(s),
            other => Self::Config(other.to_string()),
        }
    }
}
