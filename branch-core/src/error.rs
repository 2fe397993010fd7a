use thiserror::Error;

/// Errors raised while building or loading a growth configuration.
///
/// Growth itself never fails; rejected candidates and an exhausted
/// budget are silent outcomes reported through [`crate::engine::StepReport`].
#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("malformed config document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type GrowthResult<T> = Result<T, GrowthError>;
