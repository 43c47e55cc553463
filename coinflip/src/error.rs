use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("coin sequences must only consist of heads or tails, found {0:?}")]
    InvalidFace(String),
    #[error("coin sequences must contain at least one flip")]
    EmptySequence,
    #[error("the player sequences must be of equal length - play fair (p1: {p1}, p2: {p2})")]
    UnequalLengths { p1: usize, p2: usize },
}
