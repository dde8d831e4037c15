use thiserror::Error;

/// Errors produced while generating a token.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("entropy source failed: {0}")]
    Entropy(String),
    #[error("token computation did not complete: {0}")]
    Computation(String),
}
