use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal server error")]
    InternalServerError,
}
