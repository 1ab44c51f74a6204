use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid function")]
    UnknownFunction(String),

    #[error("Invalid input value")]
    InvalidInput(String),

    #[error("Plot rendering failed: {0}")]
    Render(String)
}

impl EvaluationError {
    /// Caller-side mistakes, as opposed to failures of the service itself.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EvaluationError::Render(_))
    }
}
