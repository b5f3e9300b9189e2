use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Period '{0}' must look like YYYY, YYYY-Qn or YYYY-MM")]
    InvalidPeriod(String),

    #[error("Identifier must not be empty: {0}")]
    EmptyIdentifier(&'static str),
}
