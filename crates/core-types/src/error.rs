use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Not enough data points: need at least {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
