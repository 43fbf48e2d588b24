use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepError {
    #[error("Invalid milliseconds value: {value}. Must be a non-negative number.")]
    InvalidDurationError { value: String },

    #[error("milliseconds is not a number")]
    NotANumberError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StepError>;
