use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid reference string")]
    EmptyReferenceString,
    #[error("Please enter a valid number of frames (1-{max}), got {value}")]
    InvalidFrameCount { value: usize, max: usize },
    #[error("Frame count '{0}' is not a number")]
    UnparseableFrameCount(String),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
