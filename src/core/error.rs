use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("Invalid capacity '{capacity}' - must be at least 1")]
    InvalidCapacity { capacity: i64 },
    #[error("Invalid search mode '{0}' - expected 'recent' or 'oldest'")]
    InvalidMode(String),
}
