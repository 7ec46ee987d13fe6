use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Failures raised by the array and matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Indices, ordering or dimensions violate the operation's preconditions.
    InvalidArgument(String),
    /// A matrix, or its first row, holds no data.
    MissingData(String),
}

impl ArrayError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ArrayError::InvalidArgument(message.into())
    }

    pub(crate) fn missing(message: impl Into<String>) -> Self {
        ArrayError::MissingData(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArrayError::InvalidArgument(_))
    }

    pub fn is_missing_data(&self) -> bool {
        matches!(self, ArrayError::MissingData(_))
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ArrayError::MissingData(msg) => write!(f, "Missing data: {}", msg),
        }
    }
}

impl Error for ArrayError {}

impl From<ShapeError> for ArrayError {
    fn from(err: ShapeError) -> Self {
        ArrayError::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArrayError>;
