use std::fmt::{self, Display};

/// The crate-wide error type, with conversions from the errors
/// the crate surface can produce
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum MingleError {
    JsonError(serde_json::Error),
    MingleError(String),
}

impl From<serde_json::Error> for MingleError {
    fn from(error: serde_json::Error) -> Self {
        MingleError::JsonError(error)
    }
}

impl From<String> for MingleError {
    fn from(error: String) -> Self {
        MingleError::MingleError(error)
    }
}

impl From<&str> for MingleError {
    fn from(error: &str) -> Self {
        MingleError::MingleError(error.to_string())
    }
}

impl std::error::Error for MingleError {}

impl Display for MingleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
