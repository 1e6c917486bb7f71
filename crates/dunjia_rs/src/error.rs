//! Error types for the facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use dunjia_time::TimeError;

/// Errors from loading inputs. Chart computation itself never fails.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DunjiaError {
    /// A timestamp could not be parsed.
    Time(TimeError),
    /// Settings, profile or input JSON was malformed.
    Settings(String),
    /// I/O error while reading a file.
    Io(String),
}

impl Display for DunjiaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Settings(msg) => write!(f, "settings error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for DunjiaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for DunjiaError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<serde_json::Error> for DunjiaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Settings(e.to_string())
    }
}

impl From<std::io::Error> for DunjiaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
