//! Error types for the planning core and the HTTP collaborators.

use std::fmt;

/// A caller violated a documented precondition.
///
/// These are caller bugs, not recoverable runtime conditions: the core
/// never patches them over by substituting defaults or dropping inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// An empty coordinate set was passed where at least one point is required.
    EmptyPointSet,
    /// A stop without a coordinate reached the tour builder. Carries the
    /// stop's label for diagnostics.
    UngeocodedStop(String),
    /// An explicit start index points past the end of the stop list.
    StartOutOfRange { index: usize, len: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptyPointSet => write!(f, "empty coordinate set"),
            InvalidInput::UngeocodedStop(label) => {
                write!(f, "stop \"{}\" has no coordinate", label)
            }
            InvalidInput::StartOutOfRange { index, len } => {
                write!(f, "start index {} out of range for {} stops", index, len)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// A failure talking to a geocoding or POI lookup service.
#[derive(Debug)]
pub enum LookupError {
    /// Transport or HTTP-status failure.
    Http(reqwest::Error),
    /// The service answered but the payload could not be interpreted.
    Malformed(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Http(err) => write!(f, "lookup request failed: {}", err),
            LookupError::Malformed(detail) => write!(f, "malformed lookup response: {}", detail),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Http(err) => Some(err),
            LookupError::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Http(err)
    }
}
