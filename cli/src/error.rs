use std::fmt;
use std::io;

use gridroute_io::{InvalidCoordinate, LoadError};
use gridroute_paths::SearchError;

/// Anything that stops a command from finishing.
#[derive(Debug)]
pub enum CliError {
    Load(LoadError),
    Coordinate(InvalidCoordinate),
    Search(SearchError),
    /// Standard input ended before the question was answered.
    InputClosed,
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "invalid grid: {e}"),
            Self::Coordinate(e) => write!(f, "invalid coordinate: {e}"),
            Self::Search(e) => write!(f, "search rejected: {e}"),
            Self::InputClosed => write!(f, "input closed before start and goal were chosen"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Json(e) => write!(f, "cannot encode report: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Coordinate(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::InputClosed => None,
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<InvalidCoordinate> for CliError {
    fn from(e: InvalidCoordinate) -> Self {
        Self::Coordinate(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
