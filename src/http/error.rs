//! Errors that end a connection without (or partway through) a response.

use std::path::PathBuf;

use crate::http::parser::ParseError;

#[derive(Debug)]
pub enum ConnectionError {
    /// The initial chunk could not be parsed into a request.
    Parse(ParseError),
    /// A header the status decision depends on was not sent.
    MissingRequiredHeader(&'static str),
    /// The body file could not be read at send time.
    BodyIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Socket read or write failed.
    Io(std::io::Error),
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionError::Parse(e) => write!(f, "HTTP parse error: {}", e),
            ConnectionError::MissingRequiredHeader(name) => {
                write!(f, "missing required header {}", name)
            }
            ConnectionError::BodyIo { path, source } => {
                write!(f, "failed to read body {}: {}", path.display(), source)
            }
            ConnectionError::Io(e) => write!(f, "socket error: {}", e),
        }
    }
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectionError::Parse(e) => Some(e),
            ConnectionError::BodyIo { source, .. } => Some(source),
            ConnectionError::Io(e) => Some(e),
            ConnectionError::MissingRequiredHeader(_) => None,
        }
    }
}

impl From<ParseError> for ConnectionError {
    fn from(e: ParseError) -> Self {
        ConnectionError::Parse(e)
    }
}

impl From<std::io::Error> for ConnectionError {
    fn from(e: std::io::Error) -> Self {
        ConnectionError::Io(e)
    }
}
