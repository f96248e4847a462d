use std::fmt;

/// Ways a feed request can fail. All of them are handled the same way by the
/// loader (one notice, no retry); the variants exist for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, refused connection, timeout, broken body).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16 },
    /// The body was not a JSON array.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status } => write!(f, "feed returned HTTP {status}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
