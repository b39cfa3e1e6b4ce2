//! Errors raised at the analysis-service boundary.
//!
//! None of these reach the view: hazard failures become fallback snapshots,
//! report failures become a failure notification.

use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum ClientError {
    /// Connection refused, DNS, timeout, body read failure
    Transport(String),
    /// Any non-2xx status
    Status(u16),
    /// Body was not the expected JSON
    Decode(String),
    /// The service answered 2xx but reported its own failure
    Service(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Request failed: {}", e),
            ClientError::Status(code) => write!(f, "HTTP error! status: {}", code),
            ClientError::Decode(e) => write!(f, "Malformed response: {}", e),
            ClientError::Service(e) => write!(f, "Analysis service error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(feature = "api")]
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_never_empty() {
        let errors = [
            ClientError::Transport("connection refused".to_string()),
            ClientError::Status(503),
            ClientError::Decode("expected value at line 1".to_string()),
            ClientError::Service("json_parse_error".to_string()),
        ];
        for e in errors {
            assert!(!e.to_string().is_empty());
        }
        assert_eq!(ClientError::Status(503).to_string(), "HTTP error! status: 503");
    }
}
