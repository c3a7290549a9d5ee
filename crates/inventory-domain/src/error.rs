//! API Errors
//!
//! Failures of a single request to the inventory server.

/// Result type for calls to the inventory server
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level errors
///
/// `Display` yields the bare underlying message for everything but
/// `Status`, so the UI can render it as `Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// fetch rejected (offline, DNS, aborted, CORS)
    Network(String),
    /// Response body was not the JSON (or blob) we asked for
    Decode(String),
    /// Request body could not be serialized
    Encode(String),
    /// Non-2xx status on an endpoint that returns no JSON
    Status(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::Decode(msg) => write!(f, "{}", msg),
            ApiError::Encode(msg) => write!(f, "{}", msg),
            ApiError::Status(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(ApiError::Network("timeout".into()).to_string(), "timeout");
        assert_eq!(
            ApiError::Decode("Unexpected token < in JSON".into()).to_string(),
            "Unexpected token < in JSON"
        );
        assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
    }
}
