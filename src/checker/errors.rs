use std::fmt;

/// Errors produced while fetching one well-known file.
///
/// Both kinds are non-fatal: the fetch boundary logs them and converts
/// them into an absent result, so neither ever aborts a run.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered, but with something other than 200.
    Status(u16),
    /// Transport-level failure (DNS, connection, timeout, body read).
    Transport(String),
}

/// Top-level error type for the checker.
#[derive(Debug)]
pub enum CheckError {
    /// Fetch related errors
    Fetch(FetchError),
    /// Configuration related errors
    Configuration(String),
    /// URL validation errors
    InvalidUrl(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "unexpected HTTP status: {}", code),
            FetchError::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Fetch(e) => write!(f, "Fetch error: {}", e),
            CheckError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            CheckError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
impl std::error::Error for CheckError {}

// Conversion implementations for common error types
impl From<FetchError> for CheckError {
    fn from(err: FetchError) -> Self {
        CheckError::Fetch(err)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        CheckError::Fetch(err.into())
    }
}

impl From<url::ParseError> for CheckError {
    fn from(err: url::ParseError) -> Self {
        CheckError::InvalidUrl(err.to_string())
    }
}

impl From<serde_yaml::Error> for CheckError {
    fn from(err: serde_yaml::Error) -> Self {
        CheckError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        CheckError::Configuration(err.to_string())
    }
}

/// Result type alias for checker operations
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let error = FetchError::Status(404);
        assert!(error.to_string().contains("404"));

        let error = FetchError::Transport("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_check_error_display() {
        let error = CheckError::Fetch(FetchError::Status(503));
        assert!(error.to_string().contains("Fetch error"));
        assert!(error.to_string().contains("503"));

        let error = CheckError::Configuration("missing base_url".to_string());
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_url_error_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let check_err: CheckError = parse_err.into();

        match check_err {
            CheckError::InvalidUrl(_) => {}
            _ => panic!("Expected InvalidUrl"),
        }
    }

    #[test]
    fn test_fetch_error_conversion() {
        let fetch_err = FetchError::Status(500);
        let check_err: CheckError = fetch_err.into();

        match check_err {
            CheckError::Fetch(FetchError::Status(500)) => {}
            _ => panic!("Expected Fetch(Status(500))"),
        }
    }
}
