use thiserror::Error;

/// Abiq error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error: {status} at {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// Payload could not be deserialized
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Session/configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = ApiError::Status {
            status: 404,
            url: "https://cloud.example.com/api/cloud/virtualdatacenters/7".to_string(),
            body: "Not Found".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("virtualdatacenters/7"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let json_error = result.unwrap_err();
        let api_error: ApiError = json_error.into();
        assert!(matches!(api_error, ApiError::Decode(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let api_error: ApiError = io_error.into();
        assert!(matches!(api_error, ApiError::Io(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ApiError::Config("test error".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }
}
