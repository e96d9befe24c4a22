use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Connection failures, timeouts and unreadable bodies.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("CSV system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),
}

impl EngineError {
    // Failures at the network boundary. The paginator turns these into an
    // empty page plus a reported failure instead of aborting the fetch.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            EngineError::Transport(_) | EngineError::HttpStatus { .. } | EngineError::MalformedPayload(_)
        )
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EngineError::MalformedPayload(err.to_string())
        } else if let Some(status) = err.status() {
            EngineError::HttpStatus { status: status.as_u16(), body: err.to_string() }
        } else {
            EngineError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::MalformedPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(EngineError::Transport("timed out".into()).is_transport());
        assert!(EngineError::HttpStatus { status: 503, body: String::new() }.is_transport());
        assert!(EngineError::MalformedPayload("bad".into()).is_transport());
        assert!(!EngineError::ConfigError("bad".into()).is_transport());
        assert!(!EngineError::InvalidDateRange("bad".into()).is_transport());
    }

    #[test]
    fn test_serde_json_error_is_malformed_payload() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let engine_err = EngineError::from(err);
        assert!(matches!(engine_err, EngineError::MalformedPayload(_)));
        assert!(engine_err.to_string().starts_with("Malformed payload"));
    }
}
