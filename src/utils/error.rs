use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data source error: {endpoint} - {message}")]
    Source { endpoint: String, message: String },

    #[error("Rate limited by the statistics API, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    Validation { message: String, suggestion: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

impl TrackerError {
    pub fn unknown_country(code: &str) -> Self {
        TrackerError::Validation {
            message: format!("Unknown country: '{code}'"),
            suggestion: "Use an ISO 3166-1 alpha-2 code (e.g. US, IN, BR) or 'worldwide'"
                .to_string(),
        }
    }

    pub fn invalid_rows(rows: &str) -> Self {
        TrackerError::Validation {
            message: format!("Invalid row limit: '{rows}'"),
            suggestion: "Row limit must be a non-negative integer (0 shows all countries)"
                .to_string(),
        }
    }

    pub fn invalid_days(days: usize) -> Self {
        TrackerError::Validation {
            message: format!("Invalid history window: {days} days"),
            suggestion: "The history window must be between 1 and 3650 days".to_string(),
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Parse {
            message: "Failed to parse JSON response".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out. Check your network connection.".to_string()
        } else if err.is_connect() {
            "Failed to connect to the statistics API. Check your network connection.".to_string()
        } else if err.is_status() {
            format!(
                "HTTP error: {}",
                err.status()
                    .map_or("unknown".to_string(), |s| s.to_string())
            )
        } else {
            "Network request failed".to_string()
        };

        TrackerError::Network {
            message,
            source: Some(Box::new(err)),
        }
    }
}

/// Format an error for terminal display, with the source chain in verbose mode.
pub fn format_error(error: &TrackerError, verbose: bool) -> String {
    let mut out = format!("\u{26a0} Error: {error}");

    if verbose {
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
    }

    out
}
