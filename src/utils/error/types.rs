//! Error type definitions

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Main error type for plugin and extension administration
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML read or write errors
    #[error("XML error: {0}")]
    Xml(String),

    /// Non-success response from the management API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response payload did not have the expected shape
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Transition not offered by an endpoint family
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Entity not found in the current listing
    #[error("Not found: {0}")]
    NotFound(String),

    /// At least one request of a concurrent batch failed
    #[error("{failed} of {total} requests failed: {source}")]
    Batch {
        failed: usize,
        total: usize,
        #[source]
        source: Box<LifecycleError>,
    },
}

impl From<quick_xml::Error> for LifecycleError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<url::ParseError> for LifecycleError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("Invalid URL: {}", err))
    }
}
