use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("GitHub API rate limit exceeded: {url}")]
    RateLimited { url: String },

    #[error("GitHub API returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl StatsError {
    /// Failure kind used when logging degraded upstream calls.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::RateLimited { .. } | Self::UpstreamStatus { .. } => {
                "upstream-unavailable"
            }
            Self::SerializationError(_) => "upstream-malformed",
            _ => "local",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
