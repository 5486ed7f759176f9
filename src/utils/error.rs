use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommuteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to load env file: {0}")]
    EnvFileError(#[from] dotenvy::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CommuteError {
    /// True for failures caused by the record store rather than by this process.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CommuteError::ApiError(_)
                | CommuteError::UpstreamStatus { .. }
                | CommuteError::MalformedResponse { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CommuteError::MissingConfigError { field } => {
                format!("Required setting `{}` is not set", field)
            }
            CommuteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting `{}` is invalid: {}", field, reason)
            }
            other if other.is_upstream() => "The record store could not be reached".to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommuteError>;
