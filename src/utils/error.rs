use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{backend} client unavailable: {message}")]
    BackendUnavailable {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} responded with {status}: {message}")]
    BackendError {
        backend: &'static str,
        status: u16,
        message: String,
    },

    #[error("Could not decode stored document: {message}")]
    DecodeError { message: String },

    #[error("No group {location}/{league}/{group} in league data")]
    UnknownGroup {
        location: String,
        league: String,
        group: String,
    },
}

impl GatewayError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::HttpError(_) => "Could not reach the data backend".to_string(),
            GatewayError::IoError(e) => format!("Could not read league data: {}", e),
            GatewayError::SerializationError(_) => "League data is not valid JSON".to_string(),
            GatewayError::ConfigError { .. }
            | GatewayError::MissingConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            GatewayError::BackendUnavailable { backend, .. } => {
                format!("The {} backend is not configured", backend)
            }
            GatewayError::BackendError { backend, status, .. } => {
                format!("The {} backend rejected the request ({})", backend, status)
            }
            GatewayError::DecodeError { .. } => "Stored league data is corrupt".to_string(),
            GatewayError::UnknownGroup { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GatewayError::HttpError(_) => "Check the network connection and backend URL",
            GatewayError::IoError(_) => "Make sure the data file exists and is readable",
            GatewayError::SerializationError(_) => "Fix the JSON syntax in the data file",
            GatewayError::ConfigError { .. }
            | GatewayError::MissingConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => {
                "Review the gateway configuration file"
            }
            GatewayError::BackendUnavailable { .. } => {
                "Fill in the backend settings or switch provider to 'local'"
            }
            GatewayError::BackendError { .. } => "Check the API key and access rules of the backend",
            GatewayError::DecodeError { .. } => "Inspect the stored document in the backend console",
            GatewayError::UnknownGroup { .. } => "Check the location, league and group names",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
