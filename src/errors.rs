use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid reminder request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for ReminderError {
    fn from(error: serde_json::Error) -> Self {
        ReminderError::InvalidRequest(error.to_string())
    }
}

impl From<url::ParseError> for ReminderError {
    fn from(error: url::ParseError) -> Self {
        ReminderError::InvalidRequest(format!("Invalid realm URL: {}", error))
    }
}
