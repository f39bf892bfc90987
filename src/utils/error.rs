use crate::domain::model::HallId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("{message}")]
    RuleViolation { message: String },

    #[error("Cinema hall {hall_id} was not found.")]
    NotFound { hall_id: HallId },

    #[error("{message}")]
    OperationFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

impl SeatingError {
    pub fn rule(message: impl Into<String>) -> Self {
        SeatingError::RuleViolation {
            message: message.into(),
        }
    }

    pub fn is_rule_violation(&self) -> bool {
        matches!(self, SeatingError::RuleViolation { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SeatingError::RuleViolation { .. } | SeatingError::NotFound { .. } => {
                ErrorCategory::Domain
            }
            SeatingError::ConfigError { .. } | SeatingError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SeatingError::OperationFailed { .. }
            | SeatingError::IoError(_)
            | SeatingError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Domain => format!("Reservation rejected: {}", self),
            ErrorCategory::Configuration => format!("Invalid scenario configuration: {}", self),
            ErrorCategory::System => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;
