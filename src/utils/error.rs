use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required fields")]
    MissingFields,

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Request,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FleetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FleetError::ConfigError { .. } | FleetError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            FleetError::MissingFields | FleetError::ValidationError { .. } => ErrorCategory::Request,
            FleetError::IoError(_) | FleetError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FleetError::MissingFields | FleetError::ValidationError { .. } => ErrorSeverity::Low,
            FleetError::ConfigError { .. } => ErrorSeverity::Medium,
            FleetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FleetError::IoError(_) | FleetError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FleetError::IoError(_) => {
                "Check that the file exists and the process can read it".to_string()
            }
            FleetError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            FleetError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
            FleetError::MissingFields => {
                "Provide name, lat, lng and location for the vehicle".to_string()
            }
            FleetError::ValidationError { .. } => "Correct the request payload".to_string(),
            FleetError::ServerError { .. } => {
                "Make sure the port is free and the host address is valid".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::IoError(e) => format!("Could not read a required file: {}", e),
            FleetError::ConfigError { message } => format!("Invalid configuration: {}", message),
            FleetError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            FleetError::MissingFields => "Missing required fields".to_string(),
            FleetError::ValidationError { message } => message.clone(),
            FleetError::ServerError { message } => format!("The server stopped: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_matches_api_contract() {
        let err = FleetError::MissingFields;
        assert_eq!(err.to_string(), "Missing required fields");
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_toml_syntax_errors_are_medium_severity() {
        let err = FleetError::ConfigError {
            message: "TOML parsing error: expected `]`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("expected"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = FleetError::InvalidConfigValueError {
            field: "server.port".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.severity() >= ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("server.port"));
    }
}
