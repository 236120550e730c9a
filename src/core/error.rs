//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required configuration argument is missing or unusable
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument { parameter: String, message: String },

    /// A value of a supported type is in a state its canonical form cannot represent
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        LoggerError::InvalidData {
            message: message.into(),
        }
    }

    pub fn is_invalid_data(&self) -> bool {
        matches!(self, LoggerError::InvalidData { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LoggerError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_argument("provider", "no zones");
        assert!(err.is_invalid_argument());
        assert!(!err.is_invalid_data());

        let err = LoggerError::invalid_data("bad calendar");
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_argument("provider", "zone provider exposes no time zones");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'provider': zone provider exposes no time zones"
        );

        let err = LoggerError::invalid_data("Values of type LocalDate must (currently) use the ISO calendar");
        assert_eq!(
            err.to_string(),
            "Invalid data: Values of type LocalDate must (currently) use the ISO calendar"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
