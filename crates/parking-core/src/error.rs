//! Unified error handling for parking fee comparison
//!
//! Two kinds carry domain meaning: `InvalidInput` for rejected sessions and
//! `Configuration` for schedules the fee algorithms cannot work with. The
//! remaining variants only surface from the CLI layer.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    // ==================== Domain Errors ====================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // ==================== Surface Errors ====================
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ParkingError {
    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ParkingError::InvalidInput(_) => "invalid_input",
            ParkingError::Configuration(_) => "configuration_error",
            ParkingError::Io(_) => "io_error",
            ParkingError::Serialization(_) => "serialization_error",
        }
    }

    /// Whether the caller may skip the offending record and keep going.
    ///
    /// A bad input line is recoverable; a broken schedule is a setup defect
    /// and must halt processing.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParkingError::InvalidInput(_))
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for ParkingError {
    fn from(err: config::ConfigError) -> Self {
        ParkingError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for ParkingError {
    fn from(err: serde_json::Error) -> Self {
        ParkingError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ParkingError {
    fn from(err: std::io::Error) -> Self {
        ParkingError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ParkingError::InvalidInput("x".to_string()).error_code(),
            "invalid_input"
        );
        assert_eq!(
            ParkingError::Configuration("x".to_string()).error_code(),
            "configuration_error"
        );
    }

    #[test]
    fn test_only_invalid_input_is_recoverable() {
        assert!(ParkingError::InvalidInput("bad line".to_string()).is_recoverable());
        assert!(!ParkingError::Configuration("no tiers".to_string()).is_recoverable());
        assert!(!ParkingError::Io("closed".to_string()).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = ParkingError::InvalidInput("exit must be after entry".to_string());
        assert_eq!(err.to_string(), "Invalid input: exit must be after entry");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: ParkingError = io.into();
        assert_eq!(err.error_code(), "io_error");
    }
}
