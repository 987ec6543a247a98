//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the address book itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A record with the same name is already stored
    #[error("Record with name '{0}' already exists.")]
    DuplicateKey(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the command layer.
///
/// The `Display` text of each variant is the reply shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No record exists under the requested name
    #[error("Contact not found.")]
    NotFound,

    /// The command was given too few arguments; carries the usage hint
    #[error("{0}")]
    MissingArguments(&'static str),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The address book rejected the change
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::DuplicateKey("John".to_string());
        assert_eq!(err.to_string(), "Record with name 'John' already exists.");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_TODAY".to_string(),
            reason: "Must be a DD.MM.YYYY date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ASSISTANT_TODAY: Must be a DD.MM.YYYY date"
        );

        let err = CommandError::NotFound;
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_command_error_is_transparent() {
        let err: CommandError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone must contain exactly 10 digits.");

        let err: CommandError = BookError::DuplicateKey("Ann".to_string()).into();
        assert_eq!(err.to_string(), "Record with name 'Ann' already exists.");

        let err = CommandError::MissingArguments("Enter user name.");
        assert_eq!(err.to_string(), "Enter user name.");
    }
}
