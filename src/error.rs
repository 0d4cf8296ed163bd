//! Error types for the employee directory.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the directory and its services can report.

use thiserror::Error;

/// The main error type for the employee directory.
///
/// Every fallible operation in the crate returns this error type. None of
/// the variants are fatal: callers either propagate them with `?` or turn
/// them into a display string.
///
/// # Example
///
/// ```
/// use employee_directory::error::DirectoryError;
///
/// let error = DirectoryError::EmployeeNotFound {
///     id: "E999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found with ID: E999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No employee is stored under the requested identifier.
    #[error("Employee not found with ID: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A field value failed validation.
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        /// The name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An employee record breaks a directory invariant and cannot be stored.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A notification could not be delivered.
    #[error("Failed to notify '{recipient}': {message}")]
    NotificationFailed {
        /// The address the notification was meant for.
        recipient: String,
        /// A description of the delivery failure.
        message: String,
    },
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
