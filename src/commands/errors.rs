//! # Command Error Handling
//!
//! This module provides error handling utilities for the cqrsgen CLI
//! using the handled crate for consistent error property extraction.

use handled::Handle;

use crate::GenerateError;
use crate::cli_utils;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Handle<UserError> for GenerateError {
    fn handle(&self) -> Option<UserError> {
        match self {
            GenerateError::Input(e) | GenerateError::Terminal(e) | GenerateError::OutputPath(e) => {
                e.handle().map(|user_error| UserError {
                    message: self.to_string(),
                    ..user_error
                })
            }
            GenerateError::Parse(e) => e.handle(),
            GenerateError::Write(e) => e.handle(),
        }
    }
}

/// Prints an error in its user-facing form without exiting.
///
/// Falls back to the error's Display output when it carries no user-facing form.
pub fn report_error<E>(error: &E)
where
    E: Handle<UserError> + std::fmt::Display,
{
    match error.handle() {
        Some(user_error) => {
            cli_utils::print_error(&user_error.message, user_error.usage_hint.as_deref())
        }
        None => cli_utils::print_error(&error.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    #[test]
    fn parse_failures_keep_their_message() {
        let user_error = GenerateError::Parse(ParseError::NoClassName)
            .handle()
            .unwrap();
        assert_eq!(user_error.message, "no class name found");
        assert!(user_error.usage_hint.is_some());
    }

    #[test]
    fn input_failures_name_the_input() {
        let err = GenerateError::Input(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let user_error = err.handle().unwrap();
        assert_eq!(user_error.message, "Failed to read input: missing");
        assert_eq!(
            user_error.usage_hint.as_deref(),
            Some("The specified file was not found. Check the file path.")
        );
    }

    #[test]
    fn output_path_failures_are_not_reported_as_input() {
        let err = GenerateError::OutputPath(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let user_error = err.handle().unwrap();
        assert_eq!(user_error.message, "Failed to resolve output path: denied");
        assert_eq!(
            user_error.usage_hint.as_deref(),
            Some("Permission denied. Check file permissions.")
        );
    }
}
