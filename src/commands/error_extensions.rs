//! # Error Extensions for Handled
//!
//! This module extends the parser, writer and standard library error types
//! to implement Handle<UserError> for consistent error property extraction.

use super::errors::UserError;
use crate::{ParseError, WriteError};
use handled::Handle;

/// Implement Handle<UserError> for ParseError
impl Handle<UserError> for ParseError {
    fn handle(&self) -> Option<UserError> {
        match self {
            ParseError::NoClassName => Some(UserError {
                message: self.to_string(),
                usage_hint: Some(
                    "The definition must contain a declaration such as 'public class Order'"
                        .to_string(),
                ),
            }),
        }
    }
}

/// Implement Handle<UserError> for WriteError
impl Handle<UserError> for WriteError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = self.source.handle().and_then(|e| e.usage_hint);
        Some(UserError {
            message: format!(
                "Generation failed while writing {}: {}",
                self.path.display(),
                self.source
            ),
            usage_hint,
        })
    }
}

/// Implement Handle<UserError> for std::io::Error
impl Handle<UserError> for std::io::Error {
    fn handle(&self) -> Option<UserError> {
        let hint = match self.kind() {
            std::io::ErrorKind::NotFound => {
                Some("The specified file was not found. Check the file path.".to_string())
            }
            std::io::ErrorKind::PermissionDenied => {
                Some("Permission denied. Check file permissions.".to_string())
            }
            std::io::ErrorKind::InvalidData => Some("The file contains invalid data.".to_string()),
            _ => None,
        };

        Some(UserError {
            message: format!("File operation error: {}", self),
            usage_hint: hint,
        })
    }
}
