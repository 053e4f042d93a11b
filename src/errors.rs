//! Error types for cqrsgen runs.

use crate::entity_parser::ParseError;
use crate::writer::WriteError;

/// Errors that can end a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// The `--input` file could not be read.
    Input(std::io::Error),
    /// A prompt could not be shown or its answer could not be read.
    Terminal(std::io::Error),
    /// The output path was left blank and the working directory is unavailable.
    OutputPath(std::io::Error),
    /// The class definition has no recognizable class declaration.
    Parse(ParseError),
    /// A directory or file could not be created.
    Write(WriteError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Failed to read input: {}", e),
            Self::Terminal(e) => write!(f, "Terminal I/O failed: {}", e),
            Self::OutputPath(e) => write!(f, "Failed to resolve output path: {}", e),
            Self::Parse(e) => write!(f, "{}", e),
            Self::Write(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) | Self::Terminal(e) | Self::OutputPath(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}

impl From<ParseError> for GenerateError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<WriteError> for GenerateError {
    fn from(e: WriteError) -> Self {
        Self::Write(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn parse_errors_display_verbatim() {
        let err = GenerateError::from(ParseError::NoClassName);
        assert_eq!(err.to_string(), "no class name found");
        assert!(err.source().is_some());
    }

    #[test]
    fn write_errors_keep_their_path() {
        let err = GenerateError::from(WriteError {
            path: "out/Commands".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.to_string(), "Failed to write out/Commands: denied");
    }

    #[test]
    fn io_errors_name_what_was_being_done() {
        let cwd = GenerateError::OutputPath(std::io::Error::other("gone"));
        assert_eq!(cwd.to_string(), "Failed to resolve output path: gone");
        let prompt = GenerateError::Terminal(std::io::Error::other("closed"));
        assert_eq!(prompt.to_string(), "Terminal I/O failed: closed");
        let input = GenerateError::Input(std::io::Error::other("missing"));
        assert_eq!(input.to_string(), "Failed to read input: missing");
    }
}
