//! # Command Handlers
//!
//! This module contains the pieces of the cqrsgen CLI.
//!
//! ## Structure
//!
//! - `generate` - The scaffolding run (prompts, parse, render, write, log)
//! - `prompt` - Line-based terminal questions
//! - `errors` - User-facing error extraction and reporting
//! - `error_extensions` - Handle<UserError> for parser, writer and I/O errors

pub mod error_extensions;
pub mod errors;
pub mod generate;
pub mod prompt;

pub use errors::{UserError, report_error};
pub use generate::{RunSummary, generate, generate_into, run};
pub use prompt::Prompter;
