//! Run configuration for cqrsgen.
//!
//! A run is configured by command-line options and interactive answers only. Options
//! that are left blank are asked for at the terminal; answers that are left blank fall
//! back to the defaults below.

use std::path::PathBuf;

/// Solution prefix used when the user leaves the prompt blank.
pub const DEFAULT_SOLUTION_NAME: &str = "SCT";

/// Values supplied up front on the command line. Blank strings mean "ask".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Solution prefix; skips the solution-name prompt.
    pub solution_name: String,
    /// File holding the class definition; skips the definition prompt.
    pub input: String,
    /// Base directory for the output; skips the output-path prompt.
    pub output_path: String,
    /// JSONL file to append the generation log to; no log when blank.
    pub log: String,
    /// Render and list paths without writing.
    pub dry_run: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub solution_name: String,
    pub output_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl ScaffoldConfig {
    /// Resolves the answers for solution name and output path, applying defaults to
    /// blank answers.
    ///
    /// # Arguments
    /// * `solution_answer` - Solution prefix as typed or passed on the command line
    /// * `output_answer` - Output base path as typed or passed on the command line
    /// * `overrides` - The remaining command-line settings
    ///
    /// # Returns
    /// * `Err(io::Error)` - If the output path is blank and the working directory is unavailable
    pub fn resolve(
        solution_answer: &str,
        output_answer: &str,
        overrides: &Overrides,
    ) -> Result<Self, std::io::Error> {
        let solution_name = match solution_answer.trim() {
            "" => DEFAULT_SOLUTION_NAME.to_string(),
            name => name.to_string(),
        };
        let output_path = match output_answer.trim() {
            "" => std::env::current_dir()?,
            path => PathBuf::from(path),
        };
        let log_path = match overrides.log.trim() {
            "" => None,
            path => Some(PathBuf::from(path)),
        };
        Ok(Self {
            solution_name,
            output_path,
            log_path,
            dry_run: overrides.dry_run,
        })
    }
}
