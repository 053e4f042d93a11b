//! # Interactive Prompts
//!
//! Line-based questions asked at the terminal. Generic over the reader and writer so
//! the generate flow can be driven from tests.

use std::io::{BufRead, Write};

/// Line that ends a multi-line class definition.
pub const END_MARKER: &str = "END";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints text as-is.
    pub fn say(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Prints `prompt` and reads one line. Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Reads lines until one is exactly `END` or input runs out. The marker is not
    /// part of the result; every kept line is newline-terminated.
    pub fn read_definition(&mut self) -> std::io::Result<String> {
        let mut definition = String::new();
        while let Some(line) = self.read_line()? {
            if line == END_MARKER {
                break;
            }
            definition.push_str(&line);
            definition.push('\n');
        }
        Ok(definition)
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
