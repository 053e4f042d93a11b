use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::entity::EntityDefinition;

/// Structured record of one step of a generation run.
///
/// Entries are appended to a JSONL file, one object per line, so a run can be
/// audited after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationLogEntry {
    /// Unique identifier for this log entry
    pub id: String,

    /// Timestamp when the operation occurred
    pub timestamp: DateTime<Utc>,

    /// The specific operation that was performed
    pub operation: GenerationOperation,

    /// Additional metadata about the operation context
    pub metadata: LogMetadata,
}

/// Every operation a run can record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GenerationOperation {
    EntityParsed {
        entity: EntityDefinition,
    },
    ParseFailed {
        error: String,
    },
    ArtifactWritten {
        path: PathBuf,
        bytes: usize,
    },
    ArtifactFailed {
        path: PathBuf,
        error: String,
    },
    RunCompleted {
        artifact_count: usize,
        dry_run: bool,
    },
}

/// Metadata about the operation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMetadata {
    /// Program that produced the entry (e.g. "cqrsgen")
    pub source: String,

    /// Solution prefix of the run
    pub solution_name: Option<String>,

    /// Time since the run started
    pub duration_ms: Option<u64>,

    /// Result status of the operation
    pub status: OperationStatus,
}

/// Status of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    Success,
    Failed,
    Partial,
}

impl GenerationLogEntry {
    /// Creates a new log entry with a generated ID and current timestamp
    pub fn new(operation: GenerationOperation, metadata: LogMetadata) -> Self {
        Self::with_timestamp(operation, metadata, Utc::now())
    }

    /// Creates a new log entry with a specific timestamp (useful for testing)
    pub fn with_timestamp(
        operation: GenerationOperation,
        metadata: LogMetadata,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("gen_{}", timestamp.timestamp_nanos_opt().unwrap_or_default()),
            timestamp,
            operation,
            metadata,
        }
    }

    /// Returns the operation type as a string for filtering
    pub fn operation_type(&self) -> &'static str {
        match &self.operation {
            GenerationOperation::EntityParsed { .. } => "EntityParsed",
            GenerationOperation::ParseFailed { .. } => "ParseFailed",
            GenerationOperation::ArtifactWritten { .. } => "ArtifactWritten",
            GenerationOperation::ArtifactFailed { .. } => "ArtifactFailed",
            GenerationOperation::RunCompleted { .. } => "RunCompleted",
        }
    }

    /// Returns true if the operation was successful
    pub fn is_success(&self) -> bool {
        matches!(self.metadata.status, OperationStatus::Success)
    }

    /// Returns the entity name if this operation carries the parsed entity
    pub fn entity_name(&self) -> Option<&str> {
        match &self.operation {
            GenerationOperation::EntityParsed { entity } => Some(entity.name()),
            _ => None,
        }
    }
}

impl LogMetadata {
    /// Creates metadata for an entry written by the named program
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            solution_name: None,
            duration_ms: None,
            status: OperationStatus::Success,
        }
    }

    /// Sets the operation status
    pub fn with_status(mut self, status: OperationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the elapsed time
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Sets the solution prefix
    pub fn with_solution(mut self, solution_name: &str) -> Self {
        self.solution_name = Some(solution_name.to_string());
        self
    }
}

/// Durable logger that appends generation entries to a JSONL file
pub struct GenerationLogger {
    log_file_path: PathBuf,
}

impl GenerationLogger {
    /// Creates a new logger writing to the specified file path
    pub fn new(log_file_path: PathBuf) -> Self {
        Self { log_file_path }
    }

    /// Appends a log entry to the JSONL file
    pub fn log(&self, entry: &GenerationLogEntry) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;

        let json_line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        writeln!(file, "{}", json_line)?;
        file.flush()?;
        Ok(())
    }

    /// Logs an entry and prints a warning if logging fails; never aborts the run
    pub fn log_or_warn(&self, entry: &GenerationLogEntry) {
        if let Err(e) = self.log(entry) {
            eprintln!("Warning: failed to write generation log entry: {}", e);
        }
    }

    /// Loads all log entries from the JSONL file
    pub fn load_entries(&self) -> Result<Vec<GenerationLogEntry>, std::io::Error> {
        if !self.log_file_path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.log_file_path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match serde_json::from_str::<GenerationLogEntry>(&line) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => {
                        eprintln!("Failed to parse log entry: {} - Line: {}", e, line);
                    }
                }
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{ORDER_DEFINITION, TempDir};
    use crate::EntityParser;

    #[test]
    fn entries_round_trip_through_the_file() {
        let temp = TempDir::new("generation_log");
        let logger = GenerationLogger::new(temp.path().join("cqrsgen.jsonl"));
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();

        logger
            .log(&GenerationLogEntry::new(
                GenerationOperation::EntityParsed {
                    entity: entity.clone(),
                },
                LogMetadata::new("cqrsgen").with_solution("Acme"),
            ))
            .unwrap();
        logger
            .log(&GenerationLogEntry::new(
                GenerationOperation::ArtifactFailed {
                    path: PathBuf::from("Acme.Shared/Services/Order/DTOs/OrderDTO.cs"),
                    error: "denied".to_string(),
                },
                LogMetadata::new("cqrsgen").with_status(OperationStatus::Failed),
            ))
            .unwrap();

        let entries = logger.load_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation_type(), "EntityParsed");
        assert_eq!(entries[0].entity_name(), Some("Order"));
        assert_eq!(entries[0].metadata.solution_name.as_deref(), Some("Acme"));
        assert!(entries[0].is_success());
        match &entries[0].operation {
            GenerationOperation::EntityParsed { entity: loaded } => assert_eq!(loaded, &entity),
            other => panic!("unexpected operation {:?}", other),
        }
        assert_eq!(entries[1].operation_type(), "ArtifactFailed");
        assert!(!entries[1].is_success());
    }

    #[test]
    fn missing_log_file_loads_empty() {
        let temp = TempDir::new("generation_log_missing");
        let logger = GenerationLogger::new(temp.path().join("absent.jsonl"));
        assert!(logger.load_entries().unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let temp = TempDir::new("generation_log_malformed");
        let path = temp.path().join("cqrsgen.jsonl");
        std::fs::write(&path, "not json\n\n").unwrap();
        let logger = GenerationLogger::new(path);
        logger
            .log(&GenerationLogEntry::new(
                GenerationOperation::RunCompleted {
                    artifact_count: 14,
                    dry_run: false,
                },
                LogMetadata::new("cqrsgen").with_duration(3),
            ))
            .unwrap();

        let entries = logger.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].metadata.duration_ms, Some(3));
    }
}
