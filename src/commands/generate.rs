//! # Generate Command
//!
//! Drives one scaffolding run: collect the answers, parse the class definition, render
//! the artifacts and hand them to a sink. Parse failures abort before anything is
//! written; write failures stop the run where they happen.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::commands::prompt::Prompter;
use crate::generation_log::{
    GenerationLogEntry, GenerationLogger, GenerationOperation, LogMetadata, OperationStatus,
};
use crate::writer::{ArtifactSink, FileSystemSink, MemorySink, WrittenArtifact, write_all};
use crate::{
    EntityDefinition, EntityParser, GenerateError, Overrides, ScaffoldConfig, render,
    service_root,
};

const SOURCE: &str = "cqrsgen";

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub entity: EntityDefinition,
    pub config: ScaffoldConfig,
    /// Directory the artifacts were placed in.
    pub root: PathBuf,
    pub written: Vec<WrittenArtifact>,
}

/// Runs the full generate flow, asking for anything `overrides` leaves blank.
pub fn run<R: BufRead, W: Write>(
    overrides: &Overrides,
    prompter: &mut Prompter<R, W>,
) -> Result<RunSummary, GenerateError> {
    let solution_answer = if overrides.solution_name.trim().is_empty() {
        prompter
            .ask("Enter solution name (e.g., SCT): ")
            .map_err(GenerateError::Terminal)?
            .unwrap_or_default()
    } else {
        overrides.solution_name.clone()
    };

    let definition = if overrides.input.trim().is_empty() {
        prompter
            .say(
                "\nEnter your entity class definition (type 'END' on a new line when finished):\n",
            )
            .map_err(GenerateError::Terminal)?;
        prompter.read_definition().map_err(GenerateError::Terminal)?
    } else {
        std::fs::read_to_string(overrides.input.trim()).map_err(GenerateError::Input)?
    };

    let output_answer = if overrides.output_path.trim().is_empty() {
        prompter
            .ask("\nEnter output path: ")
            .map_err(GenerateError::Terminal)?
            .unwrap_or_default()
    } else {
        overrides.output_path.clone()
    };

    let config = ScaffoldConfig::resolve(&solution_answer, &output_answer, overrides)
        .map_err(GenerateError::OutputPath)?;
    generate(&definition, config)
}

/// Parses `definition` and writes its artifacts as `config` describes.
pub fn generate(definition: &str, config: ScaffoldConfig) -> Result<RunSummary, GenerateError> {
    let mut sink: Box<dyn ArtifactSink> = if config.dry_run {
        Box::new(MemorySink::new())
    } else {
        Box::new(FileSystemSink::new())
    };
    generate_into(definition, config, sink.as_mut())
}

/// Parses `definition` and hands its artifacts to `sink`.
pub fn generate_into(
    definition: &str,
    config: ScaffoldConfig,
    sink: &mut dyn ArtifactSink,
) -> Result<RunSummary, GenerateError> {
    let started = Instant::now();
    let logger = config.log_path.clone().map(GenerationLogger::new);
    let record = |operation: GenerationOperation, status: OperationStatus| {
        if let Some(logger) = &logger {
            let metadata = LogMetadata::new(SOURCE)
                .with_solution(&config.solution_name)
                .with_duration(started.elapsed().as_millis() as u64)
                .with_status(status);
            logger.log_or_warn(&GenerationLogEntry::new(operation, metadata));
        }
    };

    let entity = match EntityParser::parse(definition) {
        Ok(entity) => entity,
        Err(e) => {
            record(
                GenerationOperation::ParseFailed {
                    error: e.to_string(),
                },
                OperationStatus::Failed,
            );
            return Err(e.into());
        }
    };
    record(
        GenerationOperation::EntityParsed {
            entity: entity.clone(),
        },
        OperationStatus::Success,
    );

    let artifacts = render(&config.solution_name, &entity);
    let root = config
        .output_path
        .join(service_root(&config.solution_name, &entity));
    let report = write_all(sink, &root, &artifacts);

    for written in &report.written {
        record(
            GenerationOperation::ArtifactWritten {
                path: written.path.clone(),
                bytes: written.bytes,
            },
            OperationStatus::Success,
        );
    }
    if let Some(failure) = &report.failure {
        record(
            GenerationOperation::ArtifactFailed {
                path: failure.path.clone(),
                error: failure.source.to_string(),
            },
            OperationStatus::Failed,
        );
    }
    let status = match (&report.failure, report.written.is_empty()) {
        (None, _) => OperationStatus::Success,
        (Some(_), true) => OperationStatus::Failed,
        (Some(_), false) => OperationStatus::Partial,
    };
    record(
        GenerationOperation::RunCompleted {
            artifact_count: report.written.len(),
            dry_run: config.dry_run,
        },
        status,
    );

    let written = report.into_result()?;
    Ok(RunSummary {
        entity,
        config,
        root,
        written,
    })
}
