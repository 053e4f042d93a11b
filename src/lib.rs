//! # cqrsgen: CQRS Scaffolding from a Class Definition
//!
//! cqrsgen reads a C# class definition, extracts the entity it describes, and emits the
//! request, response, DTO, validator and handler files a CQRS service layer needs for
//! that entity.
//!
//! ## Core Concepts
//!
//! ### Entities
//! An entity is a class name plus the `public <Type> <Name> { get; set; }` properties
//! found in the definition, in order. Properties whose name ends in `Id` are primary-key
//! candidates; the first one is the entity's key. Without any, the key is synthesized as
//! `<Entity>Id` of type `Guid`.
//!
//! ### Artifacts
//! Rendering is a pure function from a solution prefix and an entity to a fixed list of
//! artifacts. Each artifact knows its folder and file name relative to the service root
//! `<Solution>.Shared/Services/<Entity>/`.
//!
//! ### Rules
//! Field initializers, command membership and validator chains are derived from each
//! property through the lookup functions in [`rules`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ CLI (prompts, options, reporting)       │
//! ├─────────────────────────────────────────┤
//! │ Entity Parser (text → EntityDefinition) │
//! ├─────────────────────────────────────────┤
//! │ Renderer + Rule Tables (→ Artifacts)    │
//! ├─────────────────────────────────────────┤
//! │ Artifact Sinks (filesystem / memory)    │
//! ├─────────────────────────────────────────┤
//! │ Generation Log (JSONL)                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use cqrsgen::{EntityParser, render};
//!
//! let entity = EntityParser::parse(
//!     "public class Order { public Guid OrderId {get;set;} public string Status {get;set;} }",
//! )
//! .unwrap();
//! assert_eq!(entity.primary_key().name, "OrderId");
//!
//! let artifacts = render("Acme", &entity);
//! assert_eq!(artifacts[0].relative_path(), "Commands/CreateOrderCommand.cs");
//! assert!(artifacts[0].content.contains("public string Status { get; set; } = string.Empty;"));
//! ```

pub mod cli_utils;
pub mod commands;
mod config;
mod entity;
mod entity_parser;
mod errors;
mod generation_log;
pub mod render;
pub mod rules;
mod test_utils;
mod writer;

pub use config::{DEFAULT_SOLUTION_NAME, Overrides, ScaffoldConfig};
pub use entity::{
    EntityDefinition, EntityProperty, FALLBACK_KEY_TYPE, PRIMARY_KEY_SUFFIX, PrimaryKey,
};
pub use entity_parser::{EntityParser, ParseError};
pub use errors::GenerateError;
pub use generation_log::{
    GenerationLogEntry, GenerationLogger, GenerationOperation, LogMetadata, OperationStatus,
};
pub use render::{Artifact, Folder, render, service_root};
pub use writer::{
    ArtifactSink, FileSystemSink, MemorySink, WriteError, WriteReport, WrittenArtifact, write_all,
};
