//! # Template Renderer
//!
//! Turns an [`EntityDefinition`] into the full family of C# artifacts for one entity.
//! Rendering is a pure function of the solution prefix and the entity: it never fails
//! and always yields the same artifacts, in the same order, with the same bytes.
//!
//! ## Layout
//!
//! Every artifact lives in one of five folders under the service root
//! `<Solution>.Shared/Services/<Entity>/`:
//!
//! ```text
//! Commands/    Create, Update and Delete commands with their responses
//! Queries/     GetById and GetAll queries
//! DTOs/        the entity DTO
//! Validators/  FluentValidation validators
//! Handlers/    MediatR handler stubs
//! ```
//!
//! Per-property decisions (defaults, command membership, validation rules) come from
//! [`crate::rules`]; the submodules only assemble text.

mod commands;
mod dto;
mod handlers;
mod queries;
mod validators;

use std::path::PathBuf;

use crate::entity::{EntityDefinition, PrimaryKey};
use crate::rules;

/// File extension of every generated artifact.
pub const ARTIFACT_EXTENSION: &str = "cs";

/// Folder an artifact is placed in, relative to the service root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Commands,
    Queries,
    Dtos,
    Validators,
    Handlers,
}

impl Folder {
    pub const ALL: [Folder; 5] = [
        Folder::Commands,
        Folder::Queries,
        Folder::Dtos,
        Folder::Validators,
        Folder::Handlers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Commands => "Commands",
            Folder::Queries => "Queries",
            Folder::Dtos => "DTOs",
            Folder::Validators => "Validators",
            Folder::Handlers => "Handlers",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub folder: Folder,
    /// File name including the extension, e.g. `CreateOrderCommand.cs`.
    pub file_name: String,
    pub content: String,
}

impl Artifact {
    fn new(folder: Folder, type_name: String, content: String) -> Self {
        Self {
            folder,
            file_name: format!("{}.{}", type_name, ARTIFACT_EXTENSION),
            content,
        }
    }

    /// Path relative to the service root, always `/`-separated.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.folder, self.file_name)
    }
}

/// Directory that holds every artifact of the entity, relative to the output base path.
pub fn service_root(solution: &str, entity: &EntityDefinition) -> PathBuf {
    PathBuf::from(format!("{}.Shared", solution))
        .join("Services")
        .join(entity.name())
}

/// Renders every artifact for the entity.
pub fn render(solution: &str, entity: &EntityDefinition) -> Vec<Artifact> {
    let ctx = RenderContext::new(solution, entity);
    vec![
        commands::create(&ctx),
        commands::update(&ctx),
        commands::delete(&ctx),
        queries::get_by_id(&ctx),
        queries::get_all(&ctx),
        dto::dto(&ctx),
        validators::create(&ctx),
        validators::update(&ctx),
        validators::get_by_id(&ctx),
        handlers::create(&ctx),
        handlers::update(&ctx),
        handlers::delete(&ctx),
        handlers::get_by_id(&ctx),
        handlers::get_all(&ctx),
    ]
}

/// Names shared by every template for a single render.
struct RenderContext<'a> {
    solution: &'a str,
    entity: &'a EntityDefinition,
    key: PrimaryKey,
}

impl<'a> RenderContext<'a> {
    fn new(solution: &'a str, entity: &'a EntityDefinition) -> Self {
        Self {
            solution,
            entity,
            key: entity.primary_key(),
        }
    }

    fn name(&self) -> &str {
        self.entity.name()
    }

    fn namespace(&self, folder: Folder) -> String {
        format!(
            "{}.Shared.Services.{}.{}",
            self.solution,
            self.entity.name(),
            folder
        )
    }

    fn using(&self, folder: Folder) -> String {
        format!("using {};\n", self.namespace(folder))
    }

    fn namespace_line(&self, folder: Folder) -> String {
        format!("namespace {};\n", self.namespace(folder))
    }

    fn dto_type(&self) -> String {
        format!("{}DTO", self.entity.name())
    }

    /// `public <Type> <Key> { get; set; }` without an initializer.
    fn key_field(&self) -> String {
        format!("    public {} {} {{ get; set; }}\n", self.key.ty, self.key.name)
    }
}

/// `public <Type> <Name> { get; set; } = <default>;`
fn initialized_field(ty: &str, name: &str) -> String {
    format!(
        "    public {} {} {{ get; set; }} = {};\n",
        ty,
        name,
        rules::default_value(ty)
    )
}

/// The `Success`/`Message` pair every command response carries.
fn outcome_fields() -> &'static str {
    "    public bool Success { get; set; }\n    public string Message { get; set; } = string.Empty;\n"
}
