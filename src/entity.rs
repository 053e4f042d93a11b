//! Entity model produced by the parser and consumed by the renderer.

use serde::{Deserialize, Serialize};

/// Suffix that marks a property as a primary-key candidate.
pub const PRIMARY_KEY_SUFFIX: &str = "Id";

/// Type used for the synthesized primary key when no property qualifies.
pub const FALLBACK_KEY_TYPE: &str = "Guid";

/// A single `public <Type> <Name> { get; set; }` declaration.
///
/// The primary-key flag is derived from the name at construction time and cannot be
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PropertyRecord")]
pub struct EntityProperty {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    is_primary_key: bool,
}

impl EntityProperty {
    /// Creates a property, flagging it as a primary key when the name ends in `Id`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let name = name.into();
        let is_primary_key = name.ends_with(PRIMARY_KEY_SUFFIX);
        Self {
            name,
            ty: ty.into(),
            is_primary_key,
        }
    }

    /// The property name exactly as written in the source text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type token exactly as written in the source text.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }
}

/// Serialized shape of a property; the key flag is re-derived on load.
#[derive(Deserialize)]
struct PropertyRecord {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

impl From<PropertyRecord> for EntityProperty {
    fn from(record: PropertyRecord) -> Self {
        Self::new(record.name, record.ty)
    }
}

/// The entity being scaffolded: a name plus its properties in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    name: String,
    properties: Vec<EntityProperty>,
}

impl EntityDefinition {
    pub fn new(name: impl Into<String>, properties: Vec<EntityProperty>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[EntityProperty] {
        &self.properties
    }

    /// Properties that are not flagged as a primary key.
    pub fn non_key_properties(&self) -> impl Iterator<Item = &EntityProperty> {
        self.properties.iter().filter(|p| !p.is_primary_key())
    }

    /// Resolves the entity's primary key.
    ///
    /// The first flagged property wins. Without one, the key is synthesized as
    /// `<EntityName>Id` of type `Guid`.
    pub fn primary_key(&self) -> PrimaryKey {
        match self.properties.iter().find(|p| p.is_primary_key()) {
            Some(property) => PrimaryKey {
                name: property.name().to_string(),
                ty: property.ty().to_string(),
            },
            None => PrimaryKey {
                name: format!("{}{}", self.name, PRIMARY_KEY_SUFFIX),
                ty: FALLBACK_KEY_TYPE.to_string(),
            },
        }
    }
}

/// The key used wherever generated code needs "the" identifier of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub name: String,
    pub ty: String,
}
