use std::sync::LazyLock;

use regex::Regex;

use crate::entity::{EntityDefinition, EntityProperty};

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"public\s+class\s+(\w+)").unwrap());

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"public\s+(\S+)\s+(\S+)\s*\{\s*get;\s*set;\s*\}").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoClassName,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoClassName => write!(f, "no class name found"),
        }
    }
}

impl std::error::Error for ParseError {}

pub struct EntityParser;

impl EntityParser {
    /// Extracts an entity from free-form class-definition text.
    ///
    /// The first `public class <Name>` wins. Every `public <Type> <Name> { get; set; }`
    /// anywhere in the text becomes a property, in order of appearance.
    pub fn parse(content: &str) -> Result<EntityDefinition, ParseError> {
        let name = Self::parse_class_name(content)?;
        let properties = Self::parse_properties(content);
        Ok(EntityDefinition::new(name, properties))
    }

    fn parse_class_name(content: &str) -> Result<String, ParseError> {
        CLASS_NAME
            .captures(content)
            .map(|caps| caps[1].to_string())
            .ok_or(ParseError::NoClassName)
    }

    fn parse_properties(content: &str) -> Vec<EntityProperty> {
        PROPERTY
            .captures_iter(content)
            .map(|caps| EntityProperty::new(&caps[2], &caps[1]))
            .collect()
    }
}
