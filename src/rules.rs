//! # Per-property rule tables
//!
//! Every per-property decision the renderer makes lives here as a pure function so the
//! rule set can be audited and tested without rendering any text:
//!
//! - [`default_value`] maps a type token to the initializer literal of a generated field.
//! - [`is_command_field`] decides whether a property belongs in the create/update commands.
//! - [`validation_rules`] derives the validator chain for a property.

use crate::entity::EntityProperty;

/// Audit timestamp properties that never appear in create/update commands.
pub const AUDIT_FIELDS: [&str; 2] = ["CreatedDate", "UpdatedDate"];

/// Longest value accepted for string properties whose name contains `Name`.
pub const MAX_NAME_LENGTH: usize = 100;

/// Error message attached to the `Status` rule.
pub const STATUS_MESSAGE: &str = "Status must be either Active or Inactive";

/// Lower-cased type token to initializer literal.
const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("string", "string.Empty"),
    ("int", "0"),
    ("long", "0L"),
    ("decimal", "0m"),
    ("double", "0d"),
    ("float", "0f"),
    ("datetime", "DateTime.MinValue"),
    ("guid", "Guid.Empty"),
    ("bool", "false"),
];

/// Initializer for any type token missing from the table.
const FALLBACK_DEFAULT: &str = "default";

/// Returns the initializer literal for a field of the given type, case-insensitively.
pub fn default_value(ty: &str) -> &'static str {
    let ty = ty.to_lowercase();
    DEFAULT_VALUES
        .iter()
        .find(|(token, _)| *token == ty)
        .map(|(_, value)| *value)
        .unwrap_or(FALLBACK_DEFAULT)
}

/// True if the property is carried by the create and update commands.
pub fn is_command_field(property: &EntityProperty) -> bool {
    !property.is_primary_key() && !AUDIT_FIELDS.contains(&property.name())
}

/// A single link in a generated `RuleFor(..)` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    NotEmpty,
    EmailAddress,
    MaximumLength(usize),
    /// Value must be exactly `"Active"` or `"Inactive"`.
    ActiveOrInactive,
    /// Date must not be earlier than the day the validator runs.
    TodayOrLater,
}

impl ValidationRule {
    /// Renders the rule as chained validator calls, without leading indentation or
    /// a terminating semicolon.
    pub fn render(&self) -> Vec<String> {
        match self {
            ValidationRule::NotEmpty => vec![".NotEmpty()".to_string()],
            ValidationRule::EmailAddress => vec![".EmailAddress()".to_string()],
            ValidationRule::MaximumLength(max) => vec![format!(".MaximumLength({})", max)],
            ValidationRule::ActiveOrInactive => vec![
                r#".Must(status => status is "Active" or "Inactive")"#.to_string(),
                format!(r#".WithMessage("{}")"#, STATUS_MESSAGE),
            ],
            ValidationRule::TodayOrLater => {
                vec![".Must(date => date >= DateTime.Today)".to_string()]
            }
        }
    }
}

/// Derives the validator chain for a non-key property.
///
/// Dispatch is on the lower-cased type token; name checks are literal, case-sensitive
/// substring tests and each one adds its rule independently.
pub fn validation_rules(property: &EntityProperty) -> Vec<ValidationRule> {
    let name = property.name();
    let mut rules = vec![ValidationRule::NotEmpty];
    match property.ty().to_lowercase().as_str() {
        "string" => {
            if name.contains("Email") {
                rules.push(ValidationRule::EmailAddress);
            }
            if name.contains("Name") {
                rules.push(ValidationRule::MaximumLength(MAX_NAME_LENGTH));
            }
            if name.contains("Status") {
                rules.push(ValidationRule::ActiveOrInactive);
            }
        }
        "datetime" => {
            if name.contains("Date") && !name.contains("Created") && !name.contains("Updated") {
                rules.push(ValidationRule::TodayOrLater);
            }
        }
        _ => {}
    }
    rules
}
