//! The validation engine.

use crate::model::{Field, FormRecord};

use super::builder::EngineBuilder;
use super::error_map::ErrorMap;

/// Type alias for rule predicates over a field's text value.
pub(crate) type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single check and the message reported when it fails.
pub(crate) struct Rule {
    pub(crate) check: Predicate,
    pub(crate) message: String,
}

/// Ordered rules for one field. The first failing rule wins.
pub(crate) struct FieldRules {
    pub(crate) field: Field,
    pub(crate) rules: Vec<Rule>,
}

impl FieldRules {
    fn first_failure(&self, record: &FormRecord) -> Option<&str> {
        let value = record.value(self.field);
        self.rules
            .iter()
            .find(|rule| !(rule.check)(value))
            .map(|rule| rule.message.as_str())
    }
}

/// Declarative rule table mapping each field to its checks.
///
/// Validation is pure: it reads the record, never modifies it, and returns the
/// same map for the same input.
pub struct ValidationEngine {
    fields: Vec<FieldRules>,
}

impl ValidationEngine {
    /// Start building a rule table.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_rules(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Validate every field of `record`.
    ///
    /// No field short-circuits another: all of them are checked on each call.
    pub fn validate(&self, record: &FormRecord) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for entry in &self.fields {
            if errors.contains(entry.field) {
                continue;
            }
            if let Some(message) = entry.first_failure(record) {
                errors.insert(entry.field, message);
            }
        }
        log::debug!("Validated record: {} invalid field(s)", errors.len());
        errors
    }

    /// Validate a single field, returning its message if it is invalid.
    pub fn validate_field(&self, record: &FormRecord, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .filter(|entry| entry.field == field)
            .find_map(|entry| entry.first_failure(record))
    }

    /// Fields this engine has rules for, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::registration()
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("fields", &self.fields().collect::<Vec<_>>())
            .finish()
    }
}
