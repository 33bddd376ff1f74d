use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Field;

/// Validation messages keyed by field.
///
/// A field without an entry is valid. Keys are [`Field`] values, so every key
/// is a field of the record, and iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it is currently invalid.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Check if the record this map was computed from passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Invalid fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// First invalid field in form order, for moving focus to it.
    pub fn first(&self) -> Option<(Field, &str)> {
        self.iter().next()
    }
}
