//! Builder for the fluent rule table API.

use crate::model::Field;

use super::engine::{FieldRules, Rule, ValidationEngine};

/// Builder collecting per-field rules into a [`ValidationEngine`].
pub struct EngineBuilder {
    fields: Vec<FieldRules>,
}

impl EngineBuilder {
    pub(crate) fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Start declaring rules for a field.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            field,
            rules: Vec::new(),
        }
    }

    pub fn build(self) -> ValidationEngine {
        ValidationEngine::from_rules(self.fields)
    }
}

/// Builder for adding rules to a single field.
///
/// Rules run in the order they are added and the first failure is reported.
pub struct FieldBuilder {
    builder: EngineBuilder,
    field: Field,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom rule. `f` returns true when the value is acceptable.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            check: Box::new(f),
            message: msg.into(),
        });
        self
    }

    /// Require the field to be non-empty.
    ///
    /// Whitespace counts as content; only the empty string fails.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require the value to be one of `options`.
    pub fn one_of(self, options: &'static [&'static str], msg: impl Into<String>) -> Self {
        self.rule(move |v| options.iter().any(|option| *option == v), msg)
    }

    /// Continue to the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.finalize().field(field)
    }

    /// Finalize and build the engine.
    pub fn build(self) -> ValidationEngine {
        self.finalize().build()
    }

    fn finalize(self) -> EngineBuilder {
        let mut builder = self.builder;
        builder.fields.push(FieldRules {
            field: self.field,
            rules: self.rules,
        });
        builder
    }
}
