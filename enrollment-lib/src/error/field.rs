//! FieldError for the string-keyed input boundary

/// Error type for resolving field names coming from the presentation layer.
///
/// Field names are fixed at compile time, so this only fires when a caller
/// passes a name the form does not have. It is a programming error, not a
/// user input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist on the registration form.
    #[error("Field '{field}' is not part of the registration form")]
    Unknown { field: String },
}

impl FieldError {
    /// Creates a new unknown field error.
    pub fn unknown(field: impl Into<String>) -> Self {
        Self::Unknown {
            field: field.into(),
        }
    }
}
