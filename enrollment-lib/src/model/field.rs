//! Field identifiers and their presentation metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// One of the seven fields of the registration form.
///
/// Declaration order is form order: it drives iteration over [`Field::ALL`]
/// and the ordering of an [`ErrorMap`](crate::validation::ErrorMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Address,
    Email,
    Phone,
    Gender,
    Dob,
    Courses,
}

/// Kind of input widget a presentation layer should bind to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single line text.
    Text,
    /// Multi-line text.
    TextArea,
    Email,
    Phone,
    /// Calendar date picker producing an ISO 8601 date.
    Date,
    /// Mutually exclusive options (see [`Gender`](super::Gender)).
    Radio,
    /// Drop-down over the course catalog (see [`Course`](super::Course)).
    Select,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::Username,
        Field::Address,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::Dob,
        Field::Courses,
    ];

    /// Wire name of the field, as emitted by input events.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Address => "address",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Dob => "dob",
            Field::Courses => "courses",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Enter your name",
            Field::Address => "Enter your Address",
            Field::Email => "Email your address",
            Field::Phone => "Phone number",
            Field::Gender => "Gender",
            Field::Dob => "Date of Birth",
            Field::Courses => "Courses",
        }
    }

    /// Placeholder hint, if the input has one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Username => Some("Enter in capital letters"),
            Field::Email => Some("name@example.com"),
            Field::Phone => Some("Enter a valid phone number"),
            Field::Courses => Some("Select a course"),
            Field::Address | Field::Gender | Field::Dob => None,
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::Username => InputKind::Text,
            Field::Address => InputKind::TextArea,
            Field::Email => InputKind::Email,
            Field::Phone => InputKind::Phone,
            Field::Gender => InputKind::Radio,
            Field::Dob => InputKind::Date,
            Field::Courses => InputKind::Select,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::unknown(s))
    }
}
