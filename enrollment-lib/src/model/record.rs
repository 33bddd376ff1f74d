//! The registration record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Course, Field, Gender};

/// Current values of the seven registration fields.
///
/// Records are plain values: [`FormRecord::update`] returns a new record and
/// never touches the one it was called on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub username: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
    /// ISO 8601 calendar date as produced by a date input (`YYYY-MM-DD`).
    pub dob: String,
    pub courses: Option<Course>,
}

impl FormRecord {
    /// The default record: every text field empty, gender and course unset.
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Return a copy with `field` set to `value` and every other field kept.
    ///
    /// No validation happens here. For `gender` and `courses` a value outside
    /// the option set leaves the field unset, which validation then reports.
    pub fn update(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            Field::Username => next.username = value,
            Field::Address => next.address = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Gender => next.gender = option_or_unset(field, &value, Gender::parse),
            Field::Dob => next.dob = value,
            Field::Courses => next.courses = option_or_unset(field, &value, Course::parse),
        }
        next
    }

    /// Text view of a field, as a bound input would display it.
    ///
    /// Unset options read as the empty string.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Address => &self.address,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Gender => self.gender.map(Gender::as_str).unwrap_or_default(),
            Field::Dob => &self.dob,
            Field::Courses => self.courses.map(Course::value).unwrap_or_default(),
        }
    }

    /// Parsed date of birth, if `dob` holds a valid ISO 8601 calendar date.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d").ok()
    }

    /// True when every field still holds its default.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

fn option_or_unset<T>(field: Field, value: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() && !value.is_empty() {
        log::warn!("'{}' is not an option for {}, leaving it unset", value, field);
    }
    parsed
}
