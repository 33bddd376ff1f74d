//! Rule table for the school registration form.

use crate::model::Field;

use super::engine::ValidationEngine;

const LETTERS_AND_SPACES: &str = r"^[A-Za-z\s]+$";
const EMAIL_SHAPE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const TEN_DIGITS: &str = r"^[0-9]{10}$";
const GENDERS: &[&str] = &["Male", "Female", "Other"];

impl ValidationEngine {
    /// Rules of the registration form.
    ///
    /// `dob` and `courses` are presence checks only.
    #[rustfmt::skip]
    pub fn registration() -> Self {
        ValidationEngine::builder()
            .field(Field::Username)
                .required("Name is required")
                .pattern(LETTERS_AND_SPACES, "Name should contain only letters")
            .field(Field::Address)
                .required("Address is required")
            .field(Field::Email)
                .required("Email is required")
                .pattern(EMAIL_SHAPE, "Invalid email format")
            .field(Field::Phone)
                .required("Phone number is required")
                .pattern(TEN_DIGITS, "Phone number must be 10 digits")
            .field(Field::Gender)
                .one_of(GENDERS, "Gender is required")
            .field(Field::Dob)
                .required("Date of Birth is required")
            .field(Field::Courses)
                .required("Course selection is required")
            .build()
    }
}
