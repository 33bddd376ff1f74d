//! Tests for the registration rule table.

use enrollment_lib::model::{Course, Field, FormRecord, Gender};
use enrollment_lib::validation::{ErrorMap, ValidationEngine};

fn valid_record() -> FormRecord {
    FormRecord {
        username: "John Doe".to_string(),
        address: "12 Main St".to_string(),
        email: "john@example.com".to_string(),
        phone: "1234567890".to_string(),
        gender: Some(Gender::Male),
        dob: "2000-01-01".to_string(),
        courses: Some(Course::Commerce),
    }
}

fn only(errors: &ErrorMap, field: Field, message: &str) {
    assert_eq!(errors.len(), 1, "unexpected errors: {:?}", errors);
    assert_eq!(errors.get(field), Some(message));
}

#[test]
fn test_empty_record_reports_every_field() {
    let errors = ValidationEngine::registration().validate(&FormRecord::initialize());
    assert_eq!(errors.len(), 7);
    assert_eq!(errors.get(Field::Username), Some("Name is required"));
    assert_eq!(errors.get(Field::Address), Some("Address is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
    assert_eq!(errors.get(Field::Gender), Some("Gender is required"));
    assert_eq!(errors.get(Field::Dob), Some("Date of Birth is required"));
    assert_eq!(errors.get(Field::Courses), Some("Course selection is required"));
}

#[test]
fn test_valid_record_has_no_errors() {
    let engine = ValidationEngine::registration();
    let record = valid_record();
    assert!(engine.validate(&record).is_valid());
    // Re-validating the same record gives the same answer.
    assert!(engine.validate(&record).is_empty());
}

#[test]
fn test_course_given_by_value_validates() {
    let record = FormRecord::initialize()
        .update(Field::Username, "John Doe")
        .update(Field::Address, "12 Main St")
        .update(Field::Email, "john@example.com")
        .update(Field::Phone, "1234567890")
        .update(Field::Gender, "Male")
        .update(Field::Dob, "2000-01-01")
        .update(Field::Courses, "B.com");
    assert_eq!(record, valid_record());
    assert!(ValidationEngine::default().validate(&record).is_valid());
}

#[test]
fn test_username_with_digit() {
    let record = FormRecord {
        username: "J0hn".to_string(),
        ..valid_record()
    };
    let errors = ValidationEngine::registration().validate(&record);
    only(&errors, Field::Username, "Name should contain only letters");
}

#[test]
fn test_username_rejects_punctuation() {
    let record = FormRecord {
        username: "O'Brien".to_string(),
        ..valid_record()
    };
    let errors = ValidationEngine::registration().validate(&record);
    only(&errors, Field::Username, "Name should contain only letters");
}

#[test]
fn test_short_phone() {
    let record = FormRecord {
        phone: "12345".to_string(),
        ..valid_record()
    };
    let errors = ValidationEngine::registration().validate(&record);
    only(&errors, Field::Phone, "Phone number must be 10 digits");
}

#[test]
fn test_phone_rejects_eleven_digits_and_letters() {
    let engine = ValidationEngine::registration();
    for phone in ["12345678901", "12345abcde", "123 456 78", "+123456789"] {
        let record = FormRecord {
            phone: phone.to_string(),
            ..valid_record()
        };
        assert_eq!(
            engine.validate_field(&record, Field::Phone),
            Some("Phone number must be 10 digits"),
            "phone {:?}",
            phone
        );
    }
}

#[test]
fn test_phone_rejects_non_ascii_digits() {
    let record = FormRecord {
        phone: "١٢٣٤٥٦٧٨٩٠".to_string(),
        ..valid_record()
    };
    let errors = ValidationEngine::registration().validate(&record);
    only(&errors, Field::Phone, "Phone number must be 10 digits");
}

#[test]
fn test_email_shapes() {
    let engine = ValidationEngine::registration();
    for email in ["john", "john@example", "john@@example.com", "jo hn@example.com", "@example.com"] {
        let record = FormRecord {
            email: email.to_string(),
            ..valid_record()
        };
        assert_eq!(
            engine.validate_field(&record, Field::Email),
            Some("Invalid email format"),
            "email {:?}",
            email
        );
    }
    for email in ["a@b.c", "first.last@mail.example.org"] {
        let record = FormRecord {
            email: email.to_string(),
            ..valid_record()
        };
        assert_eq!(engine.validate_field(&record, Field::Email), None);
    }
}

#[test]
fn test_unknown_gender_reads_as_unset() {
    let record = valid_record().update(Field::Gender, "Robot");
    assert_eq!(record.gender, None);
    let errors = ValidationEngine::registration().validate(&record);
    only(&errors, Field::Gender, "Gender is required");
}

#[test]
fn test_dob_is_presence_only() {
    let record = FormRecord {
        dob: "not a date".to_string(),
        ..valid_record()
    };
    assert!(ValidationEngine::registration().validate(&record).is_valid());
    assert_eq!(record.date_of_birth(), None);
}

#[test]
fn test_whitespace_only_name_counts_as_present() {
    let record = FormRecord {
        username: "   ".to_string(),
        ..valid_record()
    };
    assert!(ValidationEngine::registration().validate(&record).is_valid());
}

#[test]
fn test_errors_in_form_order() {
    let record = FormRecord {
        username: String::new(),
        phone: "1".to_string(),
        courses: None,
        ..valid_record()
    };
    let errors = ValidationEngine::registration().validate(&record);
    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(fields, vec![Field::Username, Field::Phone, Field::Courses]);
    assert_eq!(errors.first(), Some((Field::Username, "Name is required")));
}

#[test]
fn test_custom_rule_table() {
    let engine = ValidationEngine::builder()
        .field(Field::Address)
        .required("Address is required")
        .rule(|v| v.len() >= 5, "Address is too short")
        .build();

    let record = valid_record().update(Field::Address, "1 A");
    let errors = engine.validate(&record);
    only(&errors, Field::Address, "Address is too short");
    assert_eq!(engine.fields().collect::<Vec<_>>(), vec![Field::Address]);
}

#[test]
fn test_first_failing_rule_wins() {
    let engine = ValidationEngine::builder()
        .field(Field::Email)
        .required("Email is required")
        .pattern(r"@", "Missing @")
        .build();

    let errors = engine.validate(&FormRecord::initialize());
    only(&errors, Field::Email, "Email is required");
}

#[test]
fn test_error_map_serializes_by_field_name() {
    let errors = ValidationEngine::registration().validate(&FormRecord {
        phone: "12345".to_string(),
        ..valid_record()
    });
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "phone": "Phone number must be 10 digits" }));
}
