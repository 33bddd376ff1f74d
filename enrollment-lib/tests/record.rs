//! Tests for the record model and field metadata.

use chrono::NaiveDate;
use enrollment_lib::error::FieldError;
use enrollment_lib::model::{Course, Field, FormRecord, Gender, InputKind};

fn filled() -> FormRecord {
    FormRecord {
        username: "Grace Hopper".to_string(),
        address: "1 Navy Yard".to_string(),
        email: "grace@navy.mil".to_string(),
        phone: "5551234567".to_string(),
        gender: Some(Gender::Female),
        dob: "1906-12-09".to_string(),
        courses: Some(Course::ComputerScience),
    }
}

#[test]
fn test_initialize_is_blank() {
    let record = FormRecord::initialize();
    assert!(record.is_blank());
    for field in Field::ALL {
        assert_eq!(record.value(field), "");
    }
}

#[test]
fn test_update_changes_only_target_field() {
    let before = filled();
    for field in Field::ALL {
        let after = before.update(field, "Other");
        for other in Field::ALL.into_iter().filter(|f| *f != field) {
            assert_eq!(after.value(other), before.value(other), "{} changed", other);
        }
    }
}

#[test]
fn test_update_leaves_original_untouched() {
    let before = filled();
    let after = before.update(Field::Email, "new@example.com");
    assert_eq!(before.email, "grace@navy.mil");
    assert_eq!(after.email, "new@example.com");
}

#[test]
fn test_update_option_fields() {
    let record = FormRecord::initialize()
        .update(Field::Gender, "Other")
        .update(Field::Courses, "Bachelor of Computer Application");
    assert_eq!(record.gender, Some(Gender::Other));
    assert_eq!(record.courses, Some(Course::ComputerApplication));
    assert_eq!(record.value(Field::Courses), "Bachelor of computer Application");

    let cleared = record.update(Field::Gender, "");
    assert_eq!(cleared.gender, None);
}

#[test]
fn test_field_names_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.name().parse::<Field>(), Ok(field));
    }
}

#[test]
fn test_unknown_field_name() {
    let err = "user_name".parse::<Field>().unwrap_err();
    assert_eq!(err, FieldError::unknown("user_name"));
    assert!(err.to_string().contains("user_name"));
}

#[test]
fn test_field_metadata() {
    assert_eq!(Field::Username.label(), "Enter your name");
    assert_eq!(Field::Email.placeholder(), Some("name@example.com"));
    assert_eq!(Field::Dob.placeholder(), None);
    assert_eq!(Field::Address.kind(), InputKind::TextArea);
    assert_eq!(Field::Gender.kind(), InputKind::Radio);
    assert_eq!(Field::Courses.kind(), InputKind::Select);
}

#[test]
fn test_course_catalog() {
    assert_eq!(Course::ALL.len(), 4);
    assert_eq!(Course::parse("B.sc Electronics"), Some(Course::Electronics));
    assert_eq!(Course::parse("Basket weaving"), None);
    assert_eq!(
        Course::ComputerApplication.label(),
        "Bachelor of Computer Application"
    );
}

#[test]
fn test_date_of_birth() {
    assert_eq!(
        filled().date_of_birth(),
        NaiveDate::from_ymd_opt(1906, 12, 9)
    );
    assert_eq!(filled().update(Field::Dob, "2001-02-30").date_of_birth(), None);
}

#[test]
fn test_record_json_uses_form_values() {
    let json = serde_json::to_value(filled()).unwrap();
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["courses"], "B.sc Computer Science");
    assert_eq!(json["dob"], "1906-12-09");

    let back: FormRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, filled());
}

#[test]
fn test_update_with_unknown_course_leaves_it_unset() {
    let record = filled().update(Field::Courses, "Basket weaving");
    assert_eq!(record.courses, None);
    assert_eq!(record.value(Field::Courses), "");
    assert_eq!(record.gender, Some(Gender::Female));
}
