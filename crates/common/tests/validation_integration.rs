//! Integration tests for validation module
//!
//! Exercises the validator the way booking form checks use it: several
//! fields validated together, every failure reported at once.

use agendar_common::validation::{
    DigitCountValidator, EmailValidator, FieldValidator, OneOfValidator, ValidationError,
    Validator,
};

#[test]
fn valid_email_passes() {
    let mut validator = Validator::new();
    validator.check("email", "test@example.com", &EmailValidator::new());

    assert!(!validator.has_errors());
    assert!(validator.finalize().is_ok());
}

#[test]
fn invalid_email_reports_message() {
    let mut validator = Validator::new();
    validator.check("email", "not-an-email", &EmailValidator::new());

    assert_eq!(validator.error_count(), 1);

    let errors = validator.finalize().unwrap_err();
    assert_eq!(errors.field_errors("email")[0].message, "Invalid email format");
    assert_eq!(errors.to_string(), "email: Invalid email format");
}

/// A full form with several bad fields reports each of them
#[test]
fn form_style_validation_collects_every_field() {
    let areas = OneOfValidator::new(["Trabalhista", "Cível", "Família"]);
    let hour_minute = |value: &str| match value.split_once(':') {
        Some((h, m)) if h.len() == 2 && m.len() == 2 => Ok(()),
        _ => Err("must be HH:MM".to_string()),
    };

    let mut validator = Validator::new();
    validator.require("name", "   ");
    validator.check("phone", "(11) 98765-4321", &DigitCountValidator::between(10, 11));
    validator.check("email", "ana@", &EmailValidator::new());
    validator.check("area", "Tributário", &areas);
    validator.check("time", "14h", &hour_minute);
    validator.require("notes", "ok");

    let err = validator.finalize().unwrap_err();
    assert_eq!(err.fields(), vec!["name", "email", "area", "time"]);
    assert!(err.to_string().starts_with("4 fields failed"));
}

#[test]
fn validators_work_as_trait_objects() {
    let checks: Vec<(&str, Box<dyn FieldValidator>)> = vec![
        ("email", Box::new(EmailValidator::new())),
        ("phone", Box::new(DigitCountValidator::between(10, 11))),
    ];

    let mut validator = Validator::new();
    for (field, check) in &checks {
        validator.check(field, "x", &**check);
    }

    assert_eq!(validator.finalize().unwrap_err().fields(), vec!["email", "phone"]);
}

#[test]
fn merge_keeps_errors_from_both_sides() {
    let mut first = ValidationError::field("date", "cannot be empty");
    first.merge(ValidationError::field("time", "cannot be empty"));

    assert_eq!(first.error_count(), 2);
    assert_eq!(first.fields(), vec!["date", "time"]);
}
