//! Field-level validation
//!
//! [`Validator`] runs any number of checks and reports every failing field
//! at once through [`ValidationError`].

use std::fmt;

use serde::Serialize;

mod validators;

pub use validators::{DigitCountValidator, EmailValidator, FieldValidator, OneOfValidator};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found by a validation pass, in the order found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { errors: vec![FieldError::new(field, message)] }
    }

    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Failing field names without repeats, first occurrence wins
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in self.errors.iter().map(|e| e.field.as_str()) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "validation failed"),
            [single] => write!(f, "{single}"),
            many => {
                let listed: Vec<String> = many.iter().map(ToString::to_string).collect();
                write!(f, "{} fields failed: {}", many.len(), listed.join("; "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collects field errors and turns them into a single result
///
/// ```rust
/// use agendar_common::validation::{EmailValidator, Validator};
///
/// let mut validator = Validator::new();
/// validator.require("name", "  ");
/// validator.check("email", "not-an-email", &EmailValidator::new());
///
/// let err = validator.finalize().unwrap_err();
/// assert_eq!(err.fields(), vec!["name", "email"]);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    stop_on_first: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore every check after the first failure
    pub fn stop_on_first_error(mut self) -> Self {
        self.stop_on_first = true;
        self
    }

    fn closed(&self) -> bool {
        self.stop_on_first && !self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        if !self.closed() {
            self.errors.add_field_error(field, message);
        }
    }

    /// Run `validator` against `value`
    pub fn check<V>(&mut self, field: &str, value: &str, validator: &V)
    where
        V: FieldValidator + ?Sized,
    {
        if self.closed() {
            return;
        }
        if let Err(message) = validator.validate(value) {
            self.add_error(field, message);
        }
    }

    /// Reject a blank value
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
    }

    /// Record `message` for `field` when `ok` is false
    pub fn ensure(&mut self, field: &str, ok: bool, message: impl Into<String>) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
