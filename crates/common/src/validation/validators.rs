//! Reusable single-field checks

use once_cell::sync::Lazy;
use regex::Regex;

/// A check on one text field
///
/// Returns the message to attach to the field when the value is rejected.
pub trait FieldValidator {
    fn validate(&self, value: &str) -> Result<(), String>;
}

impl<F> FieldValidator for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn validate(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// `local@domain.tld` shape check
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err("Invalid email format".to_string())
        }
    }
}

/// Accepts only values from a fixed option list
///
/// An empty option list accepts everything.
#[derive(Debug, Clone, Default)]
pub struct OneOfValidator {
    options: Vec<String>,
}

impl OneOfValidator {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { options: options.into_iter().map(Into::into).collect() }
    }
}

impl FieldValidator for OneOfValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.options.is_empty() || self.options.iter().any(|option| option == value) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Counts ASCII digits and ignores any punctuation around them
#[derive(Debug, Clone, Copy)]
pub struct DigitCountValidator {
    min: usize,
    max: usize,
}

impl DigitCountValidator {
    /// Accept `min..=max` digits
    pub fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl FieldValidator for DigitCountValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if (self.min..=self.max).contains(&digits) {
            Ok(())
        } else if self.min == self.max {
            Err(format!("must have {} digits", self.min))
        } else {
            Err(format!("must have {} or {} digits", self.min, self.max))
        }
    }
}
