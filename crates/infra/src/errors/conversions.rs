//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use agendar_domain::AgendarError;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AgendarError);

impl From<InfraError> for AgendarError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AgendarError> for InfraError {
    fn from(value: AgendarError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAgendarError {
    fn into_agendar(self) -> AgendarError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AgendarError */
/* -------------------------------------------------------------------------- */

impl IntoAgendarError for IoError {
    fn into_agendar(self) -> AgendarError {
        match self.kind() {
            ErrorKind::NotFound => AgendarError::Config(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                AgendarError::Config(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => AgendarError::Config(format!("file is not UTF-8: {self}")),
            _ => AgendarError::Internal(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_agendar())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AgendarError */
/* -------------------------------------------------------------------------- */

impl IntoAgendarError for JsonError {
    fn into_agendar(self) -> AgendarError {
        match self.classify() {
            Category::Syntax | Category::Data | Category::Eof => {
                AgendarError::Config(format!("Invalid JSON format: {self}"))
            }
            Category::Io => AgendarError::Internal(format!("JSON I/O failure: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_agendar())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → AgendarError */
/* -------------------------------------------------------------------------- */

impl IntoAgendarError for TomlError {
    fn into_agendar(self) -> AgendarError {
        AgendarError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_agendar())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
