//! Violation types and the fixed set of messages shown to the operator.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MSG_COMPANY_NAME_REQUIRED: &str = "Le nom de l'éditeur est requis";
pub const MSG_SIMPLE_NAME_REQUIRED: &str = "Le nom simple est requis";
pub const MSG_LICENSE_REQUIRED: &str = "La licence est requise";
pub const MSG_RELEASE_DATE_FORMAT: &str = "La date de sortie doit être au format MM/YYYY";
pub const MSG_PARAMS_INVALID: &str = "Parameters must be a positive number or XL/L/M/S";
pub const MSG_ACTIVE_PARAMS_INVALID: &str = "Active Parameters must be a positive number";
pub const MSG_ARCH_INVALID: &str = "Invalid architecture selected";
pub const MSG_URL_INVALID: &str = "Invalid URL format";
pub const MSG_ENDPOINT_INCOMPLETE: &str =
    "Si un point d'accès API est fourni, le Type d'API et l'ID du modèle API sont tous deux requis";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Every violation found in one form, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.message.as_str()).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(value)` when nothing was recorded, the collected errors otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
