//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `Display` strings are for operators and logs (English, with context).
//! - [`ValidationError::user_message()`] is the text shown to end users,
//!   matching the wording of the web forms.
//! - Field-level problems on a whole payload are collected into
//!   [`ValidationIssues`] instead of stopping at the first one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a single value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Stripped CPF does not have exactly 11 digits.
    #[error("CPF must have 11 digits, found {found}")]
    CpfLength {
        /// Number of digits left after stripping separators.
        found: usize,
    },

    /// All 11 digits are identical (e.g. `111.111.111-11`).
    #[error("CPF digits are all identical")]
    CpfRepeatedDigits,

    /// Verifier digits do not match the base digits.
    #[error("CPF verifier digits do not match")]
    CpfChecksum,

    /// Base handed to the verifier-digit generator is not 9 digits.
    #[error("CPF base must have 9 digits, found {found}")]
    CpfBaseLength {
        /// Number of digits left after stripping separators.
        found: usize,
    },

    /// Raw form field is longer than a formatted CPF can be.
    #[error("CPF field must be at most 14 characters, found {found}")]
    CpfFieldTooLong {
        /// Character count of the raw field.
        found: usize,
    },

    /// A CPF form field within the accepted raw length did not hold a valid
    /// CPF. Wraps the underlying reason.
    #[error("invalid CPF field: {0}")]
    InvalidCpf(Box<ValidationError>),

    /// Role name is not one of the known staff roles.
    #[error("unknown user role: {0:?}")]
    UnknownRole(String),

    /// Email does not look like `local@domain.tld`.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Password is shorter than the minimum.
    #[error("password must have at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// Name is shorter than the minimum after trimming.
    #[error("name must have at least {min} characters")]
    NameTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },
}

impl ValidationError {
    /// End-user message for this failure, as rendered next to the form field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CpfLength { .. } => "CPF deve ter 11 dígitos",
            Self::CpfRepeatedDigits
            | Self::CpfChecksum
            | Self::CpfBaseLength { .. }
            | Self::CpfFieldTooLong { .. }
            | Self::InvalidCpf(_) => "CPF inválido",
            Self::UnknownRole(_) => "Tipo inválido",
            Self::InvalidEmail(_) => "Email inválido",
            Self::PasswordTooShort { .. } => "A senha deve ter no mínimo 6 caracteres",
            Self::NameTooShort { .. } => "Nome muito curto",
        }
    }
}

/// One field-level problem in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Path to the offending field, outermost first (e.g. `["cpf"]`).
    pub path: Vec<String>,
    /// End-user message.
    pub message: String,
}

impl FieldIssue {
    /// Issue for a top-level field.
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
        }
    }
}

/// All field-level problems found while validating a payload, in field order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{} invalid field(s)", .issues.len())]
pub struct ValidationIssues {
    /// Collected issues.
    pub issues: Vec<FieldIssue>,
}

impl ValidationIssues {
    /// Summary line used as the `error` member of the response body.
    pub const SUMMARY: &'static str = "Dados inválidos";

    /// Record an issue for a top-level field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, message));
    }

    /// Record a [`ValidationError`] against a field, using its user message.
    pub fn push_error(&mut self, field: &str, err: &ValidationError) {
        self.push(field, err.user_message());
    }

    /// Returns `true` when no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// The `{ "error": ..., "issues": [...] }` body handed back to API clients.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": Self::SUMMARY,
            "issues": self.issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_failures_share_user_message() {
        assert_eq!(ValidationError::CpfChecksum.user_message(), "CPF inválido");
        assert_eq!(
            ValidationError::CpfRepeatedDigits.user_message(),
            "CPF inválido"
        );
        assert_eq!(
            ValidationError::CpfLength { found: 3 }.user_message(),
            "CPF deve ter 11 dígitos"
        );
    }

    #[test]
    fn invalid_cpf_wraps_reason() {
        let err = ValidationError::InvalidCpf(Box::new(ValidationError::CpfLength { found: 9 }));
        assert_eq!(err.user_message(), "CPF inválido");
        assert_eq!(
            err.to_string(),
            "invalid CPF field: CPF must have 11 digits, found 9"
        );
    }

    #[test]
    fn unknown_role_message() {
        let err = ValidationError::UnknownRole("DIRETOR".to_string());
        assert_eq!(err.user_message(), "Tipo inválido");
    }

    #[test]
    fn display_carries_context() {
        let err = ValidationError::CpfLength { found: 13 };
        assert_eq!(err.to_string(), "CPF must have 11 digits, found 13");
    }

    #[test]
    fn issues_into_result() {
        assert!(ValidationIssues::default().into_result().is_ok());

        let mut issues = ValidationIssues::default();
        issues.push("nome", "Nome muito curto");
        let err = issues.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "1 invalid field(s)");
    }

    #[test]
    fn issues_body_shape() {
        let mut issues = ValidationIssues::default();
        issues.push_error("cpf", &ValidationError::CpfChecksum);
        let body = issues.to_body();
        assert_eq!(body["error"], "Dados inválidos");
        assert_eq!(body["issues"][0]["path"][0], "cpf");
        assert_eq!(body["issues"][0]["message"], "CPF inválido");
    }
}
