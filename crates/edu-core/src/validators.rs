//! # Field Validators
//!
//! Single-field rules shared by the user forms and the request handlers:
//! email shape, password length, name length, and the CPF field adapter
//! that wraps [`crate::cpf`] with the raw-length limits of the input box.

use crate::cpf::{self, Cpf, CPF_FORMATTED_LEN, CPF_LEN};
use crate::error::ValidationError;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum name length, in characters, after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Basic `local@domain.tld` shape check.
///
/// No whitespace anywhere, exactly one `@` with text on both sides, and a
/// `.` in the domain with text on both sides of it.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must split the domain into two non-empty halves.
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Like [`validate_email`], but returns a [`ValidationError`].
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Password must have at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Name must have at least [`MIN_NAME_LEN`] characters once trimmed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort { min: MIN_NAME_LEN });
    }
    Ok(())
}

/// Parse a CPF form field.
///
/// The raw field must be between 11 characters (bare digits) and 14
/// characters (fully formatted) long before it is stripped and checked.
/// Past the length gate every failure is [`ValidationError::InvalidCpf`].
pub fn parse_cpf_field(raw: &str) -> Result<Cpf, ValidationError> {
    let len = raw.chars().count();
    if len < CPF_LEN {
        return Err(ValidationError::CpfLength {
            found: cpf::strip(raw).len(),
        });
    }
    if len > CPF_FORMATTED_LEN {
        return Err(ValidationError::CpfFieldTooLong { found: len });
    }
    Cpf::new(raw).map_err(|e| ValidationError::InvalidCpf(Box::new(e)))
}
