//! # CPF — Brazilian Individual Taxpayer Identifier
//!
//! Validation, formatting, masking and stripping for the 11-digit CPF.
//! The last two digits are verifier digits computed from the first nine
//! with a weighted modulo-11 sum.
//!
//! ## Representations
//!
//! | Form | Example |
//! |------|---------|
//! | canonical | `52998224725` |
//! | formatted | `529.982.247-25` |
//! | masked | `529.***.***-25` |
//!
//! The free functions ([`strip`], [`is_valid`], [`format`], [`mask`]) never
//! fail: invalid input yields `false` or comes back unchanged. The [`Cpf`]
//! newtype is the validated form and can only hold a value that passes
//! [`is_valid`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of digits in a canonical CPF.
pub const CPF_LEN: usize = 11;

/// Number of base digits the verifier digits are computed from.
pub const CPF_BASE_LEN: usize = 9;

/// Length of the formatted and masked forms (`XXX.XXX.XXX-XX`).
pub const CPF_FORMATTED_LEN: usize = 14;

const REDACTED: &str = "***";

/// Remove every character that is not an ASCII digit, keeping order.
pub fn strip(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` if `input` strips to a CPF with correct verifier digits.
///
/// Separators are ignored. Eleven identical digits are always rejected,
/// whatever the arithmetic says.
pub fn is_valid(input: &str) -> bool {
    check(input).is_ok()
}

/// Group an 11-digit CPF as `XXX.XXX.XXX-XX`.
///
/// The input is stripped first. If it does not hold exactly 11 digits it is
/// returned unchanged. Verifier digits are not checked.
pub fn format(input: &str) -> String {
    let digits = strip(input);
    if digits.len() != CPF_LEN {
        return input.to_string();
    }
    group(&digits)
}

/// Redact the middle six digits: `XXX.***.***-XX`.
///
/// The input is stripped first. If it does not hold exactly 11 digits the
/// original input is returned unchanged. Verifier digits are not checked.
pub fn mask(input: &str) -> String {
    let digits = strip(input);
    if digits.len() != CPF_LEN {
        return input.to_string();
    }
    redact(&digits)
}

/// Compute the two verifier digits for a 9-digit base.
///
/// Each element of `base` must be in `0..=9`.
pub fn verifier_digits(base: &[u8; CPF_BASE_LEN]) -> [u8; 2] {
    let first = verifier_digit(base);
    let mut extended = [0u8; CPF_BASE_LEN + 1];
    extended[..CPF_BASE_LEN].copy_from_slice(base);
    extended[CPF_BASE_LEN] = first;
    [first, verifier_digit(&extended)]
}

/// Weighted sum with weights `len+1` down to `2`, reduced mod 11.
/// A remainder of 10 maps to 0.
fn verifier_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

fn check(input: &str) -> Result<String, ValidationError> {
    let stripped = strip(input);
    let values: [u8; CPF_LEN] = digit_values(&stripped)
        .try_into()
        .map_err(|v: Vec<u8>| ValidationError::CpfLength { found: v.len() })?;

    if values.iter().all(|&d| d == values[0]) {
        return Err(ValidationError::CpfRepeatedDigits);
    }

    let mut base = [0u8; CPF_BASE_LEN];
    base.copy_from_slice(&values[..CPF_BASE_LEN]);
    if verifier_digits(&base) != [values[9], values[10]] {
        return Err(ValidationError::CpfChecksum);
    }

    Ok(stripped)
}

fn group(digits: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

fn redact(digits: &str) -> String {
    format!("{}.{REDACTED}.{REDACTED}-{}", &digits[..3], &digits[9..])
}

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A CPF with correct verifier digits.
///
/// Stored in canonical 11-digit form. The constructor accepts both
/// `"52998224725"` and `"529.982.247-25"` (any separators are stripped).
/// Serializes as the canonical digits; `Display` renders the formatted form.
///
/// `Debug` prints the masked form so that stray `{:?}` in logs does not
/// leak the full number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from raw or formatted input, validating verifier digits.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::CpfLength`] if the input does not strip to 11 digits.
    /// - [`ValidationError::CpfRepeatedDigits`] for `000.000.000-00` and friends.
    /// - [`ValidationError::CpfChecksum`] if the verifier digits are wrong.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        check(value.as_ref()).map(Self)
    }

    /// Build a CPF from its 9 base digits by appending computed verifier digits.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::CpfBaseLength`] if the base does not strip to 9 digits.
    /// - [`ValidationError::CpfRepeatedDigits`] if all 9 base digits are equal,
    ///   since the verifiers then repeat the same digit.
    pub fn from_base(base: impl AsRef<str>) -> Result<Self, ValidationError> {
        let stripped = strip(base.as_ref());
        let values: [u8; CPF_BASE_LEN] = digit_values(&stripped)
            .try_into()
            .map_err(|v: Vec<u8>| ValidationError::CpfBaseLength { found: v.len() })?;

        if values.iter().all(|&d| d == values[0]) {
            return Err(ValidationError::CpfRepeatedDigits);
        }

        let [first, second] = verifier_digits(&values);
        Ok(Self(format!("{stripped}{first}{second}")))
    }

    /// Access the canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9 base digits.
    pub fn base(&self) -> &str {
        &self.0[..CPF_BASE_LEN]
    }

    /// The 2 verifier digits.
    pub fn verifier(&self) -> &str {
        &self.0[CPF_BASE_LEN..]
    }

    /// Formatted form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        group(&self.0)
    }

    /// Masked form: `XXX.***.***-XX`.
    pub fn masked(&self) -> String {
        redact(&self.0)
    }

    /// Consume into the canonical digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cpf").field(&self.masked()).finish()
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
