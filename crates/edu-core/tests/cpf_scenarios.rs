//! # CPF Scenario Tests
//!
//! Literal input/output pairs that the web forms and the listing view rely
//! on. If any of these change, stored data and rendered tables change with
//! them.

use edu_core::cpf::{format, is_valid, mask, strip};
use edu_core::Cpf;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn repunit_rejected_after_stripping() {
    assert!(!is_valid("111.111.111-11"));
}

#[test]
fn short_input_rejected() {
    assert!(!is_valid("123"));
}

#[test]
fn generated_fixture_accepted_and_verifier_mutations_rejected() {
    let cpf = Cpf::from_base("390.533.447").unwrap();
    assert_eq!(cpf.as_str(), "39053344705");
    assert!(is_valid(cpf.as_str()));

    for pos in [9, 10] {
        for replacement in b'0'..=b'9' {
            let mut bytes = cpf.as_str().as_bytes().to_vec();
            if bytes[pos] == replacement {
                continue;
            }
            bytes[pos] = replacement;
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(!is_valid(&mutated), "{mutated} must be rejected");
        }
    }
}

// ---------------------------------------------------------------------------
// Masking
// ---------------------------------------------------------------------------

#[test]
fn mask_plain_digits() {
    assert_eq!(mask("12345678900"), "123.***.***-00");
}

#[test]
fn mask_formatted_input() {
    assert_eq!(mask("987.654.321-99"), "987.***.***-99");
}

#[test]
fn mask_short_input_unchanged() {
    assert_eq!(mask("123"), "123");
}

// ---------------------------------------------------------------------------
// Form input pipeline: strip -> format per keystroke, validate at 11 digits
// ---------------------------------------------------------------------------

#[test]
fn keystroke_pipeline() {
    let typed = "52998224725";
    for end in 1..=typed.len() {
        let digits = strip(&typed[..end]);
        let shown = format(&digits);
        if digits.len() == 11 {
            assert_eq!(shown, "529.982.247-25");
            assert!(is_valid(&digits));
        } else {
            assert_eq!(shown, digits);
            assert!(!is_valid(&digits));
        }
    }
}

#[test]
fn storage_pipeline() {
    let raw = " 529.982.247-25 ";
    let stored = strip(raw);
    assert!(is_valid(&stored));
    assert_eq!(stored, "52998224725");
    assert_eq!(mask(&stored), "529.***.***-25");
}
