//! # edu-core — Foundational Types for the School-Administration Stack
//!
//! Pure, synchronous building blocks shared by the web handlers and the
//! `edu` command-line tool. Nothing here performs I/O, holds global state,
//! or talks to the database.
//!
//! ## Modules
//!
//! - [`cpf`] — strip, validate, format and mask the Brazilian CPF, plus the
//!   validated [`Cpf`] newtype.
//! - [`validators`] — email, password, name and CPF form-field rules.
//! - [`user`] — staff-user create/update payloads and the masked listing row.
//! - [`error`] — structured error hierarchy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `edu-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - A full CPF never appears in `Debug` output or listing rows.

pub mod cpf;
pub mod error;
pub mod user;
pub mod validators;

// Re-export primary types for ergonomic imports.
pub use cpf::Cpf;
pub use error::{FieldIssue, ValidationError, ValidationIssues};
pub use user::{
    NewUser, StoredUser, UserListing, UserRole, UserUpdate, ValidatedNewUser,
    ValidatedUserUpdate,
};
