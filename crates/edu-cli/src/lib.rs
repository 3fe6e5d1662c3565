//! # edu-cli — CLI Tool for the School-Administration Stack
//!
//! Provides the `edu` command-line interface over `edu-core`, for support
//! staff and import scripts that need to check identifiers and payloads
//! without going through the web dashboard.
//!
//! ## Subcommands
//!
//! - `edu cpf` — strip, validate, format, mask and generate CPFs.
//! - `edu user check` — validate staff-user create/update payload files.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `edu-core`; no validation rules live here.
//! - Exit codes: 0 success, 1 runtime error, 2 invalid input.

pub mod cpf;
pub mod user;
