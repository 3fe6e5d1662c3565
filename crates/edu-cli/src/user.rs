//! # User CLI — check staff-user payloads before they reach the API.
//!
//! ```bash
//! edu user check new_user.json
//! edu user check --update patch.json
//! ```
//!
//! Prints the validated summary (CPF masked) or the
//! `{ "error": "Dados inválidos", "issues": [...] }` body as pretty JSON.
//! Exits 0 when the payload is valid, 2 when it is not, 1 on I/O or
//! JSON syntax errors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use edu_core::{NewUser, UserRole, UserUpdate, ValidatedNewUser, ValidatedUserUpdate};

/// User subcommand arguments.
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// Available user subcommands.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Validate a create (or, with --update, a partial update) payload file.
    Check {
        /// Path to the JSON payload.
        file: PathBuf,

        /// Treat the payload as a partial update instead of a new user.
        #[arg(long)]
        update: bool,
    },
}

/// Execute the user subcommand.
pub fn run_user(args: &UserArgs) -> Result<u8> {
    match &args.command {
        UserCommand::Check { file, update } => {
            let (body, code) = check_file(file, *update)?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(code)
        }
    }
}

/// Read and validate a payload file, returning the JSON body to print and
/// the exit code.
pub fn check_file(path: &Path, update: bool) -> Result<(Value, u8)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload: {}", path.display()))?;
    tracing::info!(path = %path.display(), update, "checking user payload");
    if update {
        check_update(&raw)
    } else {
        check_new(&raw)
    }
}

/// Validate a create payload given as JSON text.
pub fn check_new(raw: &str) -> Result<(Value, u8)> {
    let payload: NewUser = serde_json::from_str(raw).context("invalid create payload")?;
    tracing::debug!(?payload, "parsed create payload");
    match payload.validate() {
        Ok(user) => Ok((serde_json::to_value(NewUserSummary::from(&user))?, 0)),
        Err(issues) => {
            tracing::warn!(count = issues.len(), "create payload rejected");
            Ok((issues.to_body(), 2))
        }
    }
}

/// Validate a partial update payload given as JSON text.
pub fn check_update(raw: &str) -> Result<(Value, u8)> {
    let payload: UserUpdate = serde_json::from_str(raw).context("invalid update payload")?;
    match payload.validate() {
        Ok(update) => {
            if update.is_empty() {
                tracing::warn!("update payload changes nothing");
            }
            Ok((serde_json::to_value(UpdateSummary::from(&update))?, 0))
        }
        Err(issues) => {
            tracing::warn!(count = issues.len(), "update payload rejected");
            Ok((issues.to_body(), 2))
        }
    }
}

/// Printable view of a valid create payload. The password is omitted.
#[derive(Debug, Serialize)]
struct NewUserSummary {
    nome: String,
    email: String,
    tipo: UserRole,
    cpf: String,
}

impl From<&ValidatedNewUser> for NewUserSummary {
    fn from(user: &ValidatedNewUser) -> Self {
        Self {
            nome: user.nome.clone(),
            email: user.email.clone(),
            tipo: user.tipo,
            cpf: user.cpf.masked(),
        }
    }
}

/// Printable view of a valid update: only the fields that would change.
#[derive(Debug, Serialize)]
struct UpdateSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tipo: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpf: Option<String>,
}

impl From<&ValidatedUserUpdate> for UpdateSummary {
    fn from(update: &ValidatedUserUpdate) -> Self {
        Self {
            nome: update.nome.clone(),
            email: update.email.clone(),
            tipo: update.tipo,
            cpf: update.cpf.as_ref().map(|c| c.masked()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_NEW: &str = r#"{
        "nome": "Ana Souza",
        "cpf": "529.982.247-25",
        "email": "ana@escola.br",
        "senha": "segredo1",
        "tipo": "PROFESSOR"
    }"#;

    #[test]
    fn new_valid_summary_masks_cpf_and_drops_password() {
        let (body, code) = check_new(VALID_NEW).unwrap();
        assert_eq!(code, 0);
        assert_eq!(body["cpf"], "529.***.***-25");
        assert_eq!(body["tipo"], "PROFESSOR");
        assert!(body.get("senha").is_none());
    }

    #[test]
    fn new_invalid_returns_issues_body() {
        let raw = r#"{"nome":"A","cpf":"111.111.111-11","email":"ana@escola.br","senha":"segredo1","tipo":"ADMIN"}"#;
        let (body, code) = check_new(raw).unwrap();
        assert_eq!(code, 2);
        assert_eq!(body["error"], "Dados inválidos");
        assert_eq!(body["issues"][0]["path"][0], "nome");
        assert_eq!(body["issues"][1]["path"][0], "cpf");
        assert_eq!(body["issues"][1]["message"], "CPF inválido");
    }

    #[test]
    fn new_malformed_json_is_error() {
        assert!(check_new("{").is_err());
        assert!(check_new(r#"{"nome":"Ana"}"#).is_err());
    }

    #[test]
    fn update_summary_only_changed_fields() {
        let (body, code) = check_update(r#"{"cpf":"111.444.777-35","nome":""}"#).unwrap();
        assert_eq!(code, 0);
        assert_eq!(body, serde_json::json!({ "cpf": "111.***.***-35" }));
    }

    #[test]
    fn update_invalid() {
        let (body, code) = check_update(r#"{"email":"nope"}"#).unwrap();
        assert_eq!(code, 2);
        assert_eq!(body["issues"][0]["message"], "Email inválido");
    }

    #[test]
    fn update_role_empty_or_unknown() {
        let (body, code) = check_update(r#"{"tipo":""}"#).unwrap();
        assert_eq!(code, 0);
        assert_eq!(body, serde_json::json!({}));

        let (body, code) = check_update(r#"{"tipo":"ALUNO"}"#).unwrap();
        assert_eq!(code, 2);
        assert_eq!(body["issues"][0]["path"][0], "tipo");
        assert_eq!(body["issues"][0]["message"], "Tipo inválido");
    }

    #[test]
    fn check_file_reads_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        std::fs::write(&path, VALID_NEW).unwrap();
        let (_, code) = check_file(&path, false).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn check_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_file(&dir.path().join("missing.json"), false).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read payload"));
    }
}
