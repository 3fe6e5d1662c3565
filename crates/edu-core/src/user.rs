//! # Staff User Payloads
//!
//! Shapes for staff-user accounts as they cross the API boundary: the
//! create payload, the partial update payload, and the listing row shown
//! in the admin table. Validation collects every field problem into
//! [`ValidationIssues`] so a form can highlight all of them at once.
//!
//! CPFs leave this module in one of two forms only: canonical digits
//! (inside [`Cpf`], for storage) or masked (in [`UserListing`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::cpf::{self, Cpf};
use crate::error::{ValidationError, ValidationIssues};
use crate::validators;

/// Staff role. Serialized in upper case (`"ADMIN"`, `"PROFESSOR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full administrative access, including user management.
    Admin,
    /// Pedagogical coordinator.
    Coordenador,
    /// Teacher.
    Professor,
    /// Pedagogue.
    Pedagogo,
}

impl UserRole {
    /// All roles in declaration order.
    pub fn all() -> &'static [UserRole] {
        &[Self::Admin, Self::Coordenador, Self::Professor, Self::Pedagogo]
    }

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Coordenador => "COORDENADOR",
            Self::Professor => "PROFESSOR",
            Self::Pedagogo => "PEDAGOGO",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRole(s.to_string()))
    }
}

/// Create-user payload as received from the client.
///
/// `cpf` may arrive formatted; it is stripped during validation.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub senha: String,
    pub tipo: UserRole,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("nome", &self.nome)
            .field("cpf", &cpf::mask(&self.cpf))
            .field("email", &self.email)
            .field("senha", &"<redacted>")
            .field("tipo", &self.tipo)
            .finish()
    }
}

impl NewUser {
    /// Check every field, collecting all problems.
    ///
    /// Issues are reported in the order `nome`, `email`, `senha`, `cpf`.
    pub fn validate(self) -> Result<ValidatedNewUser, ValidationIssues> {
        let mut issues = ValidationIssues::default();

        if let Err(e) = validators::validate_name(&self.nome) {
            issues.push_error("nome", &e);
        }
        if let Err(e) = validators::check_email(&self.email) {
            issues.push_error("email", &e);
        }
        if let Err(e) = validators::validate_password(&self.senha) {
            issues.push_error("senha", &e);
        }
        let cpf = validators::parse_cpf_field(&self.cpf)
            .map_err(|e| issues.push_error("cpf", &e))
            .ok();

        match cpf {
            Some(cpf) if issues.is_empty() => Ok(ValidatedNewUser {
                nome: self.nome,
                cpf,
                email: self.email,
                senha: self.senha,
                tipo: self.tipo,
            }),
            _ => Err(issues),
        }
    }
}

/// A create-user payload that passed validation. Ready to be persisted.
#[derive(Clone)]
pub struct ValidatedNewUser {
    pub nome: String,
    pub cpf: Cpf,
    pub email: String,
    pub senha: String,
    pub tipo: UserRole,
}

impl std::fmt::Debug for ValidatedNewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedNewUser")
            .field("nome", &self.nome)
            .field("cpf", &self.cpf)
            .field("email", &self.email)
            .field("senha", &"<redacted>")
            .field("tipo", &self.tipo)
            .finish()
    }
}

/// Partial update payload. Absent and empty fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Role wire name; parsed during validation.
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl UserUpdate {
    /// Check the fields that are present, collecting all problems.
    ///
    /// Any CPF failure is reported as `"CPF inválido"` and an unknown role
    /// as `"Tipo inválido"`.
    pub fn validate(self) -> Result<ValidatedUserUpdate, ValidationIssues> {
        let mut issues = ValidationIssues::default();

        let nome = non_empty(self.nome);
        if let Some(Err(e)) = nome.as_deref().map(validators::validate_name) {
            issues.push_error("nome", &e);
        }

        let email = non_empty(self.email);
        if let Some(Err(e)) = email.as_deref().map(validators::check_email) {
            issues.push_error("email", &e);
        }

        let tipo = match non_empty(self.tipo).map(|t| t.parse::<UserRole>()) {
            Some(Ok(role)) => Some(role),
            Some(Err(e)) => {
                issues.push_error("tipo", &e);
                None
            }
            None => None,
        };

        let cpf = match non_empty(self.cpf).map(Cpf::new) {
            Some(Ok(cpf)) => Some(cpf),
            Some(Err(e)) => {
                issues.push_error("cpf", &ValidationError::InvalidCpf(Box::new(e)));
                None
            }
            None => None,
        };

        issues.into_result()?;
        Ok(ValidatedUserUpdate {
            nome,
            email,
            tipo,
            cpf,
        })
    }
}

/// A partial update that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedUserUpdate {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub tipo: Option<UserRole>,
    pub cpf: Option<Cpf>,
}

impl ValidatedUserUpdate {
    /// `true` when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.email.is_none() && self.tipo.is_none() && self.cpf.is_none()
    }
}

/// A staff user as handed over by the persistence layer.
///
/// `cpf` is stored unmasked and without separators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub tipo: UserRole,
    #[serde(default)]
    pub cpf: String,
    pub criado: DateTime<Utc>,
    #[serde(default)]
    pub atualizado: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// One row of the admin user table. Never carries the full CPF.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub tipo: UserRole,
    pub cpf: String,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<&StoredUser> for UserListing {
    fn from(user: &StoredUser) -> Self {
        let nome = if user.nome.is_empty() {
            "Sem nome".to_string()
        } else {
            user.nome.clone()
        };
        let cpf = if user.cpf.is_empty() {
            "-".to_string()
        } else {
            cpf::mask(&user.cpf)
        };
        Self {
            id: user.id,
            nome,
            email: user.email.clone(),
            tipo: user.tipo,
            cpf,
            criado: user.criado,
            atualizado: user.atualizado,
            is_active: user.is_active,
        }
    }
}
