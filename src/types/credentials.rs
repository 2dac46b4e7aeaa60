//! Login form payloads
//!
//! `check_fields` only catches obviously empty or malformed input before the
//! form is submitted. Verifying the credentials is the backend's job.

use serde::{Deserialize, Serialize};

use crate::error::CredentialsError;

/// Employee login form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCredentials {
    pub employee_code: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl EmployeeCredentials {
    pub fn check_fields(&self) -> Result<(), CredentialsError> {
        if self.employee_code.trim().is_empty() {
            return Err(CredentialsError::EmptyEmployeeCode);
        }
        check_password(&self.password)
    }
}

/// Admin login form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn check_fields(&self) -> Result<(), CredentialsError> {
        check_email(&self.email)?;
        check_password(&self.password)
    }
}

fn check_email(email: &str) -> Result<(), CredentialsError> {
    if !email.contains('@') || !email.contains('.') {
        return Err(CredentialsError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), CredentialsError> {
    if password.is_empty() {
        return Err(CredentialsError::EmptyPassword);
    }
    Ok(())
}
