//! Employee and admin profile types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::permission::PermissionSet;
use super::ui::Language;

/// Employee profile as shown in the app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub employee_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub language: Language,
}

/// Admin profile with its permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl AdminProfile {
    pub fn can(&self, key: &str) -> bool {
        self.permissions.has(key)
    }
}
