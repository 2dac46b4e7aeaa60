use serde::{Deserialize, Serialize};

/// A single named capability of an admin account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub granted: bool,
}

/// Permission list as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PermissionSet(pub Vec<Permission>);

impl PermissionSet {
    /// True only when `key` is present and granted
    pub fn has(&self, key: &str) -> bool {
        self.0.iter().any(|p| p.granted && p.key == key)
    }

    pub fn granted_keys(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|p| p.granted)
            .map(|p| p.key.as_str())
            .collect()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self(permissions)
    }
}
