// Normalized user information handed back to the auth framework.

use serde::{Deserialize, Serialize};

/// Normalized user information returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2UserInfo {
    /// Provider-specific user ID.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub email_verified: bool,
}

/// Normalized user plus the raw provider object it was read from.
#[derive(Debug, Clone)]
pub struct UserInfoResult {
    pub user: OAuth2UserInfo,
    pub data: serde_json::Value,
}
