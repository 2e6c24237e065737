//! Tutor (account) model

use serde::{Deserialize, Serialize};

/// Login provider of a tutor account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Email,
    Google,
    Kakao,
}

/// Authenticated tutor, as returned by the user-details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub provider: Provider,
}

/// Update payload for the account (PATCH, only set fields are sent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
