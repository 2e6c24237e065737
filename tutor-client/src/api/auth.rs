//! Auth API

use serde::{Deserialize, Serialize};
use shared::models::{Tutor, TutorUpdate};

use crate::{ClientResult, HttpClient};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct PasswordChangeRequest<'a> {
    old_password: &'a str,
    new_password1: &'a str,
    new_password2: &'a str,
}

/// Login response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: Tutor,
}

impl HttpClient {
    /// Login with email and password; the session cookie is stored on
    /// the client.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Tutor> {
        let response: LoginResponse = self
            .post("/api/auth/login/", &LoginRequest { email, password })
            .await?;
        Ok(response.user)
    }

    /// End the current session
    pub async fn logout(&self) -> ClientResult<()> {
        self.post_empty::<serde_json::Value>("/api/auth/logout/")
            .await?;
        Ok(())
    }

    /// Get the authenticated tutor
    pub async fn current_user(&self) -> ClientResult<Tutor> {
        self.get("/api/auth/user/").await
    }

    /// Partially update the account (display name)
    pub async fn update_profile(&self, update: &TutorUpdate) -> ClientResult<Tutor> {
        self.patch("/api/auth/user/", update).await
    }

    /// Change the account password; the backend re-validates the current
    /// one and expects the new password twice.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> ClientResult<()> {
        self.post::<serde_json::Value, _>(
            "/api/auth/password/change/",
            &PasswordChangeRequest {
                old_password,
                new_password1: new_password,
                new_password2: new_password_confirm,
            },
        )
        .await?;
        Ok(())
    }
}
