use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    /// Claims carried by the bearer token.
    pub user: UserRecord,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// Account email.
    pub email: String,
}

/// Response of `POST /auth/forgot-password`. In development the backend
/// hands the reset link back instead of emailing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordResponse {
    /// Confirmation text.
    #[serde(default)]
    pub message: Option<String>,
    /// Reset link, when exposed.
    #[serde(default)]
    pub reset_link: Option<String>,
}

/// Body of `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Reset token from the emailed link.
    pub token: String,
    /// Replacement password.
    pub new_password: String,
}
