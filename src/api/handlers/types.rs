//! Request/response types shared by the auth endpoints.

use crate::auth::PublicUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic `{success, message}` envelope used by every non-login response.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Body of `POST /register` and `POST /login`.
///
/// Fields default to empty so a partial body deserializes and fails the
/// presence check with the contract's own message instead of a framework
/// rejection.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct DashboardResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}
