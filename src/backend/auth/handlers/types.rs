//! Request and response types for the user endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration response: the new user's identifier
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userID")]
    pub user_id: Uuid,
}

/// Login response: a bearer credential valid for 24 hours
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Authenticated user info, as returned by GET /users/me
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}
