/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user
 * sessions. Keys are built once from the configured secret and passed in
 * explicitly; nothing here reads the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 24 hours
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// HMAC keys for signing and verifying tokens
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Build both keys from the shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `keys` - Signing keys from the application state
/// * `user_id` - User ID (UUID)
/// * `email` - User email
///
/// # Returns
/// Signed token string, valid for 24 hours
pub fn create_token(
    keys: &JwtKeys,
    user_id: Uuid,
    email: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `keys` - Verification keys from the application state
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims, or an error for a malformed, forged, or expired token
pub fn verify_token(keys: &JwtKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(token, &keys.decoding, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> JwtKeys {
        JwtKeys::from_secret("test-secret")
    }

    #[test]
    fn test_create_token() {
        let token = create_token(&test_keys(), Uuid::new_v4(), "test@example.com".to_string());
        assert!(token.is_ok());
        assert!(!token.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let token = create_token(&keys, user_id, "test@example.com".to_string()).unwrap();

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn test_token_expiry_is_24_hours() {
        let keys = test_keys();
        let token = create_token(&keys, Uuid::new_v4(), "test@example.com".to_string()).unwrap();

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(verify_token(&test_keys(), "invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = create_token(&test_keys(), Uuid::new_v4(), "test@example.com".to_string())
            .unwrap();
        let other = JwtKeys::from_secret("a-different-secret");
        assert!(verify_token(&other, &token).is_err());
    }
}
