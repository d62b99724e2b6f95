//! Pseudo session token: base64 of `{"userId", "email", "exp"}`
//!
//! Nothing is signed. The token only carries the expiry the store checks on restore.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::user::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub user_id: String,
    pub email: String,
    /// Expiry in Unix seconds
    pub exp: i64,
}

impl SessionToken {
    /// Token for `user` expiring `ttl` after `now`
    pub fn issue(user: &UserRecord, now: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn encode(&self) -> Result<String, AuthError> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decode a plain base64 blob, or the payload segment of a three-part `h.p.s` token
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let token = token.trim();
        let parts: Vec<&str> = token.split('.').collect();

        let bytes = match parts.as_slice() {
            [single] => STANDARD.decode(single),
            [_, payload, _] => URL_SAFE_NO_PAD
                .decode(payload)
                .or_else(|_| STANDARD.decode(payload)),
            _ => {
                return Err(AuthError::CorruptedSession(format!(
                    "token has {} segments",
                    parts.len()
                )))
            }
        }
        .map_err(|e| AuthError::CorruptedSession(format!("token is not base64: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::CorruptedSession(format!("token payload: {}", e)))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Expired once `now` reaches `exp`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
