//! Session and user profile types issued by the identity provider
//!
//! The engine only consumes these: who the user is, whether the session is
//! still live, and the bearer token for authenticated calls. Issuing and
//! refreshing credentials belongs to the provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default = "default_vip_level")]
    pub vip_level: String,
}

fn default_vip_level() -> String {
    "free".to_string()
}

/// Bearer credential issued at sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// True once the expiry has elapsed. Expired sessions are purged locally,
    /// never refreshed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Sign-in response: profile plus credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub session: Session,
}
