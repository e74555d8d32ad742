//! Demo identity and login credential models.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Email of the single demo account.
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Password of the single demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Authenticated identity surfaced by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Returns the fixed demo identity.
    pub fn demo() -> Self {
        Self {
            id: "user-1".to_string(),
            username: "demo_user".to_string(),
            email: DEMO_EMAIL.to_string(),
        }
    }
}

/// Transient login input. Never stored by the session.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact string comparison against the demo pair.
    pub fn matches_demo(&self) -> bool {
        self.email == DEMO_EMAIL && self.password == DEMO_PASSWORD
    }
}

impl Debug for LoginCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
