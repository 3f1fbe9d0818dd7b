//! Password recovery codes.

use chrono::{DateTime, Duration, Utc};

/// Code mailed to an account for password recovery.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryCode {
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl RecoveryCode {
    pub fn from_entity(entity: entity::recovery_code::Model) -> Self {
        Self {
            email: entity.email,
            code: entity.code,
            created_at: entity.created_at,
        }
    }

    /// Whether `code` matches and was issued less than `ttl` before `now`.
    pub fn accepts(&self, code: &str, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.code == code && now - self.created_at < ttl
    }
}

/// Normalizes a code typed by the user.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
