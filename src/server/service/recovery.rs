//! Password recovery by emailed code.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recovery_code::RecoveryCodeRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{recovery::normalize_code, user::normalize_email},
    service::mail::Mailer,
    util::{code::generate_recovery_code, password::hash_password},
};

pub struct RecoveryService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    code_ttl: Duration,
}

impl<'a> RecoveryService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer, code_ttl_minutes: i64) -> Self {
        Self {
            db,
            mailer,
            code_ttl: Duration::minutes(code_ttl_minutes),
        }
    }

    /// Issues a fresh recovery code for an account and mails it.
    ///
    /// Any previous code for the email stops working.
    ///
    /// # Returns
    /// - `Err(AuthError::EmailNotFound)` - No account with that email
    /// - `Err(AppError::MailErr)` - The code could not be mailed
    pub async fn send_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_none()
        {
            return Err(AuthError::EmailNotFound.into());
        }

        let code = RecoveryCodeRepository::new(self.db)
            .replace(&email, generate_recovery_code())
            .await?;

        self.mailer.send_recovery_code(&email, &code.code).await
    }

    /// Whether the code is the current, unexpired code of the email.
    pub async fn check_code(&self, email: &str, code: &str) -> Result<bool, AppError> {
        let email = normalize_email(email);
        let code = normalize_code(code);

        let stored = RecoveryCodeRepository::new(self.db).find(&email).await?;

        Ok(stored.is_some_and(|stored| stored.accepts(&code, Utc::now(), self.code_ttl)))
    }

    /// Sets a new password using a valid recovery code, consuming the code.
    ///
    /// # Returns
    /// - `Err(AuthError::InvalidRecoveryCode)` - Code wrong, expired or never issued
    /// - `Err(AuthError::PasswordsDoNotMatch)` - New password and repetition differ
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
        repeat_password: &str,
    ) -> Result<(), AppError> {
        if !self.check_code(email, code).await? {
            return Err(AuthError::InvalidRecoveryCode.into());
        }

        let new_password = new_password.trim();
        if new_password.is_empty() {
            return Err(AppError::BadRequest("new_password is required".to_string()));
        }
        if new_password != repeat_password.trim() {
            return Err(AuthError::PasswordsDoNotMatch.into());
        }

        let email = normalize_email(email);
        let users = UserRepository::new(self.db);
        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        users
            .update_password(user.id, hash_password(new_password).await?)
            .await?;
        RecoveryCodeRepository::new(self.db).delete(&email).await?;

        Ok(())
    }
}
