//! Account registration, login and password changes.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::Role,
        user::{normalize_email, ChangePasswordParam, CreateUserParam, RegisterParam, User},
    },
    service::alert::ALERT_TARGET,
    util::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
};

/// Service for student accounts and credentials shared by every role.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a student and signs them in.
    ///
    /// # Returns
    /// - `Ok(String)` - Token of the new student
    /// - `Err(AuthError::EmailAlreadyExists)` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<String, AppError> {
        let user = insert_account(self.db, param, Role::Student).await?;

        tracing::info!(
            target: ALERT_TARGET,
            "New student registered: {} ({})",
            user.first_name,
            user.email
        );

        self.jwt.issue(user.id, user.role)
    }

    /// Signs in with email and password.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(String)` - Token of the user
    /// - `Err(AuthError::IncorrectPassword)` - Unknown email or wrong password
    pub async fn authorize(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::IncorrectPassword)?;

        if !verify_password(password.trim(), &user.password_hash).await? {
            return Err(AuthError::IncorrectPassword.into());
        }

        self.jwt.issue(user.id, user.role)
    }

    pub async fn get_all(&self, role: Option<Role>) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all(role).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    /// Changes the password of the signed-in user.
    ///
    /// # Returns
    /// - `Err(AuthError::PasswordsDoNotMatch)` - New password and repetition differ
    /// - `Err(AuthError::IncorrectPassword)` - Old password is wrong
    /// - `Err(AuthError::UserNotInDatabase)` - User deleted since the token was issued
    pub async fn change_password(&self, param: ChangePasswordParam) -> Result<(), AppError> {
        let new_password = param.new_password.trim();
        if new_password.is_empty() {
            return Err(AppError::BadRequest("new_password is required".to_string()));
        }
        if new_password != param.repeat_password.trim() {
            return Err(AuthError::PasswordsDoNotMatch.into());
        }

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_id(param.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(param.user_id))?;

        if !verify_password(param.old_password.trim(), &user.password_hash).await? {
            return Err(AuthError::IncorrectPassword.into());
        }

        repo.update_password(user.id, hash_password(new_password).await?)
            .await?;

        Ok(())
    }
}

/// Creates an account of the given role after checking the email is free.
///
/// Runs on any connection so teacher registration can include it in a transaction.
pub async fn insert_account<C: ConnectionTrait>(
    db: &C,
    param: RegisterParam,
    role: Role,
) -> Result<User, AppError> {
    let repo = UserRepository::new(db);

    if repo.email_taken(&param.email, None).await? {
        return Err(AuthError::EmailAlreadyExists.into());
    }

    repo.create(CreateUserParam {
        email: param.email,
        first_name: param.first_name,
        password_hash: hash_password(&param.password).await?,
        role,
    })
    .await
}
