//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing accounts of every role. It handles
//! creation, lookups by id and email, credential and profile updates, and the time-on-site
//! counter, converting entity models to `User` domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{
        auth::Role,
        user::{CreateUserParam, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including unique email violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            role: ActiveValue::Set(param.role.to_string()),
            times_seconds: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or stored role unknown
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether an email is taken, optionally ignoring one user.
    ///
    /// # Arguments
    /// - `email` - Normalized email
    /// - `except_id` - User allowed to already own the email (profile updates)
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, AppError> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists users ordered by id, optionally restricted to one role.
    pub async fn get_all(&self, role: Option<Role>) -> Result<Vec<User>, AppError> {
        let mut query = entity::prelude::User::find().order_by_asc(entity::user::Column::Id);

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that id
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<bool, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active = entity.into_active_model();
        active.password_hash = ActiveValue::Set(password_hash);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Updates email and first name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_profile(
        &self,
        id: i32,
        email: String,
        first_name: String,
    ) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.email = ActiveValue::Set(email);
        active.first_name = ActiveValue::Set(first_name);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Adds seconds to the time-on-site counter.
    ///
    /// # Returns
    /// - `Err(AppError::Internal(MissingRow))` - The user no longer exists
    pub async fn add_time(&self, id: i32, seconds: i64) -> Result<(), AppError> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(InternalError::MissingRow { entity: "User", id })?;

        let times_seconds = entity.times_seconds + seconds;
        let mut active = entity.into_active_model();
        active.times_seconds = ActiveValue::Set(times_seconds);
        active.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
