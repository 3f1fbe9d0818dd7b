//! Recovery code repository, one active code per email.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::recovery::RecoveryCode;

pub struct RecoveryCodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecoveryCodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a fresh code for the email, replacing any previous one.
    pub async fn replace(&self, email: &str, code: String) -> Result<RecoveryCode, DbErr> {
        self.delete(email).await?;

        let entity = entity::recovery_code::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(RecoveryCode::from_entity(entity))
    }

    pub async fn find(&self, email: &str) -> Result<Option<RecoveryCode>, DbErr> {
        let entity = entity::prelude::RecoveryCode::find_by_id(email.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(RecoveryCode::from_entity))
    }

    pub async fn delete(&self, email: &str) -> Result<(), DbErr> {
        entity::prelude::RecoveryCode::delete_by_id(email.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
