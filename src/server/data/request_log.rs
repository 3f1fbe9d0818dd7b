//! Request log used for time-on-site accounting.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct RequestLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RequestLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        request_url: String,
        created_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::request_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            request_url: ActiveValue::Set(request_url),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Time of the user's most recent logged request.
    pub async fn latest_for_user(&self, user_id: i32) -> Result<Option<DateTime<Utc>>, DbErr> {
        let entity = entity::prelude::RequestLog::find()
            .filter(entity::request_log::Column::UserId.eq(user_id))
            .order_by_desc(entity::request_log::Column::CreatedAt)
            .order_by_desc(entity::request_log::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|row| row.created_at))
    }
}
