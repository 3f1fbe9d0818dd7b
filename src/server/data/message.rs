//! Chat message repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        auth::Role,
        chat::{CreateMessageParam, Message},
    },
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an unread message to a chat.
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, AppError> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            text: ActiveValue::Set(param.text),
            role: ActiveValue::Set(param.role.to_string()),
            first_name: ActiveValue::Set(param.first_name),
            not_read: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Message::from_entity(entity)
    }

    /// Messages of a chat, oldest first.
    pub async fn get_by_chat(&self, chat_id: i32) -> Result<Vec<Message>, AppError> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect()
    }

    pub async fn newest(&self, chat_id: i32) -> Result<Option<Message>, AppError> {
        let entity = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .one(self.db)
            .await?;

        entity.map(Message::from_entity).transpose()
    }

    /// Marks messages sent by any of `roles` in a chat as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages that were unread
    pub async fn mark_read(&self, chat_id: i32, roles: &[Role]) -> Result<u64, AppError> {
        let roles: Vec<&str> = roles.iter().map(Role::as_str).collect();

        let result = entity::prelude::Message::update_many()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .filter(entity::message::Column::Role.is_in(roles))
            .filter(entity::message::Column::NotRead.eq(true))
            .col_expr(entity::message::Column::NotRead, Expr::value(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_chats(&self, chat_ids: Vec<i32>) -> Result<u64, AppError> {
        if chat_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::ChatId.is_in(chat_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
