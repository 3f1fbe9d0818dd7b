//! Chat data repository.
//!
//! Provides the `ChatRepository` for lesson chats. A student has at most one chat per lesson;
//! teachers reach chats through the sections assigned to them.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        chat::{Chat, Rating},
        lesson::LessonPath,
    },
};

pub struct ChatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a chat for a student on a lesson.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat without rating or escalation
    /// - `Err(AppError::DbErr)` - Database error, including an existing chat for the pair
    pub async fn create(&self, path: LessonPath, student_id: i32) -> Result<Chat, AppError> {
        let entity = entity::chat::ActiveModel {
            course_id: ActiveValue::Set(path.course_id),
            section_id: ActiveValue::Set(path.section_id),
            level_id: ActiveValue::Set(path.level_id),
            lesson_id: ActiveValue::Set(path.lesson_id),
            student_id: ActiveValue::Set(student_id),
            ahtung: ActiveValue::Set(false),
            ahtung_teacher_id: ActiveValue::Set(None),
            rating: ActiveValue::Set(None),
            rating_teacher_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Chat::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chat>, AppError> {
        let entity = entity::prelude::Chat::find_by_id(id).one(self.db).await?;

        entity.map(Chat::from_entity).transpose()
    }

    /// Finds the chat of a student on a lesson.
    pub async fn find_by_lesson_and_student(
        &self,
        lesson_id: i32,
        student_id: i32,
    ) -> Result<Option<Chat>, AppError> {
        let entity = entity::prelude::Chat::find()
            .filter(entity::chat::Column::LessonId.eq(lesson_id))
            .filter(entity::chat::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        entity.map(Chat::from_entity).transpose()
    }

    /// Chats of a student ordered by id.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Chat>, AppError> {
        entity::prelude::Chat::find()
            .filter(entity::chat::Column::StudentId.eq(student_id))
            .order_by_asc(entity::chat::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Chat::from_entity)
            .collect()
    }

    /// Chats in any of the given sections ordered by id.
    pub async fn get_by_sections(&self, section_ids: Vec<i32>) -> Result<Vec<Chat>, AppError> {
        if section_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Chat::find()
            .filter(entity::chat::Column::SectionId.is_in(section_ids))
            .order_by_asc(entity::chat::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Chat::from_entity)
            .collect()
    }

    /// Sets the escalation flag and the teacher who raised it.
    ///
    /// # Returns
    /// - `Ok(None)` - Chat not found
    pub async fn set_ahtung(
        &self,
        id: i32,
        ahtung: bool,
        teacher_id: Option<i32>,
    ) -> Result<Option<Chat>, AppError> {
        let Some(entity) = entity::prelude::Chat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.ahtung = ActiveValue::Set(ahtung);
        active.ahtung_teacher_id = ActiveValue::Set(teacher_id);
        let entity = active.update(self.db).await?;

        Chat::from_entity(entity).map(Some)
    }

    /// Rates a chat that has no rating yet.
    ///
    /// # Returns
    /// - `Ok(false)` - Chat not found or already rated, nothing changed
    pub async fn rate_unrated(
        &self,
        id: i32,
        rating: Rating,
        teacher_id: i32,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Chat::update_many()
            .col_expr(
                entity::chat::Column::Rating,
                Expr::value(Some(rating.as_str().to_string())),
            )
            .col_expr(entity::chat::Column::RatingTeacherId, Expr::value(Some(teacher_id)))
            .filter(entity::chat::Column::Id.eq(id))
            .filter(entity::chat::Column::Rating.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Records a rating and the teacher who gave it.
    pub async fn set_rating(
        &self,
        id: i32,
        rating: Rating,
        teacher_id: i32,
    ) -> Result<Option<Chat>, AppError> {
        let Some(entity) = entity::prelude::Chat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.rating = ActiveValue::Set(Some(rating.as_str().to_string()));
        active.rating_teacher_id = ActiveValue::Set(Some(teacher_id));
        let entity = active.update(self.db).await?;

        Chat::from_entity(entity).map(Some)
    }

    /// Ids of all chats on the given lessons.
    pub async fn get_ids_by_lessons(&self, lesson_ids: Vec<i32>) -> Result<Vec<i32>, AppError> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Chat::find()
            .filter(entity::chat::Column::LessonId.is_in(lesson_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|chat| chat.id).collect())
    }

    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Chat::delete_many()
            .filter(entity::chat::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
