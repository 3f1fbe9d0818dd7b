//! Lesson data repository.
//!
//! Lessons are always addressed through their full course/section/level path so a lesson
//! id that does not belong to the requested level is treated as missing.

use chrono::Utc;
use entity::lesson::Thesis;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    lesson::{Lesson, LessonContentParam, LessonPath},
    level::LevelPath,
};

pub struct LessonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a lesson inside a level.
    ///
    /// # Arguments
    /// - `level` - Path of the parent level
    /// - `content` - Validated lesson content
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, level: LevelPath, content: LessonContentParam) -> Result<Lesson, DbErr> {
        let entity = entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(level.course_id),
            section_id: ActiveValue::Set(level.section_id),
            level_id: ActiveValue::Set(level.level_id),
            name: ActiveValue::Set(content.name),
            description: ActiveValue::Set(content.description),
            thesis: ActiveValue::Set(Thesis(content.thesis)),
            task: ActiveValue::Set(content.task),
            status_free: ActiveValue::Set(content.status_free),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Finds a lesson whose course, section and level all match the path.
    ///
    /// # Returns
    /// - `Ok(Some(Lesson))` - Lesson found at that path
    /// - `Ok(None)` - No lesson at that path
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, path: LessonPath) -> Result<Option<Lesson>, DbErr> {
        let entity = self.find_entity(path).await?;

        Ok(entity.map(Lesson::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lesson>, DbErr> {
        let entity = entity::prelude::Lesson::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Lists the lessons of a level ordered by id.
    pub async fn get_by_level(&self, level: LevelPath) -> Result<Vec<Lesson>, DbErr> {
        let entities = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.eq(level.course_id))
            .filter(entity::lesson::Column::SectionId.eq(level.section_id))
            .filter(entity::lesson::Column::LevelId.eq(level.level_id))
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }

    /// Ids of all lessons below the given levels.
    pub async fn get_ids_by_levels(&self, level_ids: Vec<i32>) -> Result<Vec<i32>, DbErr> {
        if level_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::LevelId.is_in(level_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|lesson| lesson.id).collect())
    }

    /// Replaces the content of a lesson at a path.
    ///
    /// # Returns
    /// - `Ok(None)` - No lesson at that path
    pub async fn update(
        &self,
        path: LessonPath,
        content: LessonContentParam,
    ) -> Result<Option<Lesson>, DbErr> {
        let Some(entity) = self.find_entity(path).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(content.name);
        active.description = ActiveValue::Set(content.description);
        active.thesis = ActiveValue::Set(Thesis(content.thesis));
        active.task = ActiveValue::Set(content.task);
        active.status_free = ActiveValue::Set(content.status_free);
        let entity = active.update(self.db).await?;

        Ok(Some(Lesson::from_entity(entity)))
    }

    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Lesson::delete_many()
            .filter(entity::lesson::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_entity(&self, path: LessonPath) -> Result<Option<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find_by_id(path.lesson_id)
            .filter(entity::lesson::Column::CourseId.eq(path.course_id))
            .filter(entity::lesson::Column::SectionId.eq(path.section_id))
            .filter(entity::lesson::Column::LevelId.eq(path.level_id))
            .one(self.db)
            .await
    }
}
