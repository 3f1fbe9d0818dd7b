//! Lesson carousel repository.
//!
//! One row per level holding the ordered lesson ids as JSON. The row is created with the
//! first lesson of a level and removed once its last lesson is deleted.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::carousel::LessonCarousel;

pub struct CarouselRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarouselRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(&self, level_id: i32) -> Result<Option<LessonCarousel>, DbErr> {
        let entity = entity::prelude::LessonCarousel::find_by_id(level_id)
            .one(self.db)
            .await?;

        Ok(entity.map(LessonCarousel::from_entity))
    }

    /// Stores a carousel, replacing the lesson order of an existing row.
    ///
    /// An empty carousel deletes the row instead.
    pub async fn save(&self, carousel: &LessonCarousel) -> Result<(), DbErr> {
        let level_id = carousel.level.level_id;

        if carousel.is_empty() {
            self.delete_by_levels(vec![level_id]).await?;
            return Ok(());
        }

        let existing = entity::prelude::LessonCarousel::find_by_id(level_id)
            .one(self.db)
            .await?;

        match existing {
            Some(entity) => {
                let mut active = entity.into_active_model();
                active.lesson_ids = ActiveValue::Set(carousel.to_stored());
                active.update(self.db).await?;
            }
            None => {
                entity::lesson_carousel::ActiveModel {
                    level_id: ActiveValue::Set(level_id),
                    course_id: ActiveValue::Set(carousel.level.course_id),
                    section_id: ActiveValue::Set(carousel.level.section_id),
                    lesson_ids: ActiveValue::Set(carousel.to_stored()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    pub async fn delete_by_levels(&self, level_ids: Vec<i32>) -> Result<u64, DbErr> {
        if level_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LessonCarousel::delete_many()
            .filter(entity::lesson_carousel::Column::LevelId.is_in(level_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
