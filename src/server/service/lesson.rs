//! Lessons and their order within a level.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{carousel::CarouselRepository, lesson::LessonRepository, level::LevelRepository},
    error::AppError,
    model::{
        carousel::LessonCarousel,
        lesson::{Lesson, LessonContentParam, LessonPath, LessonWithNavigation},
        level::LevelPath,
    },
    service::catalog::delete_lessons,
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a lesson with the ids of its neighbours in the level carousel.
    ///
    /// # Returns
    /// - `Ok(None)` - No lesson at that path
    pub async fn get(&self, path: LessonPath) -> Result<Option<LessonWithNavigation>, AppError> {
        let Some(lesson) = LessonRepository::new(self.db).find(path).await? else {
            return Ok(None);
        };

        let carousel = CarouselRepository::new(self.db)
            .find(path.level_id)
            .await?;

        Ok(Some(LessonWithNavigation::new(lesson, carousel.as_ref())))
    }

    pub async fn exists(&self, path: LessonPath) -> Result<bool, AppError> {
        Ok(LessonRepository::new(self.db).find(path).await?.is_some())
    }

    /// Lessons of a level in carousel order.
    ///
    /// # Returns
    /// - `Ok(None)` - Level not found at that path
    pub async fn get_all(&self, level: LevelPath) -> Result<Option<Vec<Lesson>>, AppError> {
        if LevelRepository::new(self.db).find(level).await?.is_none() {
            return Ok(None);
        }

        let lessons = LessonRepository::new(self.db).get_by_level(level).await?;
        let carousel = CarouselRepository::new(self.db)
            .find(level.level_id)
            .await?
            .unwrap_or_else(|| LessonCarousel::new(level));

        Ok(Some(carousel.order(lessons)))
    }

    /// Creates a lesson and appends it to the level carousel.
    ///
    /// # Returns
    /// - `Ok(None)` - Level not found at that path
    pub async fn create(
        &self,
        level: LevelPath,
        content: LessonContentParam,
    ) -> Result<Option<Lesson>, AppError> {
        if LevelRepository::new(self.db).find(level).await?.is_none() {
            return Ok(None);
        }

        let txn = self.db.begin().await?;

        let lesson = LessonRepository::new(&txn).create(level, content).await?;

        let carousels = CarouselRepository::new(&txn);
        let mut carousel = carousels
            .find(level.level_id)
            .await?
            .unwrap_or_else(|| LessonCarousel::new(level));
        carousel.push(lesson.id);
        carousels.save(&carousel).await?;

        txn.commit().await?;

        Ok(Some(lesson))
    }

    pub async fn update(
        &self,
        path: LessonPath,
        content: LessonContentParam,
    ) -> Result<Option<Lesson>, AppError> {
        Ok(LessonRepository::new(self.db).update(path, content).await?)
    }

    /// Deletes a lesson with its chats and removes it from the carousel.
    ///
    /// # Returns
    /// - `Ok(false)` - No lesson at that path
    pub async fn delete(&self, path: LessonPath) -> Result<bool, AppError> {
        if !self.exists(path).await? {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        delete_lessons(&txn, vec![path.lesson_id]).await?;

        let carousels = CarouselRepository::new(&txn);
        if let Some(mut carousel) = carousels.find(path.level_id).await? {
            carousel.remove(path.lesson_id);
            carousels.save(&carousel).await?;
        }

        txn.commit().await?;

        Ok(true)
    }
}
