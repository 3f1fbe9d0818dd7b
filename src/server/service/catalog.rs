//! Course, section and level management.
//!
//! Deleting a node removes its whole subtree inside one transaction: sections, levels,
//! level carousels, lessons, lesson chats with their messages, and teacher assignments of
//! removed sections.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        carousel::CarouselRepository, chat::ChatRepository, course::CourseRepository,
        lesson::LessonRepository, level::LevelRepository, message::MessageRepository,
        section::SectionRepository, section_teacher::SectionTeacherRepository,
    },
    error::AppError,
    model::{
        course::{discounted_price, required_name, Course, CreateCourseParam, UpdateCourseParam},
        level::{Level, LevelPath},
        section::{Section, SectionPath},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course at full price.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty name or negative cost
    pub async fn create_course(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        let name = required_name(&param.name, "Course")?;
        require_cost(param.cost)?;

        let course = CourseRepository::new(self.db)
            .create(CreateCourseParam {
                name,
                cost: param.cost,
            })
            .await?;

        Ok(course)
    }

    pub async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    /// Updates name and pricing of a course.
    ///
    /// The sale is stored as an absolute percentage and the total price recomputed from it.
    ///
    /// # Returns
    /// - `Ok(None)` - No course with that id
    /// - `Err(AppError::BadRequest)` - Empty name, negative cost or sale above 100%
    pub async fn update_course(&self, param: UpdateCourseParam) -> Result<Option<Course>, AppError> {
        let name = required_name(&param.name, "Course")?;
        require_cost(param.cost)?;

        let sale = match param.sale.unsigned_abs() {
            sale @ 0..=100 => sale as i32,
            _ => return Err(AppError::BadRequest("sale must not exceed 100".to_string())),
        };

        let course = CourseRepository::new(self.db)
            .update(
                param.id,
                name,
                param.cost,
                sale,
                discounted_price(param.cost, sale),
            )
            .await?;

        Ok(course)
    }

    /// Deletes a course with its whole subtree.
    ///
    /// # Returns
    /// - `Ok(false)` - No course with that id
    pub async fn delete_course(&self, id: i32) -> Result<bool, AppError> {
        if self.get_course(id).await?.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        let section_ids = SectionRepository::new(&txn)
            .get_by_course(id)
            .await?
            .into_iter()
            .map(|section| section.id)
            .collect();
        delete_sections(&txn, section_ids).await?;
        let deleted = CourseRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    /// Creates a section in a course.
    ///
    /// # Returns
    /// - `Ok(None)` - No course with that id
    pub async fn create_section(
        &self,
        course_id: i32,
        name: &str,
    ) -> Result<Option<Section>, AppError> {
        let name = required_name(name, "Section")?;

        if self.get_course(course_id).await?.is_none() {
            return Ok(None);
        }

        let section = SectionRepository::new(self.db)
            .create(course_id, name)
            .await?;

        Ok(Some(section))
    }

    pub async fn get_section(&self, path: SectionPath) -> Result<Option<Section>, AppError> {
        Ok(SectionRepository::new(self.db).find(path).await?)
    }

    /// Sections of a course.
    ///
    /// # Returns
    /// - `Ok(None)` - No course with that id
    pub async fn get_sections(&self, course_id: i32) -> Result<Option<Vec<Section>>, AppError> {
        if self.get_course(course_id).await?.is_none() {
            return Ok(None);
        }

        let sections = SectionRepository::new(self.db)
            .get_by_course(course_id)
            .await?;

        Ok(Some(sections))
    }

    pub async fn rename_section(
        &self,
        path: SectionPath,
        name: &str,
    ) -> Result<Option<Section>, AppError> {
        let name = required_name(name, "Section")?;

        Ok(SectionRepository::new(self.db).rename(path, name).await?)
    }

    pub async fn delete_section(&self, path: SectionPath) -> Result<bool, AppError> {
        if self.get_section(path).await?.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;
        delete_sections(&txn, vec![path.section_id]).await?;
        txn.commit().await?;

        Ok(true)
    }

    /// Creates a level in a section.
    ///
    /// # Returns
    /// - `Ok(None)` - Section not found in that course
    pub async fn create_level(
        &self,
        section: SectionPath,
        name: &str,
    ) -> Result<Option<Level>, AppError> {
        let name = required_name(name, "Level")?;

        if self.get_section(section).await?.is_none() {
            return Ok(None);
        }

        let level = LevelRepository::new(self.db).create(section, name).await?;

        Ok(Some(level))
    }

    pub async fn get_level(&self, path: LevelPath) -> Result<Option<Level>, AppError> {
        Ok(LevelRepository::new(self.db).find(path).await?)
    }

    /// Levels of a section.
    ///
    /// # Returns
    /// - `Ok(None)` - Section not found in that course
    pub async fn get_levels(&self, section: SectionPath) -> Result<Option<Vec<Level>>, AppError> {
        if self.get_section(section).await?.is_none() {
            return Ok(None);
        }

        let levels = LevelRepository::new(self.db)
            .get_by_section(section)
            .await?;

        Ok(Some(levels))
    }

    pub async fn rename_level(&self, path: LevelPath, name: &str) -> Result<Option<Level>, AppError> {
        let name = required_name(name, "Level")?;

        Ok(LevelRepository::new(self.db).rename(path, name).await?)
    }

    pub async fn delete_level(&self, path: LevelPath) -> Result<bool, AppError> {
        if self.get_level(path).await?.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;
        delete_levels(&txn, vec![path.level_id]).await?;
        txn.commit().await?;

        Ok(true)
    }
}

fn require_cost(cost: i32) -> Result<(), AppError> {
    if cost < 0 {
        return Err(AppError::BadRequest("cost must not be negative".to_string()));
    }
    Ok(())
}

/// Deletes lessons with their chats and messages.
///
/// Carousels are left to the caller.
pub(super) async fn delete_lessons<C: ConnectionTrait>(
    db: &C,
    lesson_ids: Vec<i32>,
) -> Result<(), AppError> {
    let chats = ChatRepository::new(db);
    let chat_ids = chats.get_ids_by_lessons(lesson_ids.clone()).await?;

    MessageRepository::new(db)
        .delete_by_chats(chat_ids.clone())
        .await?;
    chats.delete_by_ids(chat_ids).await?;
    LessonRepository::new(db).delete_by_ids(lesson_ids).await?;

    Ok(())
}

async fn delete_levels<C: ConnectionTrait>(db: &C, level_ids: Vec<i32>) -> Result<(), AppError> {
    let lesson_ids = LessonRepository::new(db)
        .get_ids_by_levels(level_ids.clone())
        .await?;

    delete_lessons(db, lesson_ids).await?;
    CarouselRepository::new(db)
        .delete_by_levels(level_ids.clone())
        .await?;
    LevelRepository::new(db).delete_by_ids(level_ids).await?;

    Ok(())
}

async fn delete_sections<C: ConnectionTrait>(
    db: &C,
    section_ids: Vec<i32>,
) -> Result<(), AppError> {
    let level_ids = LevelRepository::new(db)
        .get_ids_by_sections(section_ids.clone())
        .await?;

    delete_levels(db, level_ids).await?;
    SectionTeacherRepository::new(db)
        .delete_by_sections(section_ids.clone())
        .await?;
    SectionRepository::new(db).delete_by_ids(section_ids).await?;

    Ok(())
}
