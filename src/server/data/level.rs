//! Level data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    level::{Level, LevelPath},
    section::SectionPath,
};

pub struct LevelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LevelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, section: SectionPath, name: String) -> Result<Level, DbErr> {
        let entity = entity::level::ActiveModel {
            course_id: ActiveValue::Set(section.course_id),
            section_id: ActiveValue::Set(section.section_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Level::from_entity(entity))
    }

    /// Finds a level only if course and section in the path match.
    pub async fn find(&self, path: LevelPath) -> Result<Option<Level>, DbErr> {
        let entity = entity::prelude::Level::find_by_id(path.level_id)
            .filter(entity::level::Column::CourseId.eq(path.course_id))
            .filter(entity::level::Column::SectionId.eq(path.section_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Level::from_entity))
    }

    pub async fn get_by_section(&self, section: SectionPath) -> Result<Vec<Level>, DbErr> {
        let entities = entity::prelude::Level::find()
            .filter(entity::level::Column::CourseId.eq(section.course_id))
            .filter(entity::level::Column::SectionId.eq(section.section_id))
            .order_by_asc(entity::level::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Level::from_entity).collect())
    }

    /// Ids of all levels below the given sections.
    pub async fn get_ids_by_sections(&self, section_ids: Vec<i32>) -> Result<Vec<i32>, DbErr> {
        if section_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Level::find()
            .filter(entity::level::Column::SectionId.is_in(section_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|level| level.id).collect())
    }

    pub async fn rename(&self, path: LevelPath, name: String) -> Result<Option<Level>, DbErr> {
        let Some(entity) = entity::prelude::Level::find_by_id(path.level_id)
            .filter(entity::level::Column::CourseId.eq(path.course_id))
            .filter(entity::level::Column::SectionId.eq(path.section_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(name);
        let entity = active.update(self.db).await?;

        Ok(Some(Level::from_entity(entity)))
    }

    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Level::delete_many()
            .filter(entity::level::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
