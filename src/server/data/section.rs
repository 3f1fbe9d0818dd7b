//! Section data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::section::{Section, SectionPath};

pub struct SectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, course_id: i32, name: String) -> Result<Section, DbErr> {
        let now = Utc::now();
        let entity = entity::section::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Section::from_entity(entity))
    }

    /// Finds a section only if it belongs to the course in the path.
    pub async fn find(&self, path: SectionPath) -> Result<Option<Section>, DbErr> {
        let entity = entity::prelude::Section::find_by_id(path.section_id)
            .filter(entity::section::Column::CourseId.eq(path.course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Section::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Section>, DbErr> {
        let entity = entity::prelude::Section::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Section::from_entity))
    }

    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Section>, DbErr> {
        let entities = entity::prelude::Section::find()
            .filter(entity::section::Column::CourseId.eq(course_id))
            .order_by_asc(entity::section::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Section::from_entity).collect())
    }

    /// Fetches sections by id, ordered by id; unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Section>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Section::find()
            .filter(entity::section::Column::Id.is_in(ids))
            .order_by_asc(entity::section::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Section::from_entity).collect())
    }

    /// Renames a section addressed by its path.
    ///
    /// # Returns
    /// - `Ok(None)` - Section not found in that course
    pub async fn rename(&self, path: SectionPath, name: String) -> Result<Option<Section>, DbErr> {
        let Some(entity) = entity::prelude::Section::find_by_id(path.section_id)
            .filter(entity::section::Column::CourseId.eq(path.course_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Section::from_entity(entity)))
    }

    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Section::delete_many()
            .filter(entity::section::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
