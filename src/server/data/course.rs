//! Course data repository.
//!
//! Provides the `CourseRepository` for the top of the catalog hierarchy: course CRUD, the
//! admin listing and the homework counter bumped when a chat is rated for the first time.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::course::{Course, CreateCourseParam};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a course at full price.
    ///
    /// # Returns
    /// - `Ok(Course)` - Created course with `sale = 0` and `total_price = cost`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let now = Utc::now();
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(param.name),
            cost: ActiveValue::Set(param.cost),
            sale: ActiveValue::Set(0),
            total_price: ActiveValue::Set(param.cost),
            users: ActiveValue::Set(0),
            homework_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Lists all courses ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Writes name and pricing of a course.
    ///
    /// # Arguments
    /// - `id` - Course to update
    /// - `name`, `cost`, `sale`, `total_price` - Already validated and computed values
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Updated course
    /// - `Ok(None)` - No course with that id
    pub async fn update(
        &self,
        id: i32,
        name: String,
        cost: i32,
        sale: i32,
        total_price: i32,
    ) -> Result<Option<Course>, DbErr> {
        let Some(entity) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(name);
        active.cost = ActiveValue::Set(cost);
        active.sale = ActiveValue::Set(sale);
        active.total_price = ActiveValue::Set(total_price);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Course::from_entity(entity)))
    }

    /// Increments the number of rated homeworks of a course.
    ///
    /// Does nothing when the course no longer exists.
    pub async fn increment_homework(&self, id: i32) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let homework_count = entity.homework_count + 1;
        let mut active = entity.into_active_model();
        active.homework_count = ActiveValue::Set(homework_count);
        active.update(self.db).await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - No course with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
