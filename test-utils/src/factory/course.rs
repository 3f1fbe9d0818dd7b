//! Course factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    cost: i32,
    sale: i32,
    total_price: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory.
    ///
    /// Defaults: name `"Course {id}"`, cost `1000`, no sale, total price `1000`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Course {}", next_id()),
            cost: 1000,
            sale: 0,
            total_price: 1000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the cost and resets the total price to the same value.
    pub fn cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self.total_price = cost;
        self
    }

    pub fn sale(mut self, sale: i32, total_price: i32) -> Self {
        self.sale = sale;
        self.total_price = total_price;
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            cost: ActiveValue::Set(self.cost),
            sale: ActiveValue::Set(self.sale),
            total_price: ActiveValue::Set(self.total_price),
            users: ActiveValue::Set(0),
            homework_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
