use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered lesson ids of a level, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LessonIds(pub Vec<i32>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_carousel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub level_id: i32,
    pub course_id: i32,
    pub section_id: i32,
    #[sea_orm(column_type = "Json")]
    pub lesson_ids: LessonIds,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
