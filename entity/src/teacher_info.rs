use sea_orm::entity::prelude::*;

/// Aggregated feedback and response metrics for a teacher, keyed by the teacher's user id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub good: i32,
    pub improve: i32,
    pub ahtung: i32,
    pub answer_time_seconds: i64,
    pub answer_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
