use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
    pub lesson_id: i32,
    pub student_id: i32,
    pub ahtung: bool,
    pub ahtung_teacher_id: Option<i32>,
    /// `good` or `improve` once a teacher rated the homework.
    pub rating: Option<String>,
    pub rating_teacher_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
