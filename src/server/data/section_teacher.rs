//! Teacher to section assignments.
//!
//! A teacher only sees and answers chats of the sections assigned to them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct SectionTeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionTeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a teacher to a section; assigning twice is a no-op.
    pub async fn assign(&self, section_id: i32, teacher_id: i32) -> Result<(), DbErr> {
        if self.is_assigned(section_id, teacher_id).await? {
            return Ok(());
        }

        entity::section_teacher::ActiveModel {
            section_id: ActiveValue::Set(section_id),
            teacher_id: ActiveValue::Set(teacher_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn unassign(&self, section_id: i32, teacher_id: i32) -> Result<(), DbErr> {
        entity::prelude::SectionTeacher::delete_by_id((section_id, teacher_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_assigned(&self, section_id: i32, teacher_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::SectionTeacher::find_by_id((section_id, teacher_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Sections assigned to a teacher, ordered by id.
    pub async fn get_section_ids(&self, teacher_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::SectionTeacher::find()
            .filter(entity::section_teacher::Column::TeacherId.eq(teacher_id))
            .order_by_asc(entity::section_teacher::Column::SectionId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|row| row.section_id).collect())
    }

    pub async fn delete_by_sections(&self, section_ids: Vec<i32>) -> Result<u64, DbErr> {
        if section_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::SectionTeacher::delete_many()
            .filter(entity::section_teacher::Column::SectionId.is_in(section_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SectionTeacher::delete_many()
            .filter(entity::section_teacher::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
