//! Teacher metrics repository.
//!
//! Stores one `teacher_info` row per teacher with feedback counters and answer time totals,
//! and joins it with the user table to build teacher profiles.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{
        auth::Role,
        teacher::{TeacherCounter, TeacherInfo, TeacherProfile},
    },
};

pub struct TeacherInfoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherInfoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the zeroed metrics row for a teacher.
    pub async fn create(&self, user_id: i32) -> Result<TeacherInfo, AppError> {
        let entity = entity::teacher_info::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            good: ActiveValue::Set(0),
            improve: ActiveValue::Set(0),
            ahtung: ActiveValue::Set(0),
            answer_time_seconds: ActiveValue::Set(0),
            answer_count: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(TeacherInfo::from_entity(entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<TeacherInfo>, AppError> {
        let entity = entity::prelude::TeacherInfo::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(TeacherInfo::from_entity))
    }

    /// Finds a teacher user together with its metrics.
    ///
    /// A teacher without a metrics row is reported with zeroed metrics.
    ///
    /// # Returns
    /// - `Ok(None)` - No user with that id, or the user is not a teacher
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<TeacherProfile>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .filter(entity::user::Column::Role.eq(Role::Teacher.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let info = self
            .find_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| TeacherInfo {
                user_id,
                ..Default::default()
            });

        Ok(Some(TeacherProfile {
            id: user.id,
            first_name: user.first_name,
            times_seconds: user.times_seconds,
            info,
        }))
    }

    /// Lists every teacher with metrics, ordered by id.
    pub async fn get_all_profiles(&self) -> Result<Vec<TeacherProfile>, AppError> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Teacher.as_str()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
        let mut infos: HashMap<i32, TeacherInfo> = entity::prelude::TeacherInfo::find()
            .filter(entity::teacher_info::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.user_id, TeacherInfo::from_entity(entity)))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let info = infos.remove(&user.id).unwrap_or(TeacherInfo {
                    user_id: user.id,
                    ..Default::default()
                });

                TeacherProfile {
                    id: user.id,
                    first_name: user.first_name,
                    times_seconds: user.times_seconds,
                    info,
                }
            })
            .collect())
    }

    /// Increments one feedback counter.
    ///
    /// # Returns
    /// - `Err(AppError::Internal(MissingRow))` - The teacher has no metrics row
    pub async fn increment(&self, user_id: i32, counter: TeacherCounter) -> Result<(), AppError> {
        let entity = self.require(user_id).await?;

        let mut active = entity.clone().into_active_model();
        match counter {
            TeacherCounter::Good => active.good = ActiveValue::Set(entity.good + 1),
            TeacherCounter::Improve => active.improve = ActiveValue::Set(entity.improve + 1),
            TeacherCounter::Ahtung => active.ahtung = ActiveValue::Set(entity.ahtung + 1),
        }
        active.update(self.db).await?;

        Ok(())
    }

    /// Records one answer that took `seconds` after the student's message.
    pub async fn record_answer(&self, user_id: i32, seconds: i64) -> Result<(), AppError> {
        let entity = self.require(user_id).await?;

        let mut active = entity.clone().into_active_model();
        active.answer_time_seconds = ActiveValue::Set(entity.answer_time_seconds + seconds);
        active.answer_count = ActiveValue::Set(entity.answer_count + 1);
        active.update(self.db).await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        entity::prelude::TeacherInfo::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn require(&self, user_id: i32) -> Result<entity::teacher_info::Model, AppError> {
        let entity = entity::prelude::TeacherInfo::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(InternalError::MissingRow {
                entity: "TeacherInfo",
                id: user_id,
            })?;

        Ok(entity)
    }
}
