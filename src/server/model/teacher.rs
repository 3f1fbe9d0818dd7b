//! Teacher metrics.

use crate::model::teacher::TeacherFullInfoDto;

/// Feedback counters and response time totals of a teacher.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeacherInfo {
    pub user_id: i32,
    pub good: i32,
    pub improve: i32,
    pub ahtung: i32,
    pub answer_time_seconds: i64,
    pub answer_count: i32,
}

impl TeacherInfo {
    pub fn from_entity(entity: entity::teacher_info::Model) -> Self {
        Self {
            user_id: entity.user_id,
            good: entity.good,
            improve: entity.improve,
            ahtung: entity.ahtung,
            answer_time_seconds: entity.answer_time_seconds,
            answer_count: entity.answer_count,
        }
    }

    /// Mean answer time in whole minutes, 0 before the first answer.
    pub fn average_answer_minutes(&self) -> i64 {
        if self.answer_count > 0 {
            self.answer_time_seconds / i64::from(self.answer_count) / 60
        } else {
            0
        }
    }
}

/// Teacher user joined with its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherProfile {
    pub id: i32,
    pub first_name: String,
    pub times_seconds: i64,
    pub info: TeacherInfo,
}

impl TeacherProfile {
    pub fn into_dto(self) -> TeacherFullInfoDto {
        TeacherFullInfoDto {
            id: self.id,
            first_name: self.first_name,
            good: self.info.good,
            improve: self.info.improve,
            ahtung: self.info.ahtung,
            times: self.times_seconds / 3600,
            average_time: self.info.average_answer_minutes(),
        }
    }
}

/// Counter incremented by teacher actions on chats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherCounter {
    Good,
    Improve,
    Ahtung,
}

/// Parameters for updating a teacher's profile.
#[derive(Debug, Clone)]
pub struct UpdateTeacherParam {
    pub id: i32,
    pub email: String,
    pub first_name: String,
}
