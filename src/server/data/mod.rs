//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same repository can run against
//! the pooled connection or inside a transaction opened by a service.

pub mod carousel;
pub mod chat;
pub mod course;
pub mod lesson;
pub mod level;
pub mod message;
pub mod recovery_code;
pub mod request_log;
pub mod section;
pub mod section_teacher;
pub mod teacher_info;
pub mod user;

#[cfg(test)]
mod test;
