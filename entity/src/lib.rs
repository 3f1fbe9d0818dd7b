//! SeaORM entities for the school database schema.
//!
//! Each module mirrors one table created by the `migration` crate. Entities are used by the
//! repository layer only; the server converts them into domain models at that boundary.

pub mod prelude;

pub mod chat;
pub mod course;
pub mod lesson;
pub mod lesson_carousel;
pub mod level;
pub mod message;
pub mod recovery_code;
pub mod request_log;
pub mod section;
pub mod section_teacher;
pub mod teacher_info;
pub mod user;
