//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take parent ids explicitly so the course
//! hierarchy can be assembled in any shape a test needs.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::create_user(&db).await?;
//!     let (teacher, info) = factory::create_teacher(&db).await?;
//!
//!     // Create a lesson with its whole parent chain
//!     let (course, section, level, lesson) =
//!         factory::helpers::create_lesson_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("anna@example.com")
//!     .first_name("Anna")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users of any role
//! - `teacher` - Teacher users with their `teacher_info` row
//! - `course`, `section`, `level`, `lesson` - The course hierarchy and level carousels
//! - `chat` - Lesson chats and their messages
//! - `helpers` - Id generation and multi-entity shortcuts

pub mod chat;
pub mod course;
pub mod helpers;
pub mod lesson;
pub mod level;
pub mod section;
pub mod teacher;
pub mod user;

pub use chat::{create_chat, create_message};
pub use course::create_course;
pub use lesson::{create_carousel, create_lesson};
pub use level::create_level;
pub use section::{assign_teacher, create_section};
pub use teacher::create_teacher;
pub use user::create_user;
