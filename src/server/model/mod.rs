//! Domain models and operation parameters of the server layer.

pub mod auth;
pub mod carousel;
pub mod chat;
pub mod course;
pub mod lesson;
pub mod level;
pub mod preview;
pub mod recovery;
pub mod section;
pub mod teacher;
pub mod user;
