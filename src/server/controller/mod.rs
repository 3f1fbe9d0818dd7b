//! HTTP request handlers.
//!
//! Handlers check access with `AuthGuard`, convert DTOs into domain parameters, call a
//! service and map the result back to DTOs. Every handler is documented with
//! `#[utoipa::path]` and collected into the OpenAPI document by the router.

pub mod chat;
pub mod course;
pub mod health;
pub mod lesson;
pub mod level;
pub mod recovery;
pub mod section;
pub mod teacher;
pub mod user;
pub mod vk;

#[cfg(test)]
mod test;
