//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names follow the JSON contract used by the school's web client, so several
//! structs keep names such as `sections_id` or `dz` exactly as the client expects them.

pub mod api;
pub mod chat;
pub mod course;
pub mod teacher;
pub mod user;
