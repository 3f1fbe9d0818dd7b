//! Stateless helpers shared by services and middleware.

pub mod code;
pub mod jwt;
pub mod password;
