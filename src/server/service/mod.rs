//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling complex multi-step operations
//!
//! Outgoing integrations (SMTP, Telegram alerts, VK) live here as well so controllers never
//! talk to a remote service directly.

pub mod account;
pub mod activity;
pub mod alert;
pub mod catalog;
pub mod chat;
pub mod lesson;
pub mod mail;
pub mod preview;
pub mod recovery;
pub mod teacher;
pub mod video;
pub mod vk;

#[cfg(test)]
mod test;
