//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the school: API endpoints, business logic,
//! data access and infrastructure services. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and activity tracking
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, token keys, mailer)
//! - **Startup** (`startup`) - Database connection, HTTP client and tracing setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extract** (`extract`) - `Json`, `Path` and `Query` extractors rejecting with `AppError`
//! - **Util** (`util/`) - Token, password and code helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request; activity of signed-in users is recorded
//! 2. **Controller** checks the token with `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** executes business logic, opening a transaction for multi-row writes
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
