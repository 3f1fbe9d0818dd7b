use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role string is not one of the known roles.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{0}' stored for user")]
    UnknownRole(String),

    /// Password hashing or stored hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// Row vanished between two statements of the same operation.
    #[error("{entity} {id} disappeared during update")]
    MissingRow {
        /// Entity name
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },

    /// A preview fan-out task panicked or was cancelled.
    #[error("Preview task failed: {0}")]
    PreviewTask(String),
}
