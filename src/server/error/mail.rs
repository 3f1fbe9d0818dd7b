use thiserror::Error;

/// Failures while composing or delivering email.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient address is malformed.
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled.
    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// SMTP relay rejected the message or was unreachable.
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Template file could not be read.
    #[error("Failed to read mail template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
