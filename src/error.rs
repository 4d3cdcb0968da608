// src/error.rs
//! Error types for the export pipeline

use thiserror::Error;

/// Errors that can occur while exporting datasources
#[derive(Error, Debug)]
pub enum Error {
    /// Connection, DNS or IO failure before a response was obtained
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a status other than 200
    #[error("HTTP error {0}")]
    UnexpectedStatus(u16),

    /// Malformed or schema-mismatched JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Failure producing the provisioning document
    #[error("Failed to encode provisioning document: {0}")]
    Encode(String),

    /// Output sink creation or write failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Client construction failure
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
