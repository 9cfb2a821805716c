//! Error types for the relay.

use thiserror::Error;

/// Configuration-related errors.
///
/// Fatal at construction: a relay must not start with a broken channel
/// mapping or missing credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Failure to resolve an id referenced inside a message body.
///
/// Affects only the message carrying the reference; the relay keeps
/// running and the message is dropped with a log record.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Unknown channel id '{id}' referenced in message")]
    Channel { id: String },

    #[error("Unknown user id '{id}' referenced in message")]
    User { id: String },
}
