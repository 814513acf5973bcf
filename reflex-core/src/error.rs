//! Error types for view construction and method dispatch.
//!
//! Binding itself is permissive: missing properties and malformed
//! directives are not errors. Only the surrounding plumbing can fail.

use thiserror::Error;

/// Errors produced by `reflex-core`.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured root selector matched no node.
    #[error("no node matches root selector `{selector}`")]
    RootNotFound { selector: String },

    /// The selector could not be parsed.
    #[error("unsupported selector `{selector}`")]
    InvalidSelector { selector: String },

    /// No method with this name was configured.
    #[error("unknown method `{name}`")]
    UnknownMethod { name: String },

    /// The configuration document could not be read.
    #[error("invalid view configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
