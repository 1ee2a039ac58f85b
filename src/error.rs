//! Error types for the outer surfaces of the crate.
//!
//! Capture and polling never fail: "nothing detected yet" is `None`, and
//! malformed device parameters degrade to defaults. Errors only come from
//! routing a description to an engine and from loading or saving profiles.

use thiserror::Error;

/// Errors raised while routing or persisting bindings.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The binding description has no `engine` entry.
    #[error("binding description has no engine")]
    MissingEngine,

    /// The `engine` entry names a backend this crate does not provide.
    #[error("unknown input engine: {0}")]
    UnknownEngine(String),

    /// A binding description could not be parsed from its text form.
    #[error("malformed binding parameter: {0}")]
    MalformedParam(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to encode TOML profile: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON profile error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BindingResult<T> = Result<T, BindingError>;
