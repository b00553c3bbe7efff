//! Error types for the layerscene conversion library.

use thiserror::Error;

/// Primary error type for document conversion.
///
/// Only failures that abort a whole conversion live here. Per-layer color
/// lookups that come up empty or read a broken record are recovered inside
/// the scene builder (see [`ColorReadError`]).
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("document parse error: {0}")]
    DocumentParse(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal error raised while reading a color record off a layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorReadError {
    #[error("color record has {0} components, expected at least 3")]
    Arity(usize),

    #[error("color component {index} is not numeric (got {got})")]
    NotNumeric { index: usize, got: &'static str },

    #[error("color record is missing channel {0:?}")]
    MissingChannel(&'static str),

    #[error("color record has no component list")]
    MissingValues,

    #[error("{components}-component {space} color cannot be read as RGB or LAB")]
    UnsupportedSpace { space: String, components: usize },
}

/// Convenience Result type alias for SceneError.
pub type Result<T> = std::result::Result<T, SceneError>;
