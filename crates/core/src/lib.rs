//! layerscene - converts layered design documents into a flat scene-graph
//! interchange document for canvas editors.
//!
//! Pipeline: decoder → [`document`] → [`scene`] (with [`color`]) →
//! [`output`].

pub mod api;
pub mod color;
pub mod document;
pub mod error;
pub mod model;
pub mod output;
pub mod scene;

// Re-export high_level for convenience
pub use api::high_level;

pub use error::{ColorReadError, Result, SceneError};
