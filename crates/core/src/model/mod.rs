//! Layer model types - the read-only tree a decoder produces.
//!
//! - `attr` - dynamically typed attribute values (AttrValue)
//! - `color` - color records (ColorRecord, ColorValue, ColorSpace)
//! - `layer` - the layer tree (LayerNode, LayerKind, Bounds)

pub mod attr;
pub mod color;
pub mod layer;

// Re-export main types for convenience
pub use attr::AttrValue;
pub use color::{ColorRecord, ColorSpace, ColorValue};
pub use layer::{AssetRef, Bounds, Descendants, LayerKind, LayerNode, NamedColors};
