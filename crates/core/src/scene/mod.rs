//! Scene graph construction - resolved, ordered nodes built from a layer tree.
//!
//! - `builder` - depth-first walk and color resolution (SceneBuilder)
//! - `node` - scene graph node type (SceneNode)
//! - `sources` - prioritized color sources and record parsing

pub mod builder;
pub mod node;
pub mod sources;

pub use builder::{BuildStats, ResolvedColor, SceneBuilder, build};
pub use node::{EDITABLE_TEXT_TAG, SceneNode, type_tag};
pub use sources::{ColorSource, FILL_SOURCES, NamedColor, STROKE_SOURCES, read_triplet};
