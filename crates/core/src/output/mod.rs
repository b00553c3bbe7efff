//! Interchange output - schema types, normalization and serialization.
//!
//! - `schema` - the flat document the canvas editor loads (OutputDocument)
//! - `normalize` - scene graph flattening and asset placeholders (Normalizer)
//! - `serialize` - JSON writing

pub mod normalize;
pub mod schema;
pub mod serialize;

pub use normalize::{
    AssetIdGenerator, NormalizeOptions, Normalizer, UuidAssetIds, layer_type, normalize,
};
pub use schema::{
    CropDetails, DEFAULT_BACKGROUND, LayerType, OUTPUT_DPI, OutputDocument, OutputNode,
    SizeDescriptor,
};
pub use serialize::{to_json_string, to_writer};
