//! High-level API module for document conversion.
//!
//! # Example
//!
//! ```ignore
//! use layerscene_core::api::{ConvertOptions, convert_bytes};
//!
//! let data = std::fs::read("letterhead.layers.json")?;
//! let doc = convert_bytes(&data, &ConvertOptions::default())?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::ConverterBuilder;
pub use high_level::{
    ConvertConfig, ConvertOptions, convert_bytes, convert_bytes_with, convert_document,
    convert_file, convert_file_with,
};
