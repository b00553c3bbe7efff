//! Builder pattern for document conversion.
//!
//! Provides a fluent API for configuring and running a conversion.
//!
//! # Example
//! ```ignore
//! use layerscene_core::api::ConverterBuilder;
//!
//! let doc = ConverterBuilder::new("letterhead.layers.json")
//!     .output("letterhead.json")
//!     .emit_groups(true)
//!     .convert()?;
//! ```

use std::path::{Path, PathBuf};

use crate::document::{DocumentDecoder, ManifestDecoder};
use crate::error::Result;
use crate::output::{OutputDocument, to_json_string};

use super::high_level::{ConvertConfig, ConvertOptions, convert_file_with};

/// A builder for configuring a conversion.
///
/// Wraps [`ConvertConfig`] and the decoder used to open the input.
pub struct ConverterBuilder {
    config: ConvertConfig,
    decoder: Box<dyn DocumentDecoder>,
}

impl ConverterBuilder {
    /// Creates a builder for the given input document.
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            config: ConvertConfig::new(source.as_ref()),
            decoder: Box::new(ManifestDecoder),
        }
    }

    /// Write the JSON document to `path` when converting.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = Some(path.into());
        self
    }

    /// Sets whether the JSON output is indented (default: true).
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.config.options.pretty = enabled;
        self
    }

    /// Sets whether groups get their own flat marker node (default: false).
    pub fn emit_groups(mut self, enabled: bool) -> Self {
        self.config.options.emit_groups = enabled;
        self
    }

    /// Replaces all conversion options at once.
    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.config.options = options;
        self
    }

    /// Decode the input with `decoder` instead of the manifest decoder.
    pub fn decoder(mut self, decoder: impl DocumentDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// The configuration this builder has accumulated.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert, writing the output file if one was set.
    ///
    /// # Errors
    /// Returns an error if the input cannot be decoded or the output cannot
    /// be serialized or written.
    pub fn convert(self) -> Result<OutputDocument> {
        convert_file_with(&self.config, self.decoder.as_ref())
    }

    /// Convert and return the serialized JSON.
    pub fn convert_to_string(self) -> Result<String> {
        let pretty = self.config.options.pretty;
        let doc = self.convert()?;
        to_json_string(&doc, pretty)
    }
}
