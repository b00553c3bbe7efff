//! High-level conversion API.
//!
//! Provides the main public entry points:
//! - `convert_document()` - convert an opened document
//! - `convert_bytes()` - decode and convert in-memory document data
//! - `convert_file()` - read, convert and optionally write a document

use std::path::PathBuf;

use crate::color::resolve_hex;
use crate::document::{DocumentDecoder, DocumentHandle, ManifestDecoder, open_with};
use crate::error::Result;
use crate::output::{NormalizeOptions, Normalizer, OutputDocument, to_json_string};
use crate::scene::SceneBuilder;

/// Options for document conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Two-space indented JSON output.
    pub pretty: bool,

    /// Emit a flat `Group` node ahead of each group's descendants.
    pub emit_groups: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            emit_groups: false,
        }
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Document to read.
    pub input: PathBuf,

    /// Where to write the JSON document. None means the caller handles it.
    pub output: Option<PathBuf>,

    pub options: ConvertOptions,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            options: ConvertOptions::default(),
        }
    }
}

/// Convert an already-opened document.
///
/// Never fails: layers whose colors cannot be resolved are emitted without
/// them.
pub fn convert_document(doc: &DocumentHandle, options: &ConvertOptions) -> OutputDocument {
    let mut builder = SceneBuilder::new();
    let scene = builder.build(doc.tree());
    let stats = builder.stats();
    tracing::debug!(
        nodes = stats.nodes,
        lab_colors = stats.lab_colors,
        unresolved_fills = stats.unresolved_fills,
        read_errors = stats.read_errors,
        unknown_kinds = stats.unknown_kinds,
        "built scene graph"
    );

    let background = doc.background().map(|c| resolve_hex(c.components));
    let mut normalizer = Normalizer::new(NormalizeOptions {
        emit_groups: options.emit_groups,
    });
    let output = normalizer.normalize(&scene, doc.width(), doc.height(), background);

    tracing::info!(total = output.children.len(), "total objects in output");
    for (object_type, count) in output.type_counts() {
        tracing::info!(object_type, count, "object type");
    }

    output
}

/// Decode document data with the default decoder and convert it.
pub fn convert_bytes(data: &[u8], options: &ConvertOptions) -> Result<OutputDocument> {
    convert_bytes_with(data, &ManifestDecoder, options)
}

/// Decode document data with `decoder` and convert it.
pub fn convert_bytes_with(
    data: &[u8],
    decoder: &dyn DocumentDecoder,
    options: &ConvertOptions,
) -> Result<OutputDocument> {
    let doc = decoder.decode(data)?;
    Ok(convert_document(&doc, options))
}

/// Run a configured conversion with the default decoder.
///
/// The output file, if configured, is written only after the whole document
/// has been converted and serialized; a failing run leaves no file behind.
pub fn convert_file(config: &ConvertConfig) -> Result<OutputDocument> {
    convert_file_with(config, &ManifestDecoder)
}

/// Run a configured conversion with `decoder`.
pub fn convert_file_with(
    config: &ConvertConfig,
    decoder: &dyn DocumentDecoder,
) -> Result<OutputDocument> {
    let doc = open_with(&config.input, decoder)?;
    let output = convert_document(&doc, &config.options);

    if let Some(ref path) = config.output {
        let json = to_json_string(&output, config.options.pretty)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "saved JSON");
    }

    Ok(output)
}
