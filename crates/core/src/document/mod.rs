//! Document module - opening documents and exposing their layer tree.
//!
//! This module contains:
//! - `handle` - the decoded document (DocumentHandle)
//! - `manifest` - JSON layer manifest decoder (ManifestDecoder)
//!
//! The binary format itself is decoded outside this crate; anything that
//! turns bytes into a layer tree plugs in through [`DocumentDecoder`].

pub mod handle;
pub mod manifest;

use std::path::Path;

use crate::error::{Result, SceneError};

// Re-export main types for convenience
pub use handle::DocumentHandle;
pub use manifest::ManifestDecoder;

/// Turns raw document bytes into a layer tree.
///
/// Decoding is all-or-nothing: a corrupt or unreadable document yields
/// `SceneError::DocumentParse` and no handle.
pub trait DocumentDecoder {
    fn decode(&self, data: &[u8]) -> Result<DocumentHandle>;
}

/// Open a document with the default [`ManifestDecoder`].
///
/// # Example
/// ```ignore
/// use layerscene_core::document::open;
///
/// let doc = open("letterhead.layers.json")?;
/// println!("{} x {}", doc.width(), doc.height());
/// ```
pub fn open(path: impl AsRef<Path>) -> Result<DocumentHandle> {
    open_with(path, &ManifestDecoder)
}

/// Open a document with a specific decoder.
pub fn open_with(path: impl AsRef<Path>, decoder: &dyn DocumentDecoder) -> Result<DocumentHandle> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| SceneError::DocumentParse(format!("{}: {e}", path.display())))?;
    let doc = decoder.decode(&data)?;
    tracing::info!(
        path = %path.display(),
        width = doc.width(),
        height = doc.height(),
        "opened document"
    );
    Ok(doc)
}
