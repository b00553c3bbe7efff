//! JSON serialization of the interchange document.

use std::io::Write;

use super::schema::OutputDocument;
use crate::error::{Result, SceneError};

fn map_json_error(e: serde_json::Error) -> SceneError {
    if e.is_io() {
        SceneError::Io(e.into())
    } else {
        SceneError::Serialization(e.to_string())
    }
}

/// Serialize to a JSON string, two-space indented when `pretty`.
///
/// Fails with `SceneError::Serialization` when a node carries a value with
/// no primitive representation.
pub fn to_json_string(doc: &OutputDocument, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    out.map_err(map_json_error)
}

/// Serialize into a writer.
///
/// Nothing is buffered here; pass a `BufWriter` for files. Callers that must
/// not leave partial output behind should serialize with [`to_json_string`]
/// first.
pub fn to_writer<W: Write>(writer: W, doc: &OutputDocument, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_writer_pretty(writer, doc)
    } else {
        serde_json::to_writer(writer, doc)
    };
    out.map_err(map_json_error)
}
