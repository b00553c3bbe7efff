//! End-to-end conversion tests.

use std::fs;

use layerscene_core::SceneError;
use layerscene_core::api::{
    ConvertConfig, ConvertOptions, ConverterBuilder, convert_bytes, convert_document, convert_file,
};
use layerscene_core::document::DocumentHandle;
use layerscene_core::model::{LayerKind, LayerNode};
use serde_json::Value;

const LAB_SHAPE: &str = r#"{
    "width": 1080, "height": 1080,
    "layers": [{
        "id": "s1", "name": "Banner", "kind": "shape",
        "left": 0, "top": 0, "width": 1080, "height": 200,
        "attributes": {"FillColor": [0.8, 0.5, -0.2]}
    }]
}"#;

const GROUPED: &str = r#"{
    "width": 500, "height": 400,
    "background": {"values": [0, 0, 0]},
    "layers": [{
        "id": "g", "name": "Logo", "kind": "group",
        "children": [
            {"id": "a", "name": "Mark", "kind": "shape", "vectorFill": {"values": [1, 0, 0]}},
            {"id": "b", "name": "Ring", "kind": "shape", "stroke": {"values": [0, 0, 1]}}
        ]
    }]
}"#;

// ============================================================================
// In-memory conversion
// ============================================================================

#[test]
fn test_lab_fill_end_to_end() {
    let doc = convert_bytes(LAB_SHAPE.as_bytes(), &ConvertOptions::default()).unwrap();
    assert_eq!(doc.children.len(), 1);

    let node = &doc.children[0];
    assert_eq!(node.object_type, "path");
    assert_eq!(node.name, "Banner");
    assert_eq!(node.fill_hex.as_deref(), Some("#737e00"));
    assert_eq!(node.stroke_hex, None);
    assert_eq!(doc.sizes[0].name, "1080:1080");
}

#[test]
fn test_group_flattens_to_children() {
    let doc = convert_bytes(GROUPED.as_bytes(), &ConvertOptions::default()).unwrap();
    let ids: Vec<&str> = doc.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(doc.children[0].fill_hex.as_deref(), Some("#ff0000"));
    assert_eq!(doc.children[1].fill_hex, None);
    assert_eq!(doc.children[1].stroke_hex.as_deref(), Some("#0000ff"));
    assert_eq!(doc.background_color, "#000000");
}

#[test]
fn test_emit_groups_option() {
    let options = ConvertOptions {
        emit_groups: true,
        ..ConvertOptions::default()
    };
    let doc = convert_bytes(GROUPED.as_bytes(), &options).unwrap();
    let ids: Vec<&str> = doc.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["g", "a", "b"]);
}

#[test]
fn test_unreadable_color_falls_back_per_layer() {
    let manifest = r#"{
        "width": 100, "height": 100,
        "layers": [
            {"id": "ok", "kind": "shape", "vectorFill": {"values": [1, 0, 0]}},
            {"id": "gray", "kind": "shape", "vectorFill": {"values": [0.5]},
             "attributes": {"FillColor": [0.8, 0.5, -0.2]}},
            {"id": "overlay", "kind": "shape",
             "effects": {"colorOverlay": {"color": {"values": ["x", 0, 0]}}},
             "attributes": {"Color": [0, 0, 1]}}
        ]
    }"#;
    let doc = convert_bytes(manifest.as_bytes(), &ConvertOptions::default()).unwrap();

    let fills: Vec<Option<&str>> = doc.children.iter().map(|c| c.fill_hex.as_deref()).collect();
    assert_eq!(fills, [Some("#ff0000"), Some("#737e00"), Some("#0000ff")]);
}

#[test]
fn test_deeply_nested_document_converts() {
    let mut node = LayerNode::new("leaf", "leaf", LayerKind::Shape);
    for depth in 0..100_000 {
        let mut group = LayerNode::new(format!("g{depth}"), "group", LayerKind::Group);
        group.children.push(node);
        node = group;
    }
    let handle = DocumentHandle::new(10, 10, LayerNode::root(vec![node]));

    let doc = convert_document(&handle, &ConvertOptions::default());
    assert_eq!(doc.children.len(), 1);
    assert_eq!(doc.children[0].id, "leaf");
}

#[test]
fn test_corrupt_input_is_rejected() {
    let result = convert_bytes(b"not a document", &ConvertOptions::default());
    assert!(matches!(result, Err(SceneError::DocumentParse(_))));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_convert_file_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("banner.layers.json");
    let output = dir.path().join("banner.json");
    fs::write(&input, LAB_SHAPE).unwrap();

    let config = ConvertConfig {
        output: Some(output.clone()),
        ..ConvertConfig::new(&input)
    };
    let doc = convert_file(&config).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["children"][0]["fillHex"], "#737e00");
    assert_eq!(written["key"], "original");
    assert_eq!(written["children"].as_array().unwrap().len(), doc.children.len());
}

#[test]
fn test_failed_decode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.layers.json");
    let output = dir.path().join("broken.json");
    fs::write(&input, "{\"width\": 10").unwrap();

    let result = ConverterBuilder::new(&input).output(&output).convert();
    assert!(matches!(result, Err(SceneError::DocumentParse(_))));
    assert!(!output.exists());
}

#[test]
fn test_unserializable_text_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("text.layers.json");
    let output = dir.path().join("text.json");
    fs::write(
        &input,
        r#"{"width": 10, "height": 10, "layers": [
            {"kind": "type", "text": {"$type": "EngineData"}}
        ]}"#,
    )
    .unwrap();

    let result = ConverterBuilder::new(&input).output(&output).convert();
    assert!(matches!(result, Err(SceneError::Serialization(_))));
    assert!(!output.exists());
}

#[test]
fn test_builder_compact_string() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("banner.layers.json");
    fs::write(&input, LAB_SHAPE).unwrap();

    let json = ConverterBuilder::new(&input)
        .pretty(false)
        .convert_to_string()
        .unwrap();
    assert!(!json.contains('\n'));
    assert!(json.contains("\"fillHex\":\"#737e00\""));
}
