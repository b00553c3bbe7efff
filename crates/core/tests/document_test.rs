//! Tests for the document adapter and the layer manifest decoder.

use layerscene_core::document::{DocumentDecoder, ManifestDecoder, open};
use layerscene_core::model::{AttrValue, ColorRecord, ColorSpace, LayerKind};
use layerscene_core::{ColorReadError, SceneError};
use std::io::Write;

fn decode(json: &str) -> Result<layerscene_core::document::DocumentHandle, SceneError> {
    ManifestDecoder.decode(json.as_bytes())
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_minimal_document() {
    let doc = decode(r#"{"width": 800, "height": 600}"#).unwrap();
    assert_eq!(doc.width(), 800);
    assert_eq!(doc.height(), 600);
    assert!(doc.background().is_none());
    assert_eq!(doc.layer_count(), 0);
    assert_eq!(doc.tree().kind, LayerKind::Group);
}

#[test]
fn test_decode_layer_fields() {
    let doc = decode(
        r##"{
            "width": 100, "height": 50,
            "background": {"space": "RGB", "values": [1, 1, 1]},
            "layers": [{
                "id": 7, "name": "Header", "kind": "shape",
                "left": 1, "top": 2, "width": 30, "height": 40,
                "opacity": 51, "visible": false,
                "vectorFill": {"space": "LAB", "values": [0.8, 0.5, -0.2], "alpha": 0.5},
                "stroke": {"values": [0, 0, 0]},
                "effects": {
                    "dropShadow": {"enabled": true},
                    "colorOverlay": {"color": {"values": [1, 0, 0]}},
                    "bevelEmboss": {"enabled": false}
                },
                "fill": "",
                "attributes": {"FillColor": {"Values": [0.8, 0.5, -0.2]}}
            }]
        }"##,
    )
    .unwrap();

    let layer = &doc.tree().children[0];
    assert_eq!(layer.id, "7");
    assert_eq!(layer.name, "Header");
    assert_eq!(layer.kind, LayerKind::Shape);
    assert_eq!(layer.bounds.left, 1.0);
    assert_eq!(layer.bounds.height, 40.0);
    assert!((layer.opacity - 0.2).abs() < 1e-9);
    assert!(!layer.visible);

    let fill = layer.fill.as_ref().and_then(ColorRecord::value).unwrap();
    assert_eq!(fill.space, ColorSpace::Lab);
    assert_eq!(fill.components, (0.8, 0.5, -0.2));
    assert_eq!(fill.alpha, 0.5);
    assert_eq!(layer.stroke.as_ref().unwrap().read(), Ok((0.0, 0.0, 0.0)));
    assert_eq!(
        layer.effect_overlay.as_ref().unwrap().read(),
        Ok((1.0, 0.0, 0.0))
    );
    assert_eq!(layer.effects, ["dropShadow", "colorOverlay"]);
    assert_eq!(layer.named.fill, Some(AttrValue::Str(String::new())));
    assert!(layer.raw_attributes.contains_key("FillColor"));

    assert_eq!(doc.background().unwrap().components, (1.0, 1.0, 1.0));
}

#[test]
fn test_placeholder_ids_follow_document_order() {
    let doc = decode(
        r#"{"width": 10, "height": 10, "layers": [
            {"kind": "group", "children": [
                {"kind": "shape"},
                {"kind": "shape", "id": "named"}
            ]},
            {"kind": "type"}
        ]}"#,
    )
    .unwrap();

    let ids: Vec<&str> = doc.tree().descendants().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["layer-0", "layer-1", "named", "layer-3"]);
    assert_eq!(doc.layer_count(), 4);
}

#[test]
fn test_kinds_map_onto_union() {
    let doc = decode(
        r#"{"width": 10, "height": 10, "layers": [
            {"kind": "type", "text": {"$type": "String", "value": "Hello"}},
            {"kind": "pixel"},
            {"kind": "smartobject", "asset": {"assetId": "a-1"}},
            {"kind": "artboard"},
            {"kind": "curves"}
        ]}"#,
    )
    .unwrap();

    let kinds: Vec<&LayerKind> = doc.tree().children.iter().map(|l| &l.kind).collect();
    match kinds[0] {
        LayerKind::Text { content: Some(content) } => assert_eq!(content.as_str(), Some("Hello")),
        other => panic!("expected text, got {other:?}"),
    }
    assert_eq!(kinds[1], &LayerKind::Image { asset: None });
    match kinds[2] {
        LayerKind::Image { asset: Some(asset) } => {
            assert_eq!(asset.asset_id, "a-1");
            assert_eq!(asset.asset_type, "asset");
        }
        other => panic!("expected linked image, got {other:?}"),
    }
    assert_eq!(kinds[3], &LayerKind::Artboard);
    assert_eq!(kinds[4], &LayerKind::Other("curves".to_string()));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_corrupt_manifest_is_parse_error() {
    for bad in [
        "",
        "{",
        r#"{"width": 10}"#,
        r#"{"width": 10, "height": 10, "layers": [{"name": "no kind"}]}"#,
        r#"{"width": 10, "height": 10, "layers": [{"kind": "shape", "opacity": "full"}]}"#,
    ] {
        let result = decode(bad);
        assert!(
            matches!(result, Err(SceneError::DocumentParse(_))),
            "input {bad:?} gave {result:?}"
        );
    }
}

#[test]
fn test_unreadable_color_records_are_kept() {
    let doc = decode(
        r#"{"width": 10, "height": 10,
            "background": {"values": [0.5]},
            "layers": [
                {"id": "ok", "kind": "shape", "vectorFill": {"values": [1, 0, 0]}},
                {"id": "gray", "kind": "shape", "vectorFill": {"values": [0.5]}},
                {"id": "cmyk", "kind": "shape", "stroke": {"space": "CMYK", "values": [0, 0, 1, 0]}},
                {"id": "text", "kind": "shape",
                 "effects": {"colorOverlay": {"color": {"values": ["x", 0, 0]}}}}
            ]}"#,
    )
    .unwrap();

    assert!(doc.background().is_none());
    let layers = &doc.tree().children;
    assert_eq!(layers.len(), 4);
    assert_eq!(layers[0].fill.as_ref().unwrap().read(), Ok((1.0, 0.0, 0.0)));
    assert_eq!(
        layers[1].fill.as_ref().unwrap().read(),
        Err(ColorReadError::Arity(1))
    );
    assert_eq!(
        layers[2].stroke.as_ref().unwrap().read(),
        Err(ColorReadError::UnsupportedSpace {
            space: "CMYK".to_string(),
            components: 4
        })
    );
    assert_eq!(
        layers[3].effect_overlay.as_ref().unwrap().read(),
        Err(ColorReadError::NotNumeric {
            index: 0,
            got: "string"
        })
    );
    assert_eq!(layers[3].effects, ["colorOverlay"]);
}

#[test]
fn test_binary_document_is_rejected() {
    let result = ManifestDecoder.decode(b"8BPS\x00\x01\x00\x00\x00\x00\x00\x00");
    assert!(matches!(result, Err(SceneError::DocumentParse(_))));
}

#[test]
fn test_open_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"width": 640, "height": 480, "layers": [{{"kind": "shape"}}]}}"#
    )
    .unwrap();

    let doc = open(file.path()).unwrap();
    assert_eq!((doc.width(), doc.height()), (640, 480));
    assert_eq!(doc.layer_count(), 1);
}

#[test]
fn test_open_missing_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = open(dir.path().join("missing.json"));
    assert!(matches!(result, Err(SceneError::DocumentParse(_))));
}
