//! Layer manifest decoder.
//!
//! Reads the JSON layer dump the external binary decoder writes:
//!
//! ```json
//! {
//!   "width": 800, "height": 600,
//!   "background": { "space": "RGB", "values": [1, 1, 1] },
//!   "layers": [
//!     { "id": "7", "name": "Header", "kind": "shape",
//!       "left": 0, "top": 0, "width": 800, "height": 120,
//!       "vectorFill": { "space": "RGB", "values": [0.8, 0.5, -0.2] },
//!       "effects": { "colorOverlay": { "color": { "values": [1, 0, 0] } } },
//!       "attributes": { "FillColor": { "Values": [0.8, 0.5, -0.2] } },
//!       "children": [] }
//!   ]
//! }
//! ```
//!
//! Attribute values are plain JSON; an object carrying a `"$type"` key is a
//! decoder-specific wrapper whose optional `"value"` is its primitive.
//!
//! Only the manifest structure itself is fatal. A color record that cannot be
//! read (gray or CMYK components, non-numeric values) is kept as
//! [`ColorRecord::Unreadable`] and left to the scene builder to skip.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{DocumentDecoder, DocumentHandle};
use crate::error::{ColorReadError, Result, SceneError};
use crate::model::{
    AssetRef, AttrValue, Bounds, ColorRecord, ColorSpace, ColorValue, LayerKind, LayerNode,
    NamedColors,
};

/// Signature of a raw binary design document.
const BINARY_SIGNATURE: &[u8] = b"8BPS";

/// Key marking a wrapped attribute value.
const OPAQUE_TYPE_KEY: &str = "$type";

/// Effect record that tints the whole layer.
const COLOR_OVERLAY_EFFECT: &str = "colorOverlay";

/// Decoder for JSON layer manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestDecoder;

impl DocumentDecoder for ManifestDecoder {
    fn decode(&self, data: &[u8]) -> Result<DocumentHandle> {
        if data.starts_with(BINARY_SIGNATURE) {
            return Err(SceneError::DocumentParse(
                "binary design document; decode it to a layer manifest first".to_string(),
            ));
        }

        let raw: RawDocument = serde_json::from_slice(data)
            .map_err(|e| SceneError::DocumentParse(format!("invalid layer manifest: {e}")))?;

        let background = raw
            .background
            .map(|c| color_record(c, "document background"))
            .and_then(|record| record.value().copied());

        let mut counter = 0usize;
        let layers: Vec<LayerNode> = raw
            .layers
            .into_iter()
            .map(|layer| layer.into_node(&mut counter))
            .collect();

        tracing::debug!(
            width = raw.width,
            height = raw.height,
            layers = counter,
            "decoded layer manifest"
        );

        Ok(DocumentHandle::new(raw.width, raw.height, LayerNode::root(layers))
            .with_background(background))
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    width: u32,
    height: u32,
    #[serde(default)]
    background: Option<Value>,
    #[serde(default)]
    layers: Vec<RawLayer>,
}

/// Decode a `{ space?, values: [n, n, n], alpha? }` color record, keeping
/// it as unreadable when it does not hold an RGB or LAB triplet.
fn color_record(value: Value, context: &str) -> ColorRecord {
    let raw = attr_from_json(value);
    match parse_color(&raw) {
        Ok(color) => ColorRecord::Value(color),
        Err(error) => {
            tracing::warn!(%context, %error, "keeping unreadable color record");
            ColorRecord::Unreadable { raw, error }
        }
    }
}

fn parse_color(raw: &AttrValue) -> std::result::Result<ColorValue, ColorReadError> {
    let values = raw
        .get("values")
        .and_then(AttrValue::as_list)
        .ok_or(ColorReadError::MissingValues)?;
    let tag = raw.get("space").and_then(AttrValue::as_str);

    let [c0, c1, c2, rest @ ..] = values.as_slice() else {
        return Err(ColorReadError::Arity(values.len()));
    };

    // Untagged records are RGB only when they have exactly three components.
    let space = match tag {
        Some(tag) => ColorSpace::from_tag(tag),
        None if rest.is_empty() => ColorSpace::Rgb,
        None => ColorSpace::Unknown,
    };
    if space == ColorSpace::Unknown && !rest.is_empty() {
        return Err(ColorReadError::UnsupportedSpace {
            space: tag.unwrap_or("untagged").to_string(),
            components: values.len(),
        });
    }

    let num = |index: usize, v: &AttrValue| {
        v.as_num().ok_or(ColorReadError::NotNumeric {
            index,
            got: v.type_name(),
        })
    };
    let components = (num(0, c0)?, num(1, c1)?, num(2, c2)?);
    let alpha = raw.get("alpha").and_then(AttrValue::as_num).unwrap_or(1.0);
    Ok(ColorValue::new(space, components).with_alpha(alpha))
}

#[derive(Debug, Deserialize)]
struct RawAsset {
    #[serde(rename = "assetType", default = "default_asset_type")]
    asset_type: String,
    #[serde(rename = "assetId")]
    asset_id: String,
}

fn default_asset_type() -> String {
    "asset".to_string()
}

const fn default_opacity() -> f64 {
    255.0
}

const fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayer {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: String,
    kind: String,
    #[serde(default)]
    left: f64,
    #[serde(default)]
    top: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    /// Layer record opacity byte, 0..=255
    #[serde(default = "default_opacity")]
    opacity: f64,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    vector_fill: Option<Value>,
    #[serde(default)]
    stroke: Option<Value>,
    #[serde(default)]
    effects: IndexMap<String, Value>,
    #[serde(default)]
    background_color: Option<Value>,
    #[serde(default)]
    fill: Option<Value>,
    #[serde(default)]
    color: Option<Value>,
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    asset: Option<RawAsset>,
    #[serde(default)]
    attributes: IndexMap<String, Value>,
    #[serde(default)]
    children: Vec<RawLayer>,
}

impl RawLayer {
    /// Convert to a layer node. `counter` is the pre-order position used for
    /// placeholder ids.
    fn into_node(self, counter: &mut usize) -> LayerNode {
        let position = *counter;
        *counter += 1;

        let id = match self.id {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => format!("layer-{position}"),
        };

        let kind = parse_kind(&self.kind, self.text, self.asset);
        let context = format!("layer {id:?}");

        let mut effect_overlay = None;
        let mut effects = Vec::new();
        for (name, record) in self.effects {
            if !effect_enabled(&record) {
                continue;
            }
            if name == COLOR_OVERLAY_EFFECT {
                if let Some(color) = record.get("color") {
                    effect_overlay =
                        Some(color_record(color.clone(), &format!("{context} color overlay")));
                }
            }
            effects.push(name);
        }

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_node(counter))
            .collect();

        LayerNode {
            name: self.name,
            kind,
            bounds: Bounds::new(self.left, self.top, self.width, self.height),
            opacity: (self.opacity / 255.0).clamp(0.0, 1.0),
            visible: self.visible,
            fill: self
                .vector_fill
                .map(|c| color_record(c, &format!("{context} vector fill"))),
            stroke: self
                .stroke
                .map(|c| color_record(c, &format!("{context} stroke"))),
            effect_overlay,
            effects,
            named: NamedColors {
                background_color: self.background_color.map(attr_from_json),
                fill: self.fill.map(attr_from_json),
                color: self.color.map(attr_from_json),
            },
            raw_attributes: self
                .attributes
                .into_iter()
                .map(|(k, v)| (k, attr_from_json(v)))
                .collect(),
            children,
            id,
        }
    }
}

/// Map a decoder kind tag onto the layer kind union.
fn parse_kind(tag: &str, text: Option<Value>, asset: Option<RawAsset>) -> LayerKind {
    match tag.to_ascii_lowercase().as_str() {
        "shape" | "solidcolorfill" => LayerKind::Shape,
        "type" | "text" => LayerKind::Text {
            content: text.map(attr_from_json),
        },
        "pixel" | "smartobject" | "image" => LayerKind::Image {
            asset: asset.map(|a| AssetRef {
                asset_type: a.asset_type,
                asset_id: a.asset_id,
            }),
        },
        "group" => LayerKind::Group,
        "artboard" => LayerKind::Artboard,
        _ => LayerKind::Other(tag.to_string()),
    }
}

/// An effect record counts as present unless it is `false`, `null` or
/// explicitly disabled.
fn effect_enabled(record: &Value) -> bool {
    match record {
        Value::Null | Value::Bool(false) => false,
        Value::Object(map) => !matches!(map.get("enabled"), Some(Value::Bool(false))),
        _ => true,
    }
}

/// Convert a JSON attribute into an [`AttrValue`].
pub fn attr_from_json(value: Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(b) => AttrValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => AttrValue::Int(i),
            None => AttrValue::Real(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => AttrValue::Str(s),
        Value::Array(items) => AttrValue::List(items.into_iter().map(attr_from_json).collect()),
        Value::Object(map) => {
            if let Some(type_name) = map.get(OPAQUE_TYPE_KEY) {
                AttrValue::Opaque {
                    type_name: match type_name {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                    value: map
                        .get("value")
                        .map(|v| Box::new(attr_from_json(v.clone()))),
                }
            } else {
                AttrValue::Dict(
                    map.into_iter()
                        .map(|(k, v)| (k, attr_from_json(v)))
                        .collect(),
                )
            }
        }
    }
}
