//! Interchange schema types.
//!
//! The flat JSON document the canvas editor loads. Keys are camelCase.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::AttrValue;

/// Output resolution, fixed by the schema.
pub const OUTPUT_DPI: u32 = 96;
/// Background used when the document supplies none.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
/// Key of the single size variant.
pub const ORIGINAL_KEY: &str = "original";
pub const ASSET_TYPE: &str = "asset";
pub const REPOSITION_TOP_LEFT: &str = "top-left";

/// Editor layer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerType {
    Shape,
    Text,
    Image,
    Group,
    Object,
}

/// Image crop insets in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDetails {
    pub left_percent: f64,
    pub top_percent: f64,
    pub right_percent: f64,
    pub bottom_percent: f64,
}

/// One canvas object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputNode {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: String,
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<AttrValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<String>,
    pub layer_type: LayerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposition_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_details: Option<CropDetails>,
}

/// Canvas size variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDescriptor {
    pub height: u32,
    pub width: u32,
    #[serde(rename = "type")]
    pub size_type: String,
    pub name: String,
    pub aspect_ratio: String,
}

impl SizeDescriptor {
    /// The document's intrinsic size.
    pub fn custom(width: u32, height: u32) -> Self {
        let ratio = format!("{width}:{height}");
        Self {
            height,
            width,
            size_type: "custom".to_string(),
            name: ratio.clone(),
            aspect_ratio: ratio,
        }
    }
}

/// The interchange document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub dpi: u32,
    /// Flat, in depth-first document order
    pub children: Vec<OutputNode>,
    pub background_color: String,
    pub background_image: Option<String>,
    pub sizes: Vec<SizeDescriptor>,
    pub key: String,
}

impl OutputDocument {
    /// Number of children per object `type`.
    pub fn type_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for child in &self.children {
            *counts.entry(child.object_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
