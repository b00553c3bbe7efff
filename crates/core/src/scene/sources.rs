//! Color sources consulted when resolving a layer's fill and stroke.
//!
//! Sources are tried in a fixed priority order and the first one that yields
//! a triplet wins. Expected gaps read as `Ok(None)`; a record that is there
//! but broken reads as a [`ColorReadError`], which the builder logs before
//! moving on to the next source.

use indexmap::IndexMap;

use crate::color::Triplet;
use crate::error::ColorReadError;
use crate::model::{AttrValue, ColorRecord, LayerNode};

/// Generic named color attributes, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    BackgroundColor,
    Fill,
    Color,
}

impl NamedColor {
    pub const fn key(self) -> &'static str {
        match self {
            NamedColor::BackgroundColor => "backgroundColor",
            NamedColor::Fill => "fill",
            NamedColor::Color => "color",
        }
    }
}

/// Where a layer color can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// Vector mask / shape fill record
    VectorFill,
    /// Color overlay layer effect
    ColorOverlay,
    Named(NamedColor),
    /// Known descriptor key in the raw attribute map
    Legacy(&'static str),
    Stroke,
}

/// Fill lookup order.
pub const FILL_SOURCES: &[ColorSource] = &[
    ColorSource::VectorFill,
    ColorSource::ColorOverlay,
    ColorSource::Named(NamedColor::BackgroundColor),
    ColorSource::Named(NamedColor::Fill),
    ColorSource::Named(NamedColor::Color),
    ColorSource::Legacy("FillColor"),
    ColorSource::Legacy("fillColor"),
    ColorSource::Legacy("SoCo"),
    ColorSource::Legacy("solidColor"),
    ColorSource::Legacy("Color"),
    ColorSource::Legacy("color"),
    ColorSource::Legacy("Clr "),
    ColorSource::Legacy("fill"),
    ColorSource::Legacy("backgroundColor"),
];

/// Stroke lookup order.
pub const STROKE_SOURCES: &[ColorSource] = &[
    ColorSource::Stroke,
    ColorSource::Legacy("StrokeColor"),
    ColorSource::Legacy("strokeColor"),
    ColorSource::Legacy("strokeStyleContent"),
];

impl ColorSource {
    /// Read this source off a layer.
    pub fn read(self, layer: &LayerNode) -> Result<Option<Triplet>, ColorReadError> {
        match self {
            ColorSource::VectorFill => layer.fill.as_ref().map(ColorRecord::read).transpose(),
            ColorSource::ColorOverlay => layer
                .effect_overlay
                .as_ref()
                .map(ColorRecord::read)
                .transpose(),
            ColorSource::Stroke => layer.stroke.as_ref().map(ColorRecord::read).transpose(),
            ColorSource::Named(which) => {
                let value = match which {
                    NamedColor::BackgroundColor => layer.named.background_color.as_ref(),
                    NamedColor::Fill => layer.named.fill.as_ref(),
                    NamedColor::Color => layer.named.color.as_ref(),
                };
                match value {
                    Some(v) if !v.is_empty() => read_triplet(v),
                    _ => Ok(None),
                }
            }
            ColorSource::Legacy(key) => layer
                .raw_attributes
                .get(key)
                .map_or(Ok(None), read_triplet),
        }
    }

    pub fn describe(self) -> String {
        match self {
            ColorSource::VectorFill => "vector fill".to_string(),
            ColorSource::ColorOverlay => "color overlay".to_string(),
            ColorSource::Stroke => "stroke".to_string(),
            ColorSource::Named(which) => format!("attribute {}", which.key()),
            ColorSource::Legacy(key) => format!("raw attribute {key:?}"),
        }
    }
}

/// Keys holding the component list of a color record.
const VALUE_KEYS: [&str; 2] = ["Values", "values"];

/// Per-channel key sets: plain names, descriptor RGBC keys, descriptor LbCl
/// keys.
const CHANNEL_KEYS: [[&str; 3]; 3] = [
    ["red", "green", "blue"],
    ["Rd  ", "Grn ", "Bl  "],
    ["Lmnc", "A   ", "B   "],
];

/// Keys under which a record nests its color (e.g. a stroke style).
const NESTED_KEYS: [&str; 3] = ["Clr ", "color", "Color"];

/// Extract a raw triplet from an attribute value.
///
/// Accepts a list of at least three numbers, a record with a `Values` list,
/// a record with per-channel keys, a record nesting one of those, or an
/// opaque wrapper around any of them.
pub fn read_triplet(value: &AttrValue) -> Result<Option<Triplet>, ColorReadError> {
    match value {
        AttrValue::List(items) => list_triplet(items).map(Some),
        AttrValue::Dict(map) => dict_triplet(map),
        AttrValue::Opaque { value: Some(inner), .. } => read_triplet(inner),
        _ => Ok(None),
    }
}

fn list_triplet(items: &[AttrValue]) -> Result<Triplet, ColorReadError> {
    let [c0, c1, c2, ..] = items else {
        return Err(ColorReadError::Arity(items.len()));
    };
    let num = |index: usize, v: &AttrValue| {
        v.as_num().ok_or(ColorReadError::NotNumeric {
            index,
            got: v.type_name(),
        })
    };
    Ok((num(0, c0)?, num(1, c1)?, num(2, c2)?))
}

fn dict_triplet(map: &IndexMap<String, AttrValue>) -> Result<Option<Triplet>, ColorReadError> {
    if let Some(values) = VALUE_KEYS.iter().find_map(|k| map.get(*k)) {
        return match values {
            AttrValue::List(items) => list_triplet(items).map(Some),
            other => read_triplet(other),
        };
    }

    for channels in CHANNEL_KEYS {
        if !channels.iter().any(|k| map.contains_key(*k)) {
            continue;
        }
        let mut out = [0.0; 3];
        for (index, key) in channels.into_iter().enumerate() {
            let v = map.get(key).ok_or(ColorReadError::MissingChannel(key))?;
            out[index] = v.as_num().ok_or(ColorReadError::NotNumeric {
                index,
                got: v.type_name(),
            })?;
        }
        return Ok(Some((out[0], out[1], out[2])));
    }

    match NESTED_KEYS.iter().find_map(|k| map.get(*k)) {
        Some(nested) => read_triplet(nested),
        None => Ok(None),
    }
}
