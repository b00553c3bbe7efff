//! Color records as stored on layers.

use super::attr::AttrValue;
use crate::color::Triplet;
use crate::error::ColorReadError;

/// Color model a record is tagged with.
///
/// The tag is not trustworthy: LAB fills are routinely tagged RGB, so
/// resolution always runs the classifier on the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Lab,
    Unknown,
}

impl ColorSpace {
    /// Parse a decoder color space tag. Unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "rgb" | "rgbc" | "devicergb" => ColorSpace::Rgb,
            "lab" | "labc" => ColorSpace::Lab,
            _ => ColorSpace::Unknown,
        }
    }
}

/// A color record with its raw, unconverted components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    pub space: ColorSpace,
    pub components: Triplet,
    pub alpha: f64,
}

impl ColorValue {
    pub fn new(space: ColorSpace, components: Triplet) -> Self {
        Self {
            space,
            components,
            alpha: 1.0,
        }
    }

    pub fn rgb(c0: f64, c1: f64, c2: f64) -> Self {
        Self::new(ColorSpace::Rgb, (c0, c1, c2))
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// A structured color record as it came off a layer.
///
/// Records the decoder cannot read are kept with the reason, so resolution
/// reports them and moves on to the next source instead of failing the
/// document.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRecord {
    Value(ColorValue),
    Unreadable {
        raw: AttrValue,
        error: ColorReadError,
    },
}

impl ColorRecord {
    pub fn value(&self) -> Option<&ColorValue> {
        match self {
            ColorRecord::Value(value) => Some(value),
            ColorRecord::Unreadable { .. } => None,
        }
    }

    /// The raw triplet, or why there is none.
    pub fn read(&self) -> Result<Triplet, ColorReadError> {
        match self {
            ColorRecord::Value(value) => Ok(value.components),
            ColorRecord::Unreadable { error, .. } => Err(error.clone()),
        }
    }
}

impl From<ColorValue> for ColorRecord {
    fn from(value: ColorValue) -> Self {
        ColorRecord::Value(value)
    }
}
