//! The decoded layer tree.

use indexmap::IndexMap;

use super::attr::AttrValue;
use super::color::ColorRecord;

/// Layer bounding box in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Reference to an externally managed image asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub asset_type: String,
    pub asset_id: String,
}

/// Layer kind with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Shape,
    Text {
        /// Text content as the decoder exposes it (may be an opaque wrapper)
        content: Option<AttrValue>,
    },
    Image {
        asset: Option<AssetRef>,
    },
    Group,
    Artboard,
    /// Kind tag this crate does not know; kept with a generic classification
    Other(String),
}

impl LayerKind {
    /// Groups and artboards only hold children.
    pub const fn is_container(&self) -> bool {
        matches!(self, LayerKind::Group | LayerKind::Artboard)
    }

    pub fn name(&self) -> &str {
        match self {
            LayerKind::Shape => "shape",
            LayerKind::Text { .. } => "text",
            LayerKind::Image { .. } => "image",
            LayerKind::Group => "group",
            LayerKind::Artboard => "artboard",
            LayerKind::Other(tag) => tag,
        }
    }
}

/// Generic named color attributes some decoders expose on any layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedColors {
    pub background_color: Option<AttrValue>,
    pub fill: Option<AttrValue>,
    pub color: Option<AttrValue>,
}

/// A node of the decoded layer tree.
///
/// Owned by the document handle and never mutated after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerNode {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub bounds: Bounds,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f64,
    pub visible: bool,
    /// Vector mask / shape fill
    pub fill: Option<ColorRecord>,
    pub stroke: Option<ColorRecord>,
    /// Color overlay layer effect
    pub effect_overlay: Option<ColorRecord>,
    /// Names of the layer effects present, in record order
    pub effects: Vec<String>,
    pub named: NamedColors,
    /// Descriptor data without a structured field
    pub raw_attributes: IndexMap<String, AttrValue>,
    pub children: Vec<LayerNode>,
}

impl LayerNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            bounds: Bounds::default(),
            opacity: 1.0,
            visible: true,
            fill: None,
            stroke: None,
            effect_overlay: None,
            effects: Vec::new(),
            named: NamedColors::default(),
            raw_attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Synthetic root holding the top-level layers.
    pub fn root(children: Vec<LayerNode>) -> Self {
        let mut root = Self::new("root", "root", LayerKind::Group);
        root.children = children;
        root
    }

    /// Every node below this one in depth-first document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Children are torn down from a heap stack so dropping a deeply nested tree
/// cannot overflow the call stack.
impl Drop for LayerNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over a layer subtree, excluding its root.
pub struct Descendants<'a> {
    stack: Vec<&'a LayerNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a LayerNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
