//! An opened document.

use crate::model::{ColorValue, LayerNode};

/// A fully decoded document.
///
/// Holds the layer tree for as long as the handle lives; nothing in the
/// tree changes after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentHandle {
    width: u32,
    height: u32,
    background: Option<ColorValue>,
    root: LayerNode,
}

impl DocumentHandle {
    /// Wrap a decoded tree. `root` is the synthetic group holding the
    /// top-level layers (see [`LayerNode::root`]).
    pub fn new(width: u32, height: u32, root: LayerNode) -> Self {
        Self {
            width,
            height,
            background: None,
            root,
        }
    }

    pub fn with_background(mut self, background: Option<ColorValue>) -> Self {
        self.background = background;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Document background color record, if the document supplies one.
    pub fn background(&self) -> Option<&ColorValue> {
        self.background.as_ref()
    }

    /// Root of the layer tree.
    pub fn tree(&self) -> &LayerNode {
        &self.root
    }

    /// Number of layers below the root.
    pub fn layer_count(&self) -> usize {
        self.root.descendants().count()
    }
}
