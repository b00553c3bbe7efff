//! Scene graph nodes.

use crate::model::{Bounds, LayerKind};

/// Source object tag for editable text, renamed on output.
pub const EDITABLE_TEXT_TAG: &str = "i-text";

/// A layer with its colors resolved.
///
/// Mirrors one [`LayerNode`](crate::model::LayerNode); children stay in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    /// Canvas object tag (`path`, `i-text`, `image`, `group`, `object`)
    pub type_tag: &'static str,
    pub bounds: Bounds,
    pub opacity: f64,
    pub visible: bool,
    /// `#rrggbb`, absent when no source yielded a color
    pub fill_hex: Option<String>,
    pub stroke_hex: Option<String>,
    pub effects: Vec<String>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Total number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&SceneNode> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl Drop for SceneNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Canvas object tag for a layer kind.
pub fn type_tag(kind: &LayerKind) -> &'static str {
    match kind {
        LayerKind::Shape => "path",
        LayerKind::Text { .. } => EDITABLE_TEXT_TAG,
        LayerKind::Image { .. } => "image",
        LayerKind::Group | LayerKind::Artboard => "group",
        LayerKind::Other(_) => "object",
    }
}
