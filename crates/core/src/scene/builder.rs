//! Scene graph builder.
//!
//! Walks the layer tree depth-first in document order and resolves every
//! leaf's fill and stroke through the color source pipeline. The walk uses an
//! explicit frame stack so deeply nested documents cannot overflow the call
//! stack.

use super::node::{SceneNode, type_tag};
use super::sources::{ColorSource, FILL_SOURCES, STROKE_SOURCES};
use crate::color::{ColorModel, Triplet, resolve_hex};
use crate::model::{LayerKind, LayerNode};

/// A color picked by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColor {
    pub source: ColorSource,
    /// Raw triplet as read from the source
    pub triplet: Triplet,
    pub model: ColorModel,
    pub hex: String,
}

/// Counters collected while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Layers visited, root excluded
    pub nodes: usize,
    /// Colors that went through LAB conversion
    pub lab_colors: usize,
    /// Non-container layers left without a fill
    pub unresolved_fills: usize,
    /// Broken color records skipped
    pub read_errors: usize,
    /// Layers with a kind tag this crate does not know
    pub unknown_kinds: usize,
}

/// Builds a [`SceneNode`] tree from a layer tree.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    stats: BuildStats,
}

/// A layer whose children are still being built.
struct Frame<'a> {
    layer: &'a LayerNode,
    next_child: usize,
    children: Vec<SceneNode>,
}

impl<'a> Frame<'a> {
    fn new(layer: &'a LayerNode) -> Self {
        Self {
            layer,
            next_child: 0,
            children: Vec::with_capacity(layer.children.len()),
        }
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Build the scene graph rooted at `root`.
    ///
    /// Never fails: a layer whose colors cannot be resolved is emitted
    /// without them.
    pub fn build(&mut self, root: &LayerNode) -> SceneNode {
        let mut stack = vec![Frame::new(root)];

        while let Some(mut frame) = stack.pop() {
            let layer = frame.layer;
            if let Some(child) = layer.children.get(frame.next_child) {
                frame.next_child += 1;
                stack.push(frame);
                stack.push(Frame::new(child));
                continue;
            }

            let is_root = stack.is_empty();
            let node = self.finish(frame, is_root);
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => return node,
            }
        }

        unreachable!("the root frame is popped last and returns")
    }

    fn finish(&mut self, frame: Frame<'_>, is_root: bool) -> SceneNode {
        let layer = frame.layer;
        if !is_root {
            self.stats.nodes += 1;
        }

        let (fill_hex, stroke_hex) = match &layer.kind {
            LayerKind::Group | LayerKind::Artboard => (None, None),
            LayerKind::Other(tag) => {
                tracing::warn!(
                    layer = %layer.id,
                    kind = %tag,
                    "unrecognized layer kind, emitting as generic object"
                );
                self.stats.unknown_kinds += 1;
                self.resolve_paint(layer)
            }
            LayerKind::Shape | LayerKind::Text { .. } | LayerKind::Image { .. } => {
                self.resolve_paint(layer)
            }
        };

        SceneNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            kind: layer.kind.clone(),
            type_tag: type_tag(&layer.kind),
            bounds: layer.bounds,
            opacity: layer.opacity,
            visible: layer.visible,
            fill_hex,
            stroke_hex,
            effects: layer.effects.clone(),
            children: frame.children,
        }
    }

    fn resolve_paint(&mut self, layer: &LayerNode) -> (Option<String>, Option<String>) {
        let fill = self.resolve(layer, FILL_SOURCES);
        if fill.is_none() {
            self.stats.unresolved_fills += 1;
            tracing::debug!(layer = %layer.id, name = %layer.name, "no fill color found");
        }
        let stroke = self.resolve(layer, STROKE_SOURCES);
        (fill.map(|c| c.hex), stroke.map(|c| c.hex))
    }

    /// Run `sources` in order; the first triplet found wins.
    pub fn resolve(&mut self, layer: &LayerNode, sources: &[ColorSource]) -> Option<ResolvedColor> {
        for &source in sources {
            let triplet = match source.read(layer) {
                Ok(Some(triplet)) => triplet,
                Ok(None) => continue,
                Err(e) => {
                    self.stats.read_errors += 1;
                    tracing::warn!(
                        layer = %layer.id,
                        source = %source.describe(),
                        error = %e,
                        "skipping unreadable color record"
                    );
                    continue;
                }
            };

            let model = ColorModel::classify(triplet);
            if model == ColorModel::Lab {
                self.stats.lab_colors += 1;
                tracing::debug!(
                    layer = %layer.id,
                    source = %source.describe(),
                    values = ?triplet,
                    "LAB color detected"
                );
            }
            let hex = resolve_hex(triplet);
            tracing::trace!(
                layer = %layer.id,
                source = %source.describe(),
                %hex,
                "resolved color"
            );
            return Some(ResolvedColor {
                source,
                triplet,
                model,
                hex,
            });
        }
        None
    }
}

/// Build a scene graph with a fresh [`SceneBuilder`].
pub fn build(root: &LayerNode) -> SceneNode {
    SceneBuilder::new().build(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttrValue, ColorValue};

    fn shape(id: &str) -> LayerNode {
        LayerNode::new(id, id, LayerKind::Shape)
    }

    #[test]
    fn vector_fill_beats_overlay() {
        let mut layer = shape("s");
        layer.fill = Some(ColorValue::rgb(1.0, 0.0, 0.0).into());
        layer.effect_overlay = Some(ColorValue::rgb(0.0, 0.0, 1.0).into());
        let resolved = SceneBuilder::new().resolve(&layer, FILL_SOURCES);
        assert_eq!(resolved.map(|c| c.hex), Some("#ff0000".to_string()));
    }

    #[test]
    fn broken_record_falls_through() {
        let mut layer = shape("s");
        layer
            .raw_attributes
            .insert("FillColor".to_string(), AttrValue::from(vec![0.5]));
        layer
            .raw_attributes
            .insert("Color".to_string(), AttrValue::from(vec![0i64, 255, 0]));
        let mut builder = SceneBuilder::new();
        let resolved = builder.resolve(&layer, FILL_SOURCES);
        assert_eq!(resolved.map(|c| c.hex), Some("#00ff00".to_string()));
        assert_eq!(builder.stats().read_errors, 1);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut node = shape("leaf");
        for depth in 0..100_000 {
            let mut group = LayerNode::new(format!("g{depth}"), "g", LayerKind::Group);
            group.children.push(node);
            node = group;
        }
        let root = LayerNode::root(vec![node]);
        let mut builder = SceneBuilder::new();
        let scene = builder.build(&root);
        assert_eq!(builder.stats().nodes, 100_001);
        assert_eq!(scene.descendant_count(), 100_001);
        drop(scene);
        drop(root);
    }
}
