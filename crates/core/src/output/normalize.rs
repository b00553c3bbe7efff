//! Scene graph → interchange schema.

use uuid::Uuid;

use super::schema::{
    ASSET_TYPE, CropDetails, DEFAULT_BACKGROUND, LayerType, ORIGINAL_KEY, OUTPUT_DPI,
    OutputDocument, OutputNode, REPOSITION_TOP_LEFT, SizeDescriptor,
};
use crate::model::LayerKind;
use crate::scene::{EDITABLE_TEXT_TAG, SceneNode};

/// Produces identifiers for synthesized image asset placeholders.
pub trait AssetIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAssetIds;

impl AssetIdGenerator for UuidAssetIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Normalizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    /// Emit a flat `Group` node ahead of each group's descendants.
    pub emit_groups: bool,
}

/// Flattens a scene graph into an [`OutputDocument`].
#[derive(Debug, Default)]
pub struct Normalizer<G = UuidAssetIds> {
    options: NormalizeOptions,
    ids: G,
}

impl Normalizer<UuidAssetIds> {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            ids: UuidAssetIds,
        }
    }
}

impl<G: AssetIdGenerator> Normalizer<G> {
    pub fn with_id_generator(options: NormalizeOptions, ids: G) -> Self {
        Self { options, ids }
    }

    /// Flatten `scene` (the document root) into the interchange document.
    ///
    /// `background` is an already formatted `#rrggbb`; `None` falls back to
    /// white.
    pub fn normalize(
        &mut self,
        scene: &SceneNode,
        width: u32,
        height: u32,
        background: Option<String>,
    ) -> OutputDocument {
        let mut children = Vec::with_capacity(scene.descendant_count());
        let mut stack: Vec<&SceneNode> = scene.children.iter().rev().collect();

        while let Some(node) = stack.pop() {
            if !node.is_container() || self.options.emit_groups {
                children.push(self.output_node(node));
            }
            stack.extend(node.children.iter().rev());
        }

        OutputDocument {
            dpi: OUTPUT_DPI,
            children,
            background_color: background.unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
            background_image: None,
            sizes: vec![SizeDescriptor::custom(width, height)],
            key: ORIGINAL_KEY.to_string(),
        }
    }

    fn output_node(&mut self, node: &SceneNode) -> OutputNode {
        let object_type = match node.type_tag {
            EDITABLE_TEXT_TAG => "text",
            tag => tag,
        };

        let mut out = OutputNode {
            object_type: object_type.to_string(),
            id: node.id.clone(),
            name: node.name.clone(),
            left: node.bounds.left,
            top: node.bounds.top,
            width: node.bounds.width,
            height: node.bounds.height,
            opacity: node.opacity,
            visible: node.visible,
            fill_hex: node.fill_hex.clone(),
            stroke_hex: node.stroke_hex.clone(),
            text: None,
            effects: node.effects.clone(),
            layer_type: layer_type(&node.kind),
            asset_type: None,
            asset_id: None,
            reposition_option: None,
            crop_details: None,
        };

        match &node.kind {
            LayerKind::Text { content } => out.text = content.clone(),
            LayerKind::Image { asset: Some(asset) } => {
                out.asset_type = Some(asset.asset_type.clone());
                out.asset_id = Some(asset.asset_id.clone());
            }
            LayerKind::Image { asset: None } => {
                out.asset_type = Some(ASSET_TYPE.to_string());
                out.asset_id = Some(self.ids.next_id());
                out.reposition_option = Some(REPOSITION_TOP_LEFT.to_string());
                out.crop_details = Some(CropDetails::default());
            }
            LayerKind::Shape | LayerKind::Group | LayerKind::Artboard | LayerKind::Other(_) => {}
        }

        out
    }
}

/// Editor layer category for a layer kind.
pub fn layer_type(kind: &LayerKind) -> LayerType {
    match kind {
        LayerKind::Shape => LayerType::Shape,
        LayerKind::Text { .. } => LayerType::Text,
        LayerKind::Image { .. } => LayerType::Image,
        LayerKind::Group | LayerKind::Artboard => LayerType::Group,
        LayerKind::Other(_) => LayerType::Object,
    }
}

/// Normalize with default options and a white background.
pub fn normalize(scene: &SceneNode, width: u32, height: u32) -> OutputDocument {
    Normalizer::new(NormalizeOptions::default()).normalize(scene, width, height, None)
}
