//! Benchmarks for color resolution and whole-document conversion.
//!
//! Benchmark groups:
//! - `color_resolve`: classifier plus conversion for RGB and LAB triplets
//! - `convert_document`: scene building and normalization at various layer counts

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use layerscene_core::api::{ConvertOptions, convert_document};
use layerscene_core::color::resolve_hex;
use layerscene_core::document::DocumentHandle;
use layerscene_core::model::{AttrValue, ColorValue, LayerKind, LayerNode};

// =============================================================================
// Data Generation
// =============================================================================

/// Build a document with `n` leaves spread over groups of ten.
///
/// Leaves cycle through the color sources the builder consults so every
/// position in the pipeline gets exercised.
fn generate_document(n: usize) -> DocumentHandle {
    let mut groups = Vec::with_capacity(n / 10 + 1);
    let mut current = LayerNode::new("g0", "group", LayerKind::Group);

    for i in 0..n {
        let id = format!("layer-{i}");
        let mut layer = match i % 4 {
            0 => LayerNode::new(id, "shape", LayerKind::Shape),
            1 => LayerNode::new(id, "text", LayerKind::Text {
                content: Some(AttrValue::from("Lorem ipsum")),
            }),
            2 => LayerNode::new(id, "image", LayerKind::Image { asset: None }),
            _ => LayerNode::new(id, "shape", LayerKind::Shape),
        };
        match i % 3 {
            0 => layer.fill = Some(ColorValue::rgb(0.2, 0.4, 0.6).into()),
            1 => {
                layer.raw_attributes.insert(
                    "FillColor".to_string(),
                    AttrValue::from(vec![0.8, 0.5, -0.2]),
                );
            }
            _ => layer.named.fill = Some(AttrValue::from(vec![255i64, 128, 0])),
        }
        current.children.push(layer);

        if current.children.len() == 10 {
            let next = LayerNode::new(format!("g{}", groups.len() + 1), "group", LayerKind::Group);
            groups.push(std::mem::replace(&mut current, next));
        }
    }
    groups.push(current);

    DocumentHandle::new(1080, 1080, LayerNode::root(groups))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_color_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_resolve");

    let cases = [
        ("unit_rgb", (0.2, 0.4, 0.6)),
        ("byte_rgb", (255.0, 128.0, 0.0)),
        ("lab_unit_scale", (0.8, 0.5, -0.2)),
        ("lab_native", (53.0, 80.0, 67.0)),
    ];
    for (name, triplet) in cases {
        group.bench_function(name, |b| b.iter(|| resolve_hex(black_box(triplet))));
    }

    group.finish();
}

fn bench_convert_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_document");
    let options = ConvertOptions::default();

    for layers in [100, 1_000, 10_000] {
        let doc = generate_document(layers);
        group.bench_with_input(BenchmarkId::new("layers", layers), &doc, |b, doc| {
            b.iter(|| convert_document(black_box(doc), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_color_resolve, bench_convert_document);
criterion_main!(benches);
