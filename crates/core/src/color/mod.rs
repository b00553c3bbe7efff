//! Color model detection and conversion.
//!
//! - `classify` - decides whether a raw triplet is really LAB
//! - `convert` - LAB → sRGB conversion and `#rrggbb` formatting

pub mod classify;
pub mod convert;

pub use classify::{ColorModel, Triplet, is_likely_lab};
pub use convert::{
    Rgb8, lab_call_order, lab_to_rgb, resolve_hex, resolve_rgb, rgb_from_device,
};
