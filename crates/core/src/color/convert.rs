//! LAB to sRGB conversion and hex formatting.
//!
//! CIE LAB → CIE XYZ (D65) → linear sRGB → gamma-companded sRGB.

use super::classify::{ColorModel, Triplet};

/// D65 reference white, Y normalized to 1.0.
const D65_WHITE: (f64, f64, f64) = (0.95047, 1.0, 1.08883);

/// CIE threshold below which the cube-root curve is replaced by a line.
const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Largest magnitude a unit-normalized LAB triplet carries.
const LAB_UNIT_LIMIT: f64 = 2.0;
const LAB_UNIT_SCALE: f64 = 100.0;

/// XYZ → linear sRGB (IEC 61966-2-1).
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round and clamp three 0..=255 channel values.
    pub fn clamp_from(channels: Triplet) -> Self {
        Self {
            r: clamp_channel(channels.0),
            g: clamp_channel(channels.1),
            b: clamp_channel(channels.2),
        }
    }

    pub fn to_f64s(self) -> Triplet {
        (f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb8> for (u8, u8, u8) {
    fn from(c: Rgb8) -> Self {
        (c.r, c.g, c.b)
    }
}

fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert a LAB triplet to sRGB.
///
/// The triplet is read positionally as (lightness, green-red, blue-yellow).
/// Triplets whose largest magnitude is at most 2.0 are taken to be in the
/// unit-normalized scale mis-tagged fill records use and are scaled by 100;
/// anything larger is read in native LAB units (`L` in 0..=100).
///
/// Out-of-gamut results are clamped, never rejected.
pub fn lab_to_rgb(triplet: Triplet) -> Rgb8 {
    let (mut l, mut a, mut b) = triplet;
    let magnitude = l.abs().max(a.abs()).max(b.abs());
    if magnitude <= LAB_UNIT_LIMIT {
        l *= LAB_UNIT_SCALE;
        a *= LAB_UNIT_SCALE;
        b *= LAB_UNIT_SCALE;
    }

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = D65_WHITE.0 * lab_finv(fx);
    let y = D65_WHITE.1 * lab_finv(fy);
    let z = D65_WHITE.2 * lab_finv(fz);

    let [m0, m1, m2] = XYZ_TO_SRGB;
    let lin = (
        m0[0] * x + m0[1] * y + m0[2] * z,
        m1[0] * x + m1[1] * y + m1[2] * z,
        m2[0] * x + m2[1] * y + m2[2] * z,
    );

    Rgb8::clamp_from((
        gamma_compand(lin.0) * 255.0,
        gamma_compand(lin.1) * 255.0,
        gamma_compand(lin.2) * 255.0,
    ))
}

fn lab_finv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

fn gamma_compand(v: f64) -> f64 {
    if v > 0.0031308 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

/// Rotate a stored LAB triplet into the order [`lab_to_rgb`] is called with.
///
/// Records store the triplet as `(c0, c1, c2)`; every converter call site
/// passes `(c1, c2, c0)`. This matches the measured output of the reference
/// conversions (a mis-tagged yellow fill comes out `#fff300`). Whether the
/// rotation reflects the record layout or an old channel mix-up is
/// unverified, so it stays in one place.
pub fn lab_call_order(stored: Triplet) -> Triplet {
    (stored.1, stored.2, stored.0)
}

/// Format a triplet that is already device RGB.
///
/// Triplets entirely inside `[0, 1]` are scaled by 255 first; anything else
/// is rounded and clamped as 8-bit channels.
pub fn rgb_from_device(triplet: Triplet) -> Rgb8 {
    let (c0, c1, c2) = triplet;
    let unit = [c0, c1, c2].iter().all(|c| (0.0..=1.0).contains(c));
    if unit {
        Rgb8::clamp_from((c0 * 255.0, c1 * 255.0, c2 * 255.0))
    } else {
        Rgb8::clamp_from(triplet)
    }
}

/// Resolve a raw triplet to sRGB, converting through LAB when the
/// classifier says so.
pub fn resolve_rgb(triplet: Triplet) -> Rgb8 {
    match ColorModel::classify(triplet) {
        ColorModel::Lab => lab_to_rgb(lab_call_order(triplet)),
        ColorModel::UnitRgb | ColorModel::ByteRgb => rgb_from_device(triplet),
    }
}

/// [`resolve_rgb`] formatted as `#rrggbb`.
pub fn resolve_hex(triplet: Triplet) -> String {
    resolve_rgb(triplet).to_hex()
}
