//! Color model detection for ambiguous color records.
//!
//! Design documents tag solid fills as RGB even when the record actually
//! carries CIE LAB numbers. Read as normalized RGB, LAB's `a`/`b` channels go
//! negative or exceed 1.0, which is the fingerprint this module looks for.

/// A raw color triplet exactly as read from a record.
pub type Triplet = (f64, f64, f64);

/// The numeric model a raw triplet most likely uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    /// Every component in `[0, 1]`.
    UnitRgb,
    /// Every component a non-negative integer in `[0, 255]`.
    ByteRgb,
    /// Out of range for both RGB encodings.
    Lab,
}

impl ColorModel {
    /// Classify a triplet.
    pub fn classify(components: Triplet) -> Self {
        let (c0, c1, c2) = components;
        if is_byte_rgb(components) && [c0, c1, c2].iter().any(|&c| c > 1.0) {
            return ColorModel::ByteRgb;
        }
        if is_likely_lab(components) {
            ColorModel::Lab
        } else {
            ColorModel::UnitRgb
        }
    }
}

/// Returns true when the triplet cannot be read as either normalized or
/// 8-bit RGB.
///
/// A triplet is LAB when any component is negative or strictly greater than
/// 1.0, unless the whole triplet is made of non-negative integers no larger
/// than 255.
///
/// # Example
/// ```
/// use layerscene_core::color::is_likely_lab;
///
/// assert!(!is_likely_lab((0.5, 0.5, 0.5)));
/// assert!(!is_likely_lab((128.0, 128.0, 128.0)));
/// assert!(is_likely_lab((0.8, 0.5, -0.2)));
/// ```
pub fn is_likely_lab(components: Triplet) -> bool {
    let (c0, c1, c2) = components;
    let out_of_unit = [c0, c1, c2].iter().any(|&c| c < 0.0 || c > 1.0);
    out_of_unit && !is_byte_rgb(components)
}

fn is_byte_rgb(components: Triplet) -> bool {
    let (c0, c1, c2) = components;
    [c0, c1, c2]
        .iter()
        .all(|&c| (0.0..=255.0).contains(&c) && c.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_rgb_needs_whole_numbers() {
        assert!(is_byte_rgb((0.0, 128.0, 255.0)));
        assert!(!is_byte_rgb((0.0, 128.5, 255.0)));
        assert!(!is_byte_rgb((0.0, 128.0, 256.0)));
        assert!(!is_byte_rgb((-1.0, 128.0, 255.0)));
    }

    #[test]
    fn classify_prefers_unit_rgb_for_zero_and_one() {
        assert_eq!(ColorModel::classify((1.0, 0.0, 1.0)), ColorModel::UnitRgb);
        assert_eq!(ColorModel::classify((0.0, 0.0, 0.0)), ColorModel::UnitRgb);
        assert_eq!(
            ColorModel::classify((255.0, 0.0, 12.0)),
            ColorModel::ByteRgb
        );
        assert_eq!(ColorModel::classify((1.2, 0.9, 0.1)), ColorModel::Lab);
    }

    #[test]
    fn non_finite_is_never_lab() {
        assert!(!is_likely_lab((f64::NAN, 0.5, 0.5)));
    }
}
