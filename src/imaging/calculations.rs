//! Pure calculation functions for target dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::parse::DimensionSpec;

/// Resolve a dimension spec against a source image size.
///
/// A `0` axis means auto:
/// - both axes auto → source size multiplied by the filter's natural scale
///   (`2` for the pixel-art doubler, `1` for resamplers);
/// - one axis auto → derived from the other, preserving the source aspect
///   ratio, rounded and clamped to at least 1 pixel.
///
/// # Examples
/// ```
/// # use imgbatch::imaging::resolve_target;
/// # use imgbatch::parse::DimensionSpec;
/// let src = DimensionSpec { width: 100, height: 50 };
/// let spec = DimensionSpec { width: 0, height: 25 };
/// assert_eq!(resolve_target(src, spec, 1), DimensionSpec { width: 50, height: 25 });
/// ```
pub fn resolve_target(source: DimensionSpec, spec: DimensionSpec, scale: u32) -> DimensionSpec {
    match (spec.width, spec.height) {
        (0, 0) => DimensionSpec {
            width: source.width * scale,
            height: source.height * scale,
        },
        (0, h) => DimensionSpec {
            width: derive_axis(h, source.width, source.height),
            height: h,
        },
        (w, 0) => DimensionSpec {
            width: w,
            height: derive_axis(w, source.height, source.width),
        },
        (w, h) => DimensionSpec {
            width: w,
            height: h,
        },
    }
}

/// Scale `given` by the source aspect ratio `num/den`, rounding, minimum 1.
fn derive_axis(given: u32, num: u32, den: u32) -> u32 {
    let derived = (given as f64 * num as f64 / den as f64).round() as u32;
    derived.max(1)
}
