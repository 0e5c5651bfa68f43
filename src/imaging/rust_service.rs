//! Pure Rust image service — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resample filters | `DynamicImage::resize_exact` with the mapped `FilterType` |
//! | Scale2x | custom EPX pass over RGBA8 (honors [`EdgeMode`]) |
//! | Encode, generic | `DynamicImage::save` (format from extension) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at caller quality |

use super::calculations::resolve_target;
use super::service::{EdgeMode, ImageService, ServiceError};
use crate::filters::FilterKind;
use crate::parse::DimensionSpec;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust service using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustService;

impl RustService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustService {
    fn default() -> Self {
        Self::new()
    }
}

fn filter_type(kind: FilterKind) -> FilterType {
    match kind {
        FilterKind::Pixel => FilterType::Nearest,
        FilterKind::Smooth => FilterType::Triangle,
        FilterKind::Catrom => FilterType::CatmullRom,
        FilterKind::Gauss => FilterType::Gaussian,
        FilterKind::Lanczos => FilterType::Lanczos3,
        // Scale2x is not a resampler; its target adjustment uses Nearest.
        FilterKind::Scale2x => FilterType::Nearest,
    }
}

/// Read a pixel with out-of-bounds coordinates resolved per the edge mode.
fn sample(buf: &RgbaImage, x: i64, y: i64, edge: EdgeMode) -> Rgba<u8> {
    let (w, h) = buf.dimensions();
    let (x, y) = match edge {
        EdgeMode::Constant => (x.clamp(0, w as i64 - 1), y.clamp(0, h as i64 - 1)),
        EdgeMode::Wrap => (x.rem_euclid(w as i64), y.rem_euclid(h as i64)),
    };
    *buf.get_pixel(x as u32, y as u32)
}

/// One EPX/Scale2x pass: each source pixel becomes a 2x2 block.
///
/// For pixel E with neighbors B (above), D (left), F (right), H (below), the
/// block is E unless two orthogonal neighbors match without the opposing pair
/// also matching.
fn scale2x(src: &RgbaImage, edge: EdgeMode) -> RgbaImage {
    let (w, h) = src.dimensions();
    let mut out = RgbaImage::new(w * 2, h * 2);
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let e = sample(src, x, y, edge);
            let b = sample(src, x, y - 1, edge);
            let d = sample(src, x - 1, y, edge);
            let f = sample(src, x + 1, y, edge);
            let g = sample(src, x, y + 1, edge);

            let (e0, e1, e2, e3) = if b != g && d != f {
                (
                    if d == b { d } else { e },
                    if b == f { f } else { e },
                    if d == g { d } else { e },
                    if g == f { f } else { e },
                )
            } else {
                (e, e, e, e)
            };

            let (ox, oy) = (2 * x as u32, 2 * y as u32);
            out.put_pixel(ox, oy, e0);
            out.put_pixel(ox + 1, oy, e1);
            out.put_pixel(ox, oy + 1, e2);
            out.put_pixel(ox + 1, oy + 1, e3);
        }
    }
    out
}

impl ImageService for RustService {
    type Image = DynamicImage;

    fn load(&self, path: &Path) -> Result<DynamicImage, ServiceError> {
        ImageReader::open(path)
            .map_err(ServiceError::Io)?
            .decode()
            .map_err(|e| {
                ServiceError::Decode(format!("failed to decode {}: {}", path.display(), e))
            })
    }

    fn apply_filter(
        &self,
        image: DynamicImage,
        kind: FilterKind,
        spec: DimensionSpec,
        edge: EdgeMode,
    ) -> Result<DynamicImage, ServiceError> {
        let source = DimensionSpec {
            width: image.width(),
            height: image.height(),
        };
        let target = resolve_target(source, spec, kind.natural_scale());

        let result = match kind {
            FilterKind::Scale2x => {
                let doubled = DynamicImage::ImageRgba8(scale2x(&image.into_rgba8(), edge));
                if doubled.width() == target.width && doubled.height() == target.height {
                    doubled
                } else {
                    doubled.resize_exact(target.width, target.height, FilterType::Nearest)
                }
            }
            _ => image.resize_exact(target.width, target.height, filter_type(kind)),
        };
        Ok(result)
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), ServiceError> {
        image.save(path).map_err(|e| {
            ServiceError::Encode(format!("failed to save {}: {}", path.display(), e))
        })
    }

    fn save_jpeg(
        &self,
        image: &DynamicImage,
        path: &Path,
        quality: u8,
    ) -> Result<(), ServiceError> {
        let file = File::create(path).map_err(ServiceError::Io)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        // JPEG has no alpha channel.
        image.to_rgb8().write_with_encoder(encoder).map_err(|e| {
            ServiceError::Encode(format!("failed to encode {}: {}", path.display(), e))
        })
    }

    fn has_jpeg_encoder(&self) -> bool {
        ImageFormat::Jpeg.writing_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn sample_constant_clamps_to_edge() {
        let buf = checkerboard(4, 4);
        assert_eq!(
            sample(&buf, -1, 0, EdgeMode::Constant),
            *buf.get_pixel(0, 0)
        );
        assert_eq!(
            sample(&buf, 4, 3, EdgeMode::Constant),
            *buf.get_pixel(3, 3)
        );
    }

    #[test]
    fn sample_wrap_goes_around() {
        let buf = checkerboard(4, 4);
        assert_eq!(sample(&buf, -1, 0, EdgeMode::Wrap), *buf.get_pixel(3, 0));
        assert_eq!(sample(&buf, 4, 0, EdgeMode::Wrap), *buf.get_pixel(0, 0));
    }

    #[test]
    fn scale2x_doubles_dimensions() {
        let out = scale2x(&checkerboard(3, 5), EdgeMode::Constant);
        assert_eq!(out.dimensions(), (6, 10));
    }

    #[test]
    fn scale2x_uniform_image_stays_uniform() {
        let flat = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let out = scale2x(&flat, EdgeMode::Constant);
        assert!(out.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn apply_filter_explicit_dimensions() {
        let service = RustService::new();
        let img = DynamicImage::ImageRgba8(checkerboard(8, 8));
        let out = service
            .apply_filter(
                img,
                FilterKind::Pixel,
                DimensionSpec {
                    width: 4,
                    height: 2,
                },
                EdgeMode::Constant,
            )
            .unwrap();
        assert_eq!((out.width(), out.height()), (4, 2));
    }

    #[test]
    fn apply_filter_auto_uses_scale2x_natural_scale() {
        let service = RustService::new();
        let img = DynamicImage::ImageRgba8(checkerboard(8, 6));
        let out = service
            .apply_filter(
                img,
                FilterKind::Scale2x,
                DimensionSpec {
                    width: 0,
                    height: 0,
                },
                EdgeMode::Constant,
            )
            .unwrap();
        assert_eq!((out.width(), out.height()), (16, 12));
    }

    #[test]
    fn apply_filter_auto_resampler_keeps_size() {
        let service = RustService::new();
        let img = DynamicImage::ImageRgba8(checkerboard(8, 6));
        let out = service
            .apply_filter(
                img,
                FilterKind::Lanczos,
                DimensionSpec {
                    width: 0,
                    height: 0,
                },
                EdgeMode::Constant,
            )
            .unwrap();
        assert_eq!((out.width(), out.height()), (8, 6));
    }

    #[test]
    fn scale2x_adjusts_to_explicit_target() {
        let service = RustService::new();
        let img = DynamicImage::ImageRgba8(checkerboard(8, 8));
        let out = service
            .apply_filter(
                img,
                FilterKind::Scale2x,
                DimensionSpec {
                    width: 10,
                    height: 10,
                },
                EdgeMode::Constant,
            )
            .unwrap();
        assert_eq!((out.width(), out.height()), (10, 10));
    }

    #[test]
    fn jpeg_encoder_is_compiled_in() {
        assert!(RustService::new().has_jpeg_encoder());
    }
}
