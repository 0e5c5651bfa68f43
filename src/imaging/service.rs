//! Image service trait and shared types.
//!
//! The [`ImageService`] trait defines the four operations the interpreter
//! needs: load, apply_filter, save, and quality-controlled JPEG encode, plus
//! an encoder capability probe.
//!
//! The production implementation is
//! [`RustService`](super::rust_service::RustService) — pure Rust on the
//! `image` crate, statically linked. The associated `Image` type keeps the
//! pixel handle opaque to the interpreter, so tests substitute a recording
//! mock that never touches a codec.

use crate::filters::FilterKind;
use crate::parse::DimensionSpec;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Out-of-bounds sampling policy for filters that read past the image edge.
///
/// The interpreter always requests `Constant` on both axes; `Wrap` exists for
/// the sampling helpers and their tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Replicate the nearest edge pixel (constant extension).
    Constant,
    /// Wrap around to the opposite edge.
    Wrap,
}

/// Trait for image service implementations.
///
/// `apply_filter` consumes the input image by value: the interpreter's repeat
/// loop hands over its buffer image and stores the returned successor, so
/// every intermediate handle is released exactly once and never aliased.
pub trait ImageService {
    /// Opaque image handle.
    type Image;

    /// Decode an image from disk.
    fn load(&self, path: &Path) -> Result<Self::Image, ServiceError>;

    /// Apply one filter pass, producing a new image at the resolved target
    /// size. A `0` axis in `spec` means auto (see
    /// [`resolve_target`](super::calculations::resolve_target)).
    fn apply_filter(
        &self,
        image: Self::Image,
        kind: FilterKind,
        spec: DimensionSpec,
        edge: EdgeMode,
    ) -> Result<Self::Image, ServiceError>;

    /// Encode to disk, format inferred from the path's extension.
    fn save(&self, image: &Self::Image, path: &Path) -> Result<(), ServiceError>;

    /// Encode to disk as JPEG at the given quality (1-100).
    fn save_jpeg(&self, image: &Self::Image, path: &Path, quality: u8)
    -> Result<(), ServiceError>;

    /// Whether a JPEG encoder is compiled in.
    fn has_jpeg_encoder(&self) -> bool;
}
