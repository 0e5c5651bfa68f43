//! Image service — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image::ImageReader` |
//! | **Filter/resize** | `resize_exact` per filter kind, custom EPX for Scale2x |
//! | **Save, generic** | `DynamicImage::save` (format from extension) |
//! | **Save → JPEG** | `JpegEncoder` at caller quality |
//!
//! The module is split into:
//! - **Calculations**: pure functions for auto-dimension math (unit testable)
//! - **Service**: [`ImageService`] trait, [`EdgeMode`], errors
//! - **RustService**: the production implementation

mod calculations;
pub mod rust_service;
pub mod service;

pub use calculations::resolve_target;
pub use rust_service::RustService;
pub use service::{EdgeMode, ImageService, ServiceError};
