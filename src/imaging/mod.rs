//! Image conversion: decode, orient, flatten, fit, encode.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Decode + orient** | `image` reader, EXIF orientation applied on load |
//! | **Fit** | [`fit_within`] + Lanczos3 resampling |
//! | **Encode** | lossy WebP via `webp` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a conversion
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Converted, Dimensions, ImageBackend};
pub use calculations::fit_within;
pub use params::{Bounds, ConvertParams, Quality};
pub use rust_backend::RustBackend;
