//! Production backend built on the `image` crate and libwebp.
//!
//! ## Crate mapping
//!
//! | Step | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::ImageReader`, format sniffed from content |
//! | EXIF orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Flatten to RGB | `DynamicImage::into_rgb8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Encode → WebP (lossy) | `webp::Encoder` |

use super::backend::{BackendError, Converted, Dimensions, ImageBackend};
use super::calculations::fit_within;
use super::params::ConvertParams;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use std::path::Path;

pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image and rotate/flip it upright according to its EXIF tag.
///
/// A missing or unreadable orientation tag leaves the pixels as decoded.
fn load_oriented(path: &Path) -> Result<DynamicImage, BackendError> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()
        .map_err(|e| BackendError::Decode(e.to_string()))?;
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);
    let mut img =
        DynamicImage::from_decoder(decoder).map_err(|e| BackendError::Decode(e.to_string()))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Encode as lossy WebP and write to `path`.
fn save_webp(img: &RgbImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let encoded = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height())
        .encode_simple(false, quality as f32)
        .map_err(|e| BackendError::Encode(format!("{e:?}")))?;
    std::fs::write(path, &*encoded)?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn convert(&self, params: &ConvertParams) -> Result<Converted, BackendError> {
        let rgb = load_oriented(&params.source)?.into_rgb8();
        let oriented = Dimensions {
            width: rgb.width(),
            height: rgb.height(),
        };

        let (width, height) = fit_within((oriented.width, oriented.height), params.bounds);
        let fitted = if (width, height) == (oriented.width, oriented.height) {
            rgb
        } else {
            image::imageops::resize(&rgb, width, height, FilterType::Lanczos3)
        };

        save_webp(&fitted, &params.output, params.quality.value())?;
        Ok(Converted {
            oriented,
            output: Dimensions { width, height },
        })
    }
}
