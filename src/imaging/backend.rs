//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the one seam between the batch run and the
//! pixel work. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests swap in the
//! recording [`MockBackend`](tests::MockBackend).

use super::params::ConvertParams;
use thiserror::Error;

/// Per-file failure. The run reports it and moves on to the next file.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode: {0}")]
    Decode(String),
    #[error("Failed to encode: {0}")]
    Encode(String),
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    /// Dimensions after EXIF orientation was applied, before resizing.
    pub oriented: Dimensions,
    /// Dimensions of the written file.
    pub output: Dimensions,
}

pub trait ImageBackend {
    /// Decode, orient, flatten to RGB, fit to bounds, and encode to `params.output`.
    fn convert(&self, params: &ConvertParams) -> Result<Converted, BackendError>;
}
