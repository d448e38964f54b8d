//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! [`process`](crate::process) (which decides what to convert) and the
//! [`backend`](super::backend) (which does the pixel work), so a mock backend
//! can stand in during tests.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Bounding box an output image must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl From<[u32; 2]> for Bounds {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

/// Full specification of one conversion: decode, orient, fit, encode.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub bounds: Bounds,
    pub quality: Quality,
}
