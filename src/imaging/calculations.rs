//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::Bounds;

/// Calculate the dimensions of an image scaled down to fit inside `bounds`.
///
/// Aspect ratio is preserved and the result never exceeds either bound.
/// Images that already fit are returned unchanged; there is no upscaling.
///
/// The scaled edge is rounded to the nearest pixel, so a source within half a
/// pixel of square can come out square: 2401x2400 fits to 1200x1200.
///
/// # Examples
/// ```
/// # use photo_prep::imaging::{Bounds, fit_within};
/// let bounds = Bounds { width: 1200, height: 1200 };
///
/// // 16:9 landscape, width is the limiting edge
/// assert_eq!(fit_within((1600, 900), bounds), (1200, 675));
///
/// // Already inside the box
/// assert_eq!(fit_within((400, 400), bounds), (400, 400));
/// ```
pub fn fit_within(original: (u32, u32), bounds: Bounds) -> (u32, u32) {
    let (w, h) = original;
    if w <= bounds.width && h <= bounds.height {
        return original;
    }

    let scale_w = bounds.width as f64 / w as f64;
    let scale_h = bounds.height as f64 / h as f64;

    if scale_w <= scale_h {
        // Width is the limiting edge
        let out_h = (h as f64 * scale_w).round() as u32;
        (bounds.width, out_h.clamp(1, bounds.height))
    } else {
        let out_w = (w as f64 * scale_h).round() as u32;
        (out_w.clamp(1, bounds.width), bounds.height)
    }
}
