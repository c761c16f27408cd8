//! Keeps regions inside their image and above the minimum size.
//!
//! Every mutation of a region (drag, resize, numeric edit, synchronization,
//! image reload) goes through [`clamp_region`] before it is emitted.

use crate::types::{ImageBounds, Region};

/// Clamp `region` into `[0, bounds_width] x [0, bounds_height]`.
///
/// The size is brought up to `min_size` before the position is clamped, so a
/// too-small region near the right or bottom edge is pushed inward instead of
/// being left under-sized. When the image itself is smaller than `min_size`
/// the region is clipped to the image and the minimum no longer holds.
///
/// The result is idempotent: clamping a clamped region returns it unchanged.
pub fn clamp_region(region: Region, bounds_width: f64, bounds_height: f64, min_size: f64) -> Region {
    let (x, width) = clamp_axis(region.x, region.width, bounds_width, min_size);
    let (y, height) = clamp_axis(region.y, region.height, bounds_height, min_size);
    Region::new(x, y, width, height)
}

/// [`clamp_region`] against a loaded image's natural size.
#[inline]
pub fn clamp_to_bounds(region: Region, bounds: ImageBounds, min_size: f64) -> Region {
    clamp_region(region, bounds.width, bounds.height, min_size)
}

/// One axis of the clamp: returns the new `(offset, length)`.
fn clamp_axis(offset: f64, length: f64, extent: f64, min_size: f64) -> (f64, f64) {
    let extent = finite_or_zero(extent).max(0.0);
    let min_size = finite_or_zero(min_size).max(0.0);

    let length = finite_or_zero(length).max(min_size).min(extent);
    let offset = finite_or_zero(offset).clamp(0.0, extent - length);
    (offset, length)
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
