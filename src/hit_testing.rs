//! Hit testing for a region and its resize handle.
//!
//! The handle is a square centered on the region's bottom-right corner. It is
//! checked before the body, so a press in the overlapping corner resizes.

use crate::constants::HANDLE_SIZE;
use crate::types::{Point, Region};

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    ResizeHandle,
    Body,
    Outside,
}

/// Inclusive containment test.
#[inline]
pub fn is_inside_region(x: f64, y: f64, region: &Region) -> bool {
    x >= region.x && x <= region.right() && y >= region.y && y <= region.bottom()
}

/// True if `(x, y)` is inside the `handle_size` square centered on the
/// bottom-right corner.
#[inline]
pub fn is_on_resize_handle(x: f64, y: f64, region: &Region, handle_size: f64) -> bool {
    let half = handle_size / 2.0;
    let corner = region.bottom_right();
    (x - corner.x).abs() <= half && (y - corner.y).abs() <= half
}

/// Classifies pointer presses against a region.
#[derive(Clone, Copy, Debug)]
pub struct HitTester {
    handle_size: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}

impl HitTester {
    pub fn new() -> Self {
        Self::with_handle_size(HANDLE_SIZE)
    }

    pub fn with_handle_size(handle_size: f64) -> Self {
        Self {
            handle_size: handle_size.max(0.0),
        }
    }

    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    pub fn classify(&self, point: Point, region: &Region) -> HitTarget {
        if is_on_resize_handle(point.x, point.y, region, self.handle_size) {
            HitTarget::ResizeHandle
        } else if is_inside_region(point.x, point.y, region) {
            HitTarget::Body
        } else {
            HitTarget::Outside
        }
    }
}
