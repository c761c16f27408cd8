//! Core types for the print-area engine.
//!
//! This module defines the geometry shared by every component: regions in image
//! pixel space, natural image sizes, display rectangles and design placements.
//! A [`Region`] carries no unit or image identifier, so callers always keep track
//! of which surface it belongs to through [`SurfaceId`].

use crate::constants::{ASPECT_EPSILON, DEFAULT_REGION, PLACEMENT_EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Points and Sizes
// ============================================================================

/// A point in either display or image pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn delta_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Natural (unscaled) pixel dimensions of a loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub width: f64,
    pub height: f64,
}

impl ImageBounds {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    ///
    /// Zero-sized or NaN bounds mean the image is "not ready" rather than broken.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width over height, or `None` for unusable bounds.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.is_usable().then(|| self.width / self.height)
    }
}

/// Where an image is currently laid out on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface that has not been laid out yet has a zero-sized rect.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ============================================================================
// Region
// ============================================================================

/// A rectangle in the pixel space of one specific image.
///
/// Serialized as `{"x": .., "y": .., "width": .., "height": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Bottom-right corner, where the resize handle sits.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Width over height, or `None` when the height is zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height > 0.0 && self.width.is_finite()).then(|| self.width / self.height)
    }

    /// Same size, shifted by `delta`.
    #[inline]
    pub fn translated(&self, delta: Point) -> Region {
        Region::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Same position, new size.
    #[inline]
    pub fn with_size(&self, width: f64, height: f64) -> Region {
        Region::new(self.x, self.y, width, height)
    }

    /// Copy with one field replaced.
    pub fn with_field(&self, field: RegionField, value: f64) -> Region {
        match field {
            RegionField::X => Region { x: value, ..*self },
            RegionField::Y => Region { y: value, ..*self },
            RegionField::Width => Region { width: value, ..*self },
            RegionField::Height => Region { height: value, ..*self },
        }
    }

    /// True if the width or height differs from `other`; position is ignored.
    pub fn size_differs(&self, other: &Region) -> bool {
        (self.width - other.width).abs() > f64::EPSILON
            || (self.height - other.height).abs() > f64::EPSILON
    }

    /// True if all four values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for Region {
    fn default() -> Self {
        DEFAULT_REGION
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) {:.1}x{:.1}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// The template region (source of truth for aspect ratio) and the mockup region
/// kept in proportion with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionPair {
    pub reference: Region,
    pub dependent: Region,
}

impl RegionPair {
    /// True when both regions share the same aspect ratio within `epsilon`.
    pub fn proportions_match(&self, epsilon: f64) -> bool {
        match (self.reference.aspect_ratio(), self.dependent.aspect_ratio()) {
            (Some(a), Some(b)) => (a - b).abs() <= epsilon,
            _ => false,
        }
    }

    /// [`proportions_match`](Self::proportions_match) with the default tolerance.
    pub fn is_in_proportion(&self) -> bool {
        self.proportions_match(ASPECT_EPSILON)
    }
}

// ============================================================================
// Surfaces
// ============================================================================

/// The two interactive surfaces of an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceId {
    /// Vector product template, the reference surface.
    Template,
    /// Raster preview mockup, the dependent surface.
    Mockup,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 2] = [SurfaceId::Template, SurfaceId::Mockup];

    /// The template drives the mockup's proportions, never the reverse.
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, SurfaceId::Template)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceId::Template => "template",
            SurfaceId::Mockup => "mockup",
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric input field bound to one of a region's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionField {
    X,
    Y,
    Width,
    Height,
}

impl RegionField {
    #[inline]
    pub fn is_dimension(&self) -> bool {
        matches!(self, RegionField::Width | RegionField::Height)
    }
}

// ============================================================================
// Design Placement
// ============================================================================

/// Whether a placement was computed from the design's natural size or guessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementFit {
    /// Largest undistorted fit, centered.
    Fitted,
    /// Design size unknown; a centered 10% inset of the target.
    Approximate,
}

/// Where a design graphic is drawn inside a target region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees; auto-positioning never rotates.
    pub rotation: f64,
    pub scale: f64,
    pub fit: PlacementFit,
}

impl DesignPlacement {
    #[inline]
    pub fn is_approximate(&self) -> bool {
        self.fit == PlacementFit::Approximate
    }

    /// The placed rectangle without rotation/scale metadata.
    pub fn bounds(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }

    /// True if the placement lies inside `target`, allowing for float rounding.
    pub fn is_contained_in(&self, target: &Region) -> bool {
        self.x >= target.x - PLACEMENT_EPSILON
            && self.y >= target.y - PLACEMENT_EPSILON
            && self.x + self.width <= target.right() + PLACEMENT_EPSILON
            && self.y + self.height <= target.bottom() + PLACEMENT_EPSILON
    }
}
