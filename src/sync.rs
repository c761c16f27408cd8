//! Aspect-ratio synchronization from the template region to the mockup region.
//!
//! Both surfaces show the same physical print zone at different resolutions,
//! so their regions must be similar rectangles. Synchronization only ever flows
//! reference -> dependent and only for size changes; positions stay independent.

use crate::constraint::clamp_to_bounds;
use crate::types::{ImageBounds, Region, RegionField};
use tracing::debug;

/// Reshape `dependent` to the aspect ratio of `reference`.
///
/// The dependent width is kept and the height derived from it. If that height
/// does not fit below the region, the height is fixed to the remaining space and
/// the width derived instead (and likewise if the width then overflows). The
/// result is clamped, so exact proportions are not guaranteed when the mockup
/// image is too small to hold them.
///
/// A degenerate reference (zero width or height) leaves the dependent shape
/// alone apart from clamping.
pub fn sync_dependent_to_reference(
    reference: &Region,
    dependent: &Region,
    dependent_bounds: ImageBounds,
    min_size: f64,
) -> Region {
    let Some(aspect) = reference.aspect_ratio().filter(|a| *a > 0.0 && a.is_finite()) else {
        debug!(%reference, "Reference region has no usable aspect ratio, skipping sync");
        return clamp_to_bounds(*dependent, dependent_bounds, min_size);
    };

    let mut width = dependent.width;
    let mut height = width / aspect;

    let space_below = (dependent_bounds.height - dependent.y).max(0.0);
    if height > space_below {
        height = space_below;
        width = height * aspect;
    }

    let space_right = (dependent_bounds.width - dependent.x).max(0.0);
    if width > space_right {
        width = space_right;
        height = width / aspect;
    }

    let synced = clamp_to_bounds(dependent.with_size(width, height), dependent_bounds, min_size);
    debug!(%reference, before = %dependent, after = %synced, aspect, "Synced dependent region");
    synced
}

/// Apply a typed value to one field of the dependent region, keeping the
/// reference aspect ratio for width/height edits. The result is not clamped.
pub fn edit_dependent_field(
    dependent: &Region,
    field: RegionField,
    value: f64,
    reference_aspect: Option<f64>,
) -> Region {
    let aspect = reference_aspect.filter(|a| *a > 0.0 && a.is_finite());
    match (field, aspect) {
        (RegionField::X | RegionField::Y, _) => dependent.with_field(field, value),
        (RegionField::Width, Some(aspect)) => dependent.with_size(value, value / aspect),
        (RegionField::Height, Some(aspect)) => dependent.with_size(value * aspect, value),
        (RegionField::Width | RegionField::Height, None) => dependent.with_field(field, value),
    }
}
