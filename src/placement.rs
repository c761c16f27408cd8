//! Fit-and-center placement of a design graphic inside a target region.

use crate::constants::{DEFAULT_REGION, FALLBACK_PLACEMENT_SCALE};
use crate::profile_scope;
use crate::types::{DesignPlacement, ImageBounds, PlacementFit, Region};
use tracing::{trace, warn};

/// Largest undistorted placement of `design` inside `target`, centered.
///
/// Returns `None` if the design has no usable natural size.
pub fn compute_fit(design: ImageBounds, target: &Region) -> Option<DesignPlacement> {
    if !design.is_usable() {
        return None;
    }
    profile_scope!("compute_fit");

    let scale = (target.width / design.width).min(target.height / design.height);
    let width = design.width * scale;
    let height = design.height * scale;

    let placement = DesignPlacement {
        x: target.x + (target.width - width) / 2.0,
        y: target.y + (target.height - height) / 2.0,
        width,
        height,
        rotation: 0.0,
        scale,
        fit: PlacementFit::Fitted,
    };
    trace!(?placement, "Computed design fit");
    Some(placement)
}

/// Centered placement inset by 10% of the target on each side, used when the
/// design's natural size is unknown.
pub fn fallback_placement(target: &Region) -> DesignPlacement {
    let width = target.width * FALLBACK_PLACEMENT_SCALE;
    let height = target.height * FALLBACK_PLACEMENT_SCALE;
    DesignPlacement {
        x: target.x + (target.width - width) / 2.0,
        y: target.y + (target.height - height) / 2.0,
        width,
        height,
        rotation: 0.0,
        scale: FALLBACK_PLACEMENT_SCALE,
        fit: PlacementFit::Approximate,
    }
}

/// Places design graphics, falling back to an approximate placement when the
/// design failed to load and to the default region when there is no target.
#[derive(Clone, Copy, Debug)]
pub struct AutoPositioner {
    default_target: Region,
}

impl Default for AutoPositioner {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl AutoPositioner {
    pub fn new(default_target: Region) -> Self {
        Self { default_target }
    }

    /// Placement for a design of `design` natural size (`None` when its size
    /// could not be determined) inside `target` (`None` when no region exists).
    pub fn position(&self, design: Option<ImageBounds>, target: Option<&Region>) -> DesignPlacement {
        let target = target.unwrap_or(&self.default_target);
        match design.and_then(|size| compute_fit(size, target)) {
            Some(placement) => placement,
            None => {
                warn!(%target, "Design size unknown, using approximate placement");
                fallback_placement(target)
            }
        }
    }
}
