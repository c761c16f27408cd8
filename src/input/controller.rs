//! Per-surface interaction controller: owns the surface's region, its image
//! bounds and the gesture state.

use crate::constants::{HANDLE_SIZE, MIN_REGION_SIZE};
use crate::constraint::clamp_to_bounds;
use crate::hit_testing::HitTester;
use crate::input::coords::CoordinateContext;
use crate::input::state::InteractionState;
use crate::types::{DisplayRect, ImageBounds, Region, SurfaceId};
use tracing::debug;

/// Geometry tunables for a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub min_size: f64,
    pub handle_size: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_REGION_SIZE,
            handle_size: HANDLE_SIZE,
        }
    }
}

/// A region change produced by a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionUpdate {
    pub surface: SurfaceId,
    /// What the gesture asked for, before clamping
    pub proposed: Region,
    /// What was applied
    pub region: Region,
    /// True if width or height changed
    pub resized: bool,
}

/// Drives drag/resize gestures on one surface.
#[derive(Clone, Debug)]
pub struct InteractionController {
    pub(super) surface: SurfaceId,
    pub(super) state: InteractionState,
    pub(super) region: Region,
    pub(super) bounds: Option<ImageBounds>,
    pub(super) hit_tester: HitTester,
    pub(super) min_size: f64,
}

impl InteractionController {
    pub fn new(surface: SurfaceId, region: Region, config: InteractionConfig) -> Self {
        Self {
            surface,
            state: InteractionState::Idle,
            region,
            bounds: None,
            hit_tester: HitTester::with_handle_size(config.handle_size),
            min_size: config.min_size,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn bounds(&self) -> Option<ImageBounds> {
        self.bounds
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// True once the surface's image has loaded with a usable size.
    pub fn is_available(&self) -> bool {
        self.bounds.is_some()
    }

    pub(crate) fn coordinate_context(&self, display: DisplayRect) -> CoordinateContext {
        CoordinateContext::new(display, self.bounds)
    }

    /// Clamp against the current bounds; unclamped while the image is unknown.
    pub(crate) fn constrain(&self, region: Region) -> Region {
        match self.bounds {
            Some(bounds) => clamp_to_bounds(region, bounds, self.min_size),
            None => region,
        }
    }

    /// Apply new tunables (settings reload). The region is re-clamped against
    /// the new minimum size.
    pub fn set_config(&mut self, config: InteractionConfig) -> Region {
        self.hit_tester = HitTester::with_handle_size(config.handle_size);
        self.min_size = config.min_size;
        self.set_region(self.region)
    }

    /// Replace the region (numeric edit, sync, restore). Returns the region
    /// actually stored after clamping.
    pub fn set_region(&mut self, region: Region) -> Region {
        self.region = self.constrain(region);
        self.region
    }

    /// Record the surface image's natural size, or `None` when it failed to
    /// load. The region is re-clamped against new bounds; the returned update
    /// is `Some` only if that changed it.
    pub fn set_bounds(&mut self, bounds: Option<ImageBounds>) -> Option<RegionUpdate> {
        self.bounds = bounds.filter(ImageBounds::is_usable);
        if self.bounds.is_none() {
            // A gesture cannot continue on a surface that lost its image
            self.state.reset();
            return None;
        }

        let before = self.region;
        let after = self.set_region(before);
        debug!(surface = %self.surface, bounds = ?self.bounds, region = %after, "Surface bounds updated");
        (after != before).then(|| RegionUpdate {
            surface: self.surface,
            proposed: before,
            region: after,
            resized: after.size_differs(&before),
        })
    }

    pub(super) fn apply(&mut self, proposed: Region) -> RegionUpdate {
        let before = self.region;
        let region = self.set_region(proposed);
        RegionUpdate {
            surface: self.surface,
            proposed,
            region,
            resized: region.size_differs(&before),
        }
    }
}
