//! Editing session: the template and mockup surfaces, the one-way proportion
//! sync between them, and the design placement.
//!
//! The session is what a renderer talks to. It is single-threaded and fully
//! synchronous; time only enters through the `now` passed to
//! [`EditorSession::animation_frame`].
//!
//! ## Modules
//!
//! - `pointer` - Pointer routing, per-frame coalescing, gesture release
//! - `images` - Image load notifications and design placement
//! - `fields` - Numeric input fields
//! - `frame` - `FrameCoalescer`, newest-wins pending slot
//! - `debounce` - `Debouncer` for settled synchronization
//! - `events` - `SessionEvent`, `ImageSlot`, `DesignState`

mod debounce;
mod events;
mod fields;
mod frame;
mod images;
mod pointer;

pub use debounce::Debouncer;
pub use events::{DesignState, ImageSlot, SessionEvent};
pub use frame::FrameCoalescer;

use crate::error::StoreResult;
use crate::input::{InteractionController, InteractionState};
use crate::placement::AutoPositioner;
use crate::profile_scope;
use crate::settings::EngineSettings;
use crate::store::RegionStore;
use crate::sync::sync_dependent_to_reference;
use crate::types::{DesignPlacement, DisplayRect, Point, Region, RegionPair, SurfaceId};
use tracing::{debug, info};

/// A pointer move waiting for the next animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PendingMove {
    pub pointer: Point,
    pub display: DisplayRect,
}

/// One interactive surface and its session bookkeeping.
#[derive(Debug)]
pub(crate) struct SurfaceSlot {
    pub controller: InteractionController,
    pub pending: FrameCoalescer<PendingMove>,
    /// A region exists for real: restored from a store or backed by a loaded image
    pub has_region: bool,
}

impl SurfaceSlot {
    fn new(surface: SurfaceId, settings: &EngineSettings) -> Self {
        Self {
            controller: InteractionController::new(
                surface,
                settings.default_region,
                settings.interaction_config(),
            ),
            pending: FrameCoalescer::new(),
            has_region: false,
        }
    }
}

/// Interactive editing of a template/mockup print-area pair.
#[derive(Debug)]
pub struct EditorSession {
    pub(crate) settings: EngineSettings,
    pub(crate) template: SurfaceSlot,
    pub(crate) mockup: SurfaceSlot,
    pub(crate) active: Option<SurfaceId>,
    pub(crate) sync: Debouncer,
    /// A sync came due while the mockup image was unavailable
    pub(crate) sync_deferred: bool,
    pub(crate) design: DesignState,
    pub(crate) positioner: AutoPositioner,
    pub(crate) placement: Option<DesignPlacement>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl EditorSession {
    /// A fresh session with default regions on both surfaces.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            template: SurfaceSlot::new(SurfaceId::Template, &settings),
            mockup: SurfaceSlot::new(SurfaceId::Mockup, &settings),
            active: None,
            sync: Debouncer::new(settings.sync_debounce()),
            sync_deferred: false,
            design: DesignState::Pending,
            positioner: AutoPositioner::new(settings.default_region),
            placement: None,
            settings,
        }
    }

    /// Start a session from persisted regions. Surfaces with nothing stored
    /// keep the default region.
    pub fn restore(settings: EngineSettings, store: &dyn RegionStore) -> StoreResult<Self> {
        let mut session = Self::new(settings);
        for surface in SurfaceId::ALL {
            if let Some(region) = store.load(surface)? {
                session.restore_region(surface, region);
            }
        }
        Ok(session)
    }

    /// Put a previously persisted region back on `surface`, clamped to the
    /// surface's bounds if its image is already loaded.
    ///
    /// Restoring a differently sized template while the mockup image is
    /// loaded reshapes the mockup right away.
    pub fn restore_region(&mut self, surface: SurfaceId, region: Region) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let slot = self.slot_mut(surface);
        let before = slot.controller.region();
        let restored = slot.controller.set_region(region);
        slot.has_region = true;
        info!(%surface, region = %restored, "Restored region");
        if restored != before {
            self.region_changed(surface, restored, &mut events);
        }
        if surface.is_reference()
            && restored.size_differs(&before)
            && self.mockup.controller.bounds().is_some()
        {
            self.run_sync(&mut events);
        }
        events
    }

    /// Persist both regions. Only ever called on an explicit user action.
    pub fn save(&self, store: &dyn RegionStore) -> StoreResult<()> {
        for surface in SurfaceId::ALL {
            self.save_surface(surface, store)?;
        }
        Ok(())
    }

    pub fn save_surface(&self, surface: SurfaceId, store: &dyn RegionStore) -> StoreResult<()> {
        store.save(surface, &self.region(surface))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn region(&self, surface: SurfaceId) -> Region {
        self.slot(surface).controller.region()
    }

    pub fn region_pair(&self) -> RegionPair {
        RegionPair {
            reference: self.template.controller.region(),
            dependent: self.mockup.controller.region(),
        }
    }

    pub fn controller(&self, surface: SurfaceId) -> &InteractionController {
        &self.slot(surface).controller
    }

    pub fn interaction_state(&self, surface: SurfaceId) -> InteractionState {
        self.slot(surface).controller.state()
    }

    /// The surface with a gesture in progress, if any.
    pub fn active_surface(&self) -> Option<SurfaceId> {
        self.active
    }

    /// True if a reference resize is waiting for its quiet period.
    pub fn is_sync_pending(&self) -> bool {
        self.sync.is_pending()
    }

    /// True if a sync is waiting for the mockup image to load.
    pub fn is_sync_deferred(&self) -> bool {
        self.sync_deferred
    }

    pub fn design_state(&self) -> DesignState {
        self.design
    }

    /// Current design placement; `None` until a design load has resolved.
    pub fn placement(&self) -> Option<DesignPlacement> {
        self.placement
    }

    /// Apply reloaded settings. Regions are re-clamped to the new minimum
    /// size, and a template that changed size reshapes the mockup.
    pub fn update_settings(&mut self, settings: EngineSettings) -> Vec<SessionEvent> {
        let config = settings.interaction_config();
        self.sync.set_delay(settings.sync_debounce());
        self.positioner = AutoPositioner::new(settings.default_region);
        self.settings = settings;
        debug!(settings = ?self.settings, "Session settings updated");

        let mut events = Vec::new();
        let mut reference_resized = false;
        for surface in SurfaceId::ALL {
            let slot = self.slot_mut(surface);
            let before = slot.controller.region();
            let after = slot.controller.set_config(config);
            if after != before {
                reference_resized |= surface.is_reference() && after.size_differs(&before);
                self.region_changed(surface, after, &mut events);
            }
        }
        if reference_resized {
            self.run_sync(&mut events);
        }
        self.refresh_placement(&mut events);
        events
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    pub(crate) fn slot(&self, surface: SurfaceId) -> &SurfaceSlot {
        match surface {
            SurfaceId::Template => &self.template,
            SurfaceId::Mockup => &self.mockup,
        }
    }

    pub(crate) fn slot_mut(&mut self, surface: SurfaceId) -> &mut SurfaceSlot {
        match surface {
            SurfaceId::Template => &mut self.template,
            SurfaceId::Mockup => &mut self.mockup,
        }
    }

    /// Reshape the mockup to the template's proportions now, or defer until
    /// the mockup image is available.
    pub(crate) fn run_sync(&mut self, events: &mut Vec<SessionEvent>) {
        profile_scope!("run_sync");
        self.sync.cancel();

        let Some(bounds) = self.mockup.controller.bounds() else {
            debug!("Mockup unavailable, deferring sync");
            self.sync_deferred = true;
            return;
        };
        self.sync_deferred = false;

        let reference = self.template.controller.region();
        let before = self.mockup.controller.region();
        let synced = sync_dependent_to_reference(
            &reference,
            &before,
            bounds,
            self.mockup.controller.min_size(),
        );
        let region = self.mockup.controller.set_region(synced);
        if !self.region_pair().is_in_proportion() {
            debug!(%reference, %region, "Mockup too small to hold the template proportions");
        }
        if region != before {
            events.push(SessionEvent::DependentSynced { region });
            if self.settings.placement_target == SurfaceId::Mockup {
                self.refresh_placement(events);
            }
        }
    }

    /// Record a region change of `surface` and follow it with a placement
    /// refresh when that surface is the placement target.
    pub(crate) fn region_changed(
        &mut self,
        surface: SurfaceId,
        region: Region,
        events: &mut Vec<SessionEvent>,
    ) {
        events.push(SessionEvent::RegionChanged { surface, region });
        if self.settings.placement_target == surface {
            self.refresh_placement(events);
        }
    }
}
