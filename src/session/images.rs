//! Image load notifications and design placement.

use super::{DesignState, EditorSession, ImageSlot, SessionEvent};
use crate::types::{ImageBounds, SurfaceId};
use tracing::{debug, warn};

impl EditorSession {
    /// An image finished loading with the given natural size.
    ///
    /// For a surface image the region is re-clamped against the new bounds. A
    /// sync deferred while the mockup was missing runs now.
    pub fn image_loaded(&mut self, slot: ImageSlot, natural: ImageBounds) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let Some(surface) = slot.surface() else {
            debug!(?natural, "Design graphic loaded");
            self.design = DesignState::Loaded(natural);
            self.refresh_placement(&mut events);
            return events;
        };

        if !natural.is_usable() {
            warn!(%surface, ?natural, "Image loaded with unusable size, treating as unavailable");
            return self.image_failed(slot);
        }

        let surface_slot = self.slot_mut(surface);
        surface_slot.has_region = true;
        let update = surface_slot.controller.set_bounds(Some(natural));

        match update {
            Some(update) => {
                self.region_changed(surface, update.region, &mut events);
                if update.resized && surface.is_reference() {
                    self.run_sync(&mut events);
                }
            }
            // Newly available target without a region change still needs a placement
            None if self.settings.placement_target == surface => self.refresh_placement(&mut events),
            None => {}
        }

        if surface == SurfaceId::Mockup && self.sync_deferred {
            self.run_sync(&mut events);
        }
        events
    }

    /// An image failed to load. A failed surface becomes unavailable; a failed
    /// design gets an approximate placement.
    pub fn image_failed(&mut self, slot: ImageSlot) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let Some(surface) = slot.surface() else {
            warn!("Design graphic failed to load");
            self.design = DesignState::Failed;
            self.refresh_placement(&mut events);
            return events;
        };

        warn!(%surface, "Surface image failed to load");
        let surface_slot = self.slot_mut(surface);
        surface_slot.controller.set_bounds(None);
        surface_slot.pending.cancel();
        if self.active == Some(surface) {
            self.active = None;
        }
        events
    }

    /// Recompute the design placement against the target surface's region.
    pub(crate) fn refresh_placement(&mut self, events: &mut Vec<SessionEvent>) {
        if self.design == DesignState::Pending {
            return;
        }

        let target_slot = self.slot(self.settings.placement_target);
        let target = target_slot
            .has_region
            .then(|| target_slot.controller.region());
        let placement = self
            .positioner
            .position(self.design.natural_size(), target.as_ref());

        if self.placement != Some(placement) {
            self.placement = Some(placement);
            events.push(SessionEvent::PlacementChanged(placement));
        }
    }
}
