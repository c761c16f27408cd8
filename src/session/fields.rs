//! Numeric input fields for region values.
//!
//! Typed values take the same path as gestures: they are clamped, and a width
//! or height typed on the template syncs the mockup. A dimension typed on the
//! mockup keeps the template's aspect ratio. A typed value is already settled,
//! so no debounce applies.

use super::{EditorSession, SessionEvent};
use crate::sync::edit_dependent_field;
use crate::types::{RegionField, SurfaceId};
use tracing::debug;

impl EditorSession {
    /// Apply `value` to `field` of `surface`'s region.
    ///
    /// Negative and non-finite values are ignored: they are what a half-typed
    /// input produces, not a request to move the region. Edits on a surface
    /// whose image has not loaded are ignored too.
    pub fn apply_field(&mut self, surface: SurfaceId, field: RegionField, value: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !value.is_finite() || value < 0.0 {
            debug!(%surface, ?field, value, "Ignoring unusable field value");
            return events;
        }
        if !self.slot(surface).controller.is_available() {
            debug!(%surface, ?field, "Surface image not loaded, ignoring field edit");
            return events;
        }

        let reference_aspect = self.template.controller.region().aspect_ratio();
        let slot = self.slot_mut(surface);
        let before = slot.controller.region();
        let proposed = if surface.is_reference() {
            before.with_field(field, value)
        } else {
            edit_dependent_field(&before, field, value, reference_aspect)
        };
        let region = slot.controller.set_region(proposed);
        debug!(%surface, ?field, value, %proposed, %region, "Field edit applied");

        if region == before {
            return events;
        }
        self.region_changed(surface, region, &mut events);

        if surface.is_reference() && field.is_dimension() && region.size_differs(&before) {
            self.run_sync(&mut events);
        }
        events
    }
}
