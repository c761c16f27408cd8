//! Pointer routing for the session.
//!
//! Only one surface is active at a time. Moves on the active surface are held
//! in its [`FrameCoalescer`](super::FrameCoalescer) and applied on the next
//! animation frame; a release applies whatever is still pending first so the
//! final pointer position is never lost.

use super::{EditorSession, PendingMove, SessionEvent};
use crate::input::{Gesture, ReleaseReason};
use crate::profile_scope;
use crate::types::{DisplayRect, Point, SurfaceId};
use std::time::Instant;
use tracing::{debug, trace};

impl EditorSession {
    /// Pointer pressed on `surface`. Starts a gesture if the press hit the
    /// region and no other surface is mid-gesture.
    pub fn pointer_down(
        &mut self,
        surface: SurfaceId,
        pointer: Point,
        display: DisplayRect,
    ) -> Option<Gesture> {
        if let Some(active) = self.active {
            if active != surface {
                debug!(%surface, %active, "Ignoring press while another surface is active");
                return None;
            }
        }

        let gesture = self.slot_mut(surface).controller.pointer_down(pointer, display)?;
        self.active = Some(surface);
        Some(gesture)
    }

    /// Pointer moved over `surface`. Recorded for the next frame; replaces any
    /// move still pending. Returns `false` if the surface has no gesture.
    pub fn pointer_move(&mut self, surface: SurfaceId, pointer: Point, display: DisplayRect) -> bool {
        if self.active != Some(surface) {
            return false;
        }
        let pending = &mut self.slot_mut(surface).pending;
        if pending.submit(PendingMove { pointer, display }) {
            trace!(%surface, superseded = pending.superseded_count(), "Superseded pending pointer move");
        }
        true
    }

    /// Apply at most one coalesced move and fire a settled sync.
    pub fn animation_frame(&mut self, now: Instant) -> Vec<SessionEvent> {
        profile_scope!("animation_frame");
        let mut events = Vec::new();

        if let Some(surface) = self.active {
            if self.apply_pending_move(surface, &mut events) {
                self.sync.schedule(now);
            }
        }

        if self.sync.fire_if_due(now) {
            self.run_sync(&mut events);
        }
        events
    }

    pub fn pointer_up(&mut self, surface: SurfaceId) -> Vec<SessionEvent> {
        self.release(surface, ReleaseReason::PointerUp)
    }

    pub fn pointer_leave(&mut self, surface: SurfaceId) -> Vec<SessionEvent> {
        self.release(surface, ReleaseReason::PointerLeave)
    }

    /// Pointer released anywhere in the window, e.g. outside both surfaces.
    pub fn global_pointer_up(&mut self) -> Vec<SessionEvent> {
        match self.active {
            Some(surface) => self.release(surface, ReleaseReason::GlobalPointerUp),
            None => Vec::new(),
        }
    }

    fn release(&mut self, surface: SurfaceId, reason: ReleaseReason) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.active != Some(surface) {
            self.slot_mut(surface).controller.release(reason);
            return events;
        }

        let resized = self.apply_pending_move(surface, &mut events);
        let previous = self.slot_mut(surface).controller.release(reason);
        self.active = None;

        if let Some(start) = previous.resize_start() {
            debug!(%surface, %start, end = %self.region(surface), "Resize finished");
        }

        // A finished reference resize is settled now; no need to wait out the debounce
        let settled = previous.is_resizing()
            && surface.is_reference()
            && (resized || self.sync.is_pending());
        if settled {
            self.run_sync(&mut events);
        }
        events
    }

    /// Returns `true` if the applied move resized the reference surface.
    fn apply_pending_move(&mut self, surface: SurfaceId, events: &mut Vec<SessionEvent>) -> bool {
        let slot = self.slot_mut(surface);
        let Some(pending) = slot.pending.take() else {
            return false;
        };
        let before = slot.controller.region();
        let Some(update) = slot.controller.pointer_move(pending.pointer, pending.display) else {
            return false;
        };
        if update.region == before {
            return false;
        }

        if update.region != update.proposed {
            trace!(%surface, proposed = %update.proposed, region = %update.region, "Clamped gesture");
        }
        self.region_changed(surface, update.region, events);
        update.resized && surface.is_reference()
    }
}
