//! Pointer move - drag and resize updates.
//!
//! Moves arrive at display refresh rate or faster; the session coalesces them
//! so at most one reaches this code per animation frame.

use crate::input::controller::{InteractionController, RegionUpdate};
use crate::input::coords::CoordinateConverter;
use crate::input::state::InteractionState;
use crate::profile_scope;
use crate::types::{DisplayRect, Point};
use tracing::trace;

impl InteractionController {
    /// Handle a pointer move at a display position.
    pub fn pointer_move(&mut self, pointer: Point, display: DisplayRect) -> Option<RegionUpdate> {
        if self.state.is_idle() {
            return None;
        }
        let ctx = self.coordinate_context(display);
        if !ctx.is_ready() {
            return None;
        }
        let point = CoordinateConverter::display_to_image(pointer, &ctx);
        self.pointer_move_to(point)
    }

    /// Handle a pointer move already expressed in image pixel space.
    pub fn pointer_move_to(&mut self, point: Point) -> Option<RegionUpdate> {
        profile_scope!("pointer_move");

        let update = match self.state {
            InteractionState::Idle => return None,
            InteractionState::Dragging { anchor } => {
                let proposed = self.region.translated(point.delta_from(anchor));
                let update = self.apply(proposed);
                self.state.update_anchor(point);
                update
            }
            InteractionState::Resizing { .. } => {
                let width = (point.x - self.region.x).max(self.min_size);
                let height = (point.y - self.region.y).max(self.min_size);
                self.apply(self.region.with_size(width, height))
            }
        };

        trace!(
            surface = %self.surface,
            proposed = %update.proposed,
            region = %update.region,
            resized = update.resized,
            "Gesture update"
        );
        Some(update)
    }
}
