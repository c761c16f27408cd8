//! Pointer down - classify the press and start a drag or resize.

use crate::hit_testing::HitTarget;
use crate::input::coords::CoordinateConverter;
use crate::input::controller::InteractionController;
use crate::input::state::Gesture;
use crate::types::{DisplayRect, Point};
use tracing::debug;

impl InteractionController {
    /// Handle a pointer press at a display position.
    ///
    /// Returns the gesture started, or `None` if the press missed the region,
    /// the surface is not ready, or a gesture is already in progress.
    pub fn pointer_down(&mut self, pointer: Point, display: DisplayRect) -> Option<Gesture> {
        let ctx = self.coordinate_context(display);
        if !ctx.is_ready() {
            return None;
        }
        let point = CoordinateConverter::display_to_image(pointer, &ctx);
        self.pointer_down_at(point)
    }

    /// Handle a pointer press already expressed in image pixel space.
    pub fn pointer_down_at(&mut self, point: Point) -> Option<Gesture> {
        if !self.is_available() || !self.state.is_idle() {
            return None;
        }

        match self.hit_tester.classify(point, &self.region) {
            HitTarget::ResizeHandle => {
                self.state.start_resizing(self.region);
                debug!(surface = %self.surface, ?point, region = %self.region, "Idle -> Resizing");
                Some(Gesture::Resize)
            }
            HitTarget::Body => {
                self.state.start_dragging(point);
                debug!(surface = %self.surface, ?point, region = %self.region, "Idle -> Dragging");
                Some(Gesture::Drag)
            }
            HitTarget::Outside => None,
        }
    }
}
