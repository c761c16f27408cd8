//! Pointer up / leave - end the current gesture.

use crate::input::controller::InteractionController;
use crate::input::state::{InteractionState, ReleaseReason};
use tracing::debug;

impl InteractionController {
    /// End any gesture in progress and return to `Idle`.
    ///
    /// Returns the state that was active so the caller can finalize it.
    pub fn release(&mut self, reason: ReleaseReason) -> InteractionState {
        let previous = self.state.reset();
        if !previous.is_idle() {
            debug!(surface = %self.surface, ?reason, region = %self.region, "Gesture ended -> Idle");
        }
        previous
    }

    pub fn pointer_up(&mut self) -> InteractionState {
        self.release(ReleaseReason::PointerUp)
    }

    pub fn pointer_leave(&mut self) -> InteractionState {
        self.release(ReleaseReason::PointerLeave)
    }

    pub fn global_pointer_up(&mut self) -> InteractionState {
        self.release(ReleaseReason::GlobalPointerUp)
    }
}
