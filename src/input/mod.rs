//! Pointer input handling for a print-area surface.
//!
//! Each surface (template, mockup) gets its own [`InteractionController`]: an
//! explicit `Idle` / `Dragging` / `Resizing` state machine that owns the
//! surface's region and knows nothing about rendering. Display geometry is
//! passed into every call, so controllers can be driven from tests directly.
//!
//! ## Modules
//!
//! - `state` - Interaction state enum and helper methods
//! - `controller` - The controller struct, clamping and bounds handling
//! - `pointer_down` - Hit testing and gesture start
//! - `drag` - Pointer move handling (drag and resize proposals)
//! - `pointer_up` - Gesture end on pointer up / leave
//! - `coords` - Display <-> image space conversion

pub mod coords;
mod controller;
mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use controller::{InteractionConfig, InteractionController, RegionUpdate};
pub use coords::{CoordinateContext, CoordinateConverter, to_image_space};
pub use state::{Gesture, InteractionState, ReleaseReason};
