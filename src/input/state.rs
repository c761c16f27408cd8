//! Interaction state machine for one surface.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down inside the region, not on the handle)
//! Idle -> Resizing    (pointer down on the bottom-right handle)
//! Idle -> Idle        (pointer down outside the region)
//!
//! Dragging | Resizing -> Idle   (pointer up, pointer leave, global pointer up)
//! ```

use crate::types::{Point, Region};

/// Current gesture on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Moving the region
    Dragging {
        /// Last applied pointer position in image space
        anchor: Point,
    },

    /// Resizing from the bottom-right corner
    Resizing {
        /// Region when the gesture started
        start: Region,
    },
}

/// The kind of gesture a pointer press started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag,
    Resize,
}

/// Why a gesture ended. All reasons lead back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    PointerUp,
    PointerLeave,
    GlobalPointerUp,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The gesture in progress, if any.
    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(Gesture::Drag),
            Self::Resizing { .. } => Some(Gesture::Resize),
        }
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            _ => None,
        }
    }

    pub fn resize_start(&self) -> Option<Region> {
        match self {
            Self::Resizing { start } => Some(*start),
            _ => None,
        }
    }

    pub fn start_dragging(&mut self, anchor: Point) {
        *self = Self::Dragging { anchor };
    }

    pub fn start_resizing(&mut self, start: Region) {
        *self = Self::Resizing { start };
    }

    pub fn update_anchor(&mut self, point: Point) {
        if let Self::Dragging { anchor } = self {
            *anchor = point;
        }
    }

    /// Return to `Idle`, handing back the state that was active.
    pub fn reset(&mut self) -> InteractionState {
        std::mem::take(self)
    }
}
