//! Inputs from image collaborators and outputs to the renderer.

use crate::types::{DesignPlacement, ImageBounds, Region, SurfaceId};

/// Which image a load notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Template,
    Mockup,
    Design,
}

impl ImageSlot {
    /// The interactive surface this image backs, if any.
    pub fn surface(&self) -> Option<SurfaceId> {
        match self {
            ImageSlot::Template => Some(SurfaceId::Template),
            ImageSlot::Mockup => Some(SurfaceId::Mockup),
            ImageSlot::Design => None,
        }
    }
}

impl From<SurfaceId> for ImageSlot {
    fn from(surface: SurfaceId) -> Self {
        match surface {
            SurfaceId::Template => ImageSlot::Template,
            SurfaceId::Mockup => ImageSlot::Mockup,
        }
    }
}

/// Load status of the design graphic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DesignState {
    /// No design yet; nothing to place
    #[default]
    Pending,
    Loaded(ImageBounds),
    Failed,
}

impl DesignState {
    /// Natural size, if known. `None` for a failed load.
    pub fn natural_size(&self) -> Option<ImageBounds> {
        match self {
            DesignState::Loaded(size) => Some(*size),
            _ => None,
        }
    }
}

/// Something the renderer should reflect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A surface's region changed through a gesture, edit, or image reload
    RegionChanged { surface: SurfaceId, region: Region },
    /// The mockup region was reshaped to the template's proportions
    DependentSynced { region: Region },
    /// The design placement was recomputed
    PlacementChanged(DesignPlacement),
}

impl SessionEvent {
    /// The surface whose region this event changed, if any.
    pub fn surface(&self) -> Option<SurfaceId> {
        match self {
            SessionEvent::RegionChanged { surface, .. } => Some(*surface),
            SessionEvent::DependentSynced { .. } => Some(SurfaceId::Mockup),
            SessionEvent::PlacementChanged(_) => None,
        }
    }
}
