//! Recorded editing scenarios, replayed through an [`EditorSession`].
//!
//! A scenario describes both surfaces, an optional design graphic and a list
//! of input events. Pointer positions are in display space; a surface without
//! an explicit display rect is shown at its natural size at the origin.

use crate::settings::EngineSettings;
use crate::session::{EditorSession, ImageSlot, SessionEvent};
use crate::types::{
    DesignPlacement, DisplayRect, ImageBounds, Point, Region, RegionField, RegionPair, SurfaceId,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// One surface of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceSetup {
    /// Natural size; `None` simulates a failed image load
    pub bounds: Option<ImageBounds>,
    /// Persisted region; `None` uses the default region
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub display: Option<DisplayRect>,
}

impl SurfaceSetup {
    fn display_rect(&self) -> DisplayRect {
        self.display.unwrap_or_else(|| match self.bounds {
            Some(b) => DisplayRect::new(0.0, 0.0, b.width, b.height),
            None => DisplayRect::default(),
        })
    }
}

/// Design graphic of a scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DesignSetup {
    Loaded { width: f64, height: f64 },
    Failed,
}

/// An input event. `at_ms` on frames is relative to the start of the replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    PointerDown { surface: SurfaceId, x: f64, y: f64 },
    PointerMove { surface: SurfaceId, x: f64, y: f64 },
    PointerUp { surface: SurfaceId },
    PointerLeave { surface: SurfaceId },
    GlobalPointerUp,
    Frame { at_ms: u64 },
    Field { surface: SurfaceId, field: RegionField, value: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Settings for this scenario; the caller's settings when absent
    #[serde(default)]
    pub settings: Option<EngineSettings>,
    pub template: SurfaceSetup,
    pub mockup: SurfaceSetup,
    #[serde(default)]
    pub design: Option<DesignSetup>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub regions: RegionPair,
    pub placement: Option<DesignPlacement>,
    /// Number of region changes, syncs and placement changes emitted
    pub events_emitted: usize,
    pub syncs: usize,
}

impl Scenario {
    /// Run every event, then let any pending sync settle.
    pub fn replay(&self) -> ReplayOutcome {
        let settings = self.settings.clone().unwrap_or_default();
        let debounce = settings.sync_debounce();
        let mut session = EditorSession::new(settings);
        let mut emitted: Vec<SessionEvent> = Vec::new();

        for (surface, setup) in [(SurfaceId::Template, &self.template), (SurfaceId::Mockup, &self.mockup)] {
            if let Some(region) = setup.region {
                emitted.extend(session.restore_region(surface, region));
            }
            emitted.extend(match setup.bounds {
                Some(bounds) => session.image_loaded(surface.into(), bounds),
                None => session.image_failed(surface.into()),
            });
        }
        match self.design {
            Some(DesignSetup::Loaded { width, height }) => {
                emitted.extend(session.image_loaded(ImageSlot::Design, ImageBounds::new(width, height)))
            }
            Some(DesignSetup::Failed) => emitted.extend(session.image_failed(ImageSlot::Design)),
            None => {}
        }

        let start = Instant::now();
        let mut last_frame = Duration::ZERO;
        for event in &self.events {
            debug!(?event, "Replaying");
            match *event {
                ScenarioEvent::PointerDown { surface, x, y } => {
                    session.pointer_down(surface, Point::new(x, y), self.setup(surface).display_rect());
                }
                ScenarioEvent::PointerMove { surface, x, y } => {
                    session.pointer_move(surface, Point::new(x, y), self.setup(surface).display_rect());
                }
                ScenarioEvent::PointerUp { surface } => emitted.extend(session.pointer_up(surface)),
                ScenarioEvent::PointerLeave { surface } => emitted.extend(session.pointer_leave(surface)),
                ScenarioEvent::GlobalPointerUp => emitted.extend(session.global_pointer_up()),
                ScenarioEvent::Frame { at_ms } => {
                    last_frame = last_frame.max(Duration::from_millis(at_ms));
                    emitted.extend(session.animation_frame(start + last_frame));
                }
                ScenarioEvent::Field { surface, field, value } => {
                    emitted.extend(session.apply_field(surface, field, value))
                }
            }
        }

        let settle = start + last_frame + debounce;
        emitted.extend(session.animation_frame(settle));

        ReplayOutcome {
            regions: session.region_pair(),
            placement: session.placement(),
            events_emitted: emitted.len(),
            syncs: emitted
                .iter()
                .filter(|e| matches!(e, SessionEvent::DependentSynced { .. }))
                .count(),
        }
    }

    fn setup(&self, surface: SurfaceId) -> &SurfaceSetup {
        match surface {
            SurfaceId::Template => &self.template,
            SurfaceId::Mockup => &self.mockup,
        }
    }
}
