//! Print-area positioning for product mockups.
//!
//! A user marks a rectangular print region on a template image and on a
//! mockup image. The template region is the reference; the mockup region
//! follows its proportions. A design graphic is fitted into the target region.
//!
//! ## Modules
//!
//! - `types` - Geometry and identifier types shared by every module
//! - `input` - Coordinate mapping and the per-surface gesture controller
//! - `hit_testing` - Body and resize-handle hit tests
//! - `constraint` - Keeping regions inside image bounds
//! - `sync` - Reference-to-dependent proportion synchronization
//! - `placement` - Fit-and-center of the design graphic
//! - `session` - The two surfaces, sync debounce and placement together
//! - `store` - Region persistence
//! - `settings` / `settings_watcher` - Tunables and live reload
//! - `replay` - Recorded scenarios for the CLI and tests

pub mod constants;
pub mod constraint;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod placement;
pub mod replay;
pub mod session;
pub mod settings;
pub mod settings_watcher;
pub mod store;
pub mod sync;
pub mod types;

pub use error::{SettingsError, StoreError};
pub use session::{EditorSession, ImageSlot, SessionEvent};
pub use settings::EngineSettings;
pub use types::{
    DesignPlacement, DisplayRect, ImageBounds, PlacementFit, Point, Region, RegionField,
    RegionPair, SurfaceId,
};
