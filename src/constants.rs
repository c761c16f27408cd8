//! Engine-wide constants.
//!
//! Centralizes default geometry and timing values. Most of these are only
//! defaults: [`EngineSettings`](crate::settings::EngineSettings) can override
//! them per deployment.

use crate::types::Region;

// ============================================================================
// Region Defaults
// ============================================================================

/// Region used when nothing has been persisted for a surface
pub const DEFAULT_REGION: Region = Region::new(50.0, 50.0, 200.0, 200.0);

/// Minimum width and height of a region in image pixels
pub const MIN_REGION_SIZE: f64 = 20.0;

/// Side of the square hit area centered on the bottom-right corner
pub const HANDLE_SIZE: f64 = 10.0;

// ============================================================================
// Synchronization & Timing
// ============================================================================

/// Quiet period after the last reference resize before the mockup is synced
pub const SYNC_DEBOUNCE_MS: u64 = 120;

/// Tolerance used when comparing aspect ratios
pub const ASPECT_EPSILON: f64 = 1e-6;

// ============================================================================
// Auto-positioning
// ============================================================================

/// Scale used when the design's natural size is unknown (10% inset per side)
pub const FALLBACK_PLACEMENT_SCALE: f64 = 0.8;

/// Rounding slack for placement containment checks
pub const PLACEMENT_EPSILON: f64 = 1e-9;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "printzone";

/// Settings file name inside the config dir
pub const SETTINGS_FILE_NAME: &str = "settings.json";
