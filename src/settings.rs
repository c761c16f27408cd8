//! Engine settings, stored as JSON under the platform config directory.
//!
//! Every field has a default, so a partial or missing file is fine. Values are
//! validated on load; geometry code can rely on them being finite and sane.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_REGION, HANDLE_SIZE, MIN_REGION_SIZE, SETTINGS_FILE_NAME,
    SYNC_DEBOUNCE_MS,
};
use crate::error::{SettingsError, SettingsResult};
use crate::input::InteractionConfig;
use crate::types::{Region, SurfaceId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Tunables for an editing session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Minimum region width and height in image pixels
    pub min_region_size: f64,
    /// Side of the resize handle hit square in image pixels
    pub handle_size: f64,
    /// Quiet period before a reference resize is synced to the mockup
    pub sync_debounce_ms: u64,
    /// Region used when nothing is persisted for a surface
    pub default_region: Region,
    /// Surface whose region receives the design graphic
    pub placement_target: SurfaceId,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_region_size: MIN_REGION_SIZE,
            handle_size: HANDLE_SIZE,
            sync_debounce_ms: SYNC_DEBOUNCE_MS,
            default_region: DEFAULT_REGION,
            placement_target: SurfaceId::Template,
        }
    }
}

impl EngineSettings {
    /// Load settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: Self = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        info!(?path, "Loaded engine settings");
        Ok(settings)
    }

    /// Load from [`default_settings_path`], falling back to defaults when no
    /// config directory exists.
    pub fn load() -> SettingsResult<Self> {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.min_region_size.is_finite() || self.min_region_size < 0.0 {
            return Err(SettingsError::Invalid {
                name: "min_region_size",
                reason: format!("must be a non-negative number, got {}", self.min_region_size),
            });
        }
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(SettingsError::Invalid {
                name: "handle_size",
                reason: format!("must be positive, got {}", self.handle_size),
            });
        }
        if !self.default_region.is_valid() {
            return Err(SettingsError::Invalid {
                name: "default_region",
                reason: format!("must be finite and non-negative, got {}", self.default_region),
            });
        }
        Ok(())
    }

    pub fn sync_debounce(&self) -> Duration {
        Duration::from_millis(self.sync_debounce_ms)
    }

    pub fn interaction_config(&self) -> InteractionConfig {
        InteractionConfig {
            min_size: self.min_region_size,
            handle_size: self.handle_size,
        }
    }
}

/// `<config_dir>/printzone/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
