//! Persistence collaborators for print-area regions.
//!
//! Regions are keyed by surface: a stored region only makes sense in the
//! pixel space of the image it was captured against. Stores are only touched
//! on an explicit restore/save; the engine never autosaves.

use crate::error::{StoreError, StoreResult};
use crate::types::{Region, SurfaceId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Load/save contract for per-surface regions.
pub trait RegionStore {
    /// The stored region for `surface`, or `None` if nothing was saved.
    fn load(&self, surface: SurfaceId) -> StoreResult<Option<Region>>;

    fn save(&self, surface: SurfaceId, region: &Region) -> StoreResult<()>;
}

fn validated(surface: SurfaceId, region: Region) -> StoreResult<Region> {
    if region.is_valid() {
        Ok(region)
    } else {
        Err(StoreError::InvalidRegion { surface, region })
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local store, for tests and hosts that persist elsewhere.
#[derive(Default)]
pub struct MemoryRegionStore {
    regions: Mutex<HashMap<SurfaceId, Region>>,
}

impl MemoryRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(self, surface: SurfaceId, region: Region) -> Self {
        self.regions.lock().insert(surface, region);
        self
    }

    pub fn len(&self) -> usize {
        self.regions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.lock().is_empty()
    }
}

impl RegionStore for MemoryRegionStore {
    fn load(&self, surface: SurfaceId) -> StoreResult<Option<Region>> {
        self.regions
            .lock()
            .get(&surface)
            .copied()
            .map(|r| validated(surface, r))
            .transpose()
    }

    fn save(&self, surface: SurfaceId, region: &Region) -> StoreResult<()> {
        let region = validated(surface, *region)?;
        self.regions.lock().insert(surface, region);
        Ok(())
    }
}

// ============================================================================
// JSON file store
// ============================================================================

/// On-disk layout: `{"template": {..}, "mockup": {..}}`, either key optional.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredRegions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mockup: Option<Region>,
}

impl StoredRegions {
    fn get(&self, surface: SurfaceId) -> Option<Region> {
        match surface {
            SurfaceId::Template => self.template,
            SurfaceId::Mockup => self.mockup,
        }
    }

    fn set(&mut self, surface: SurfaceId, region: Region) {
        match surface {
            SurfaceId::Template => self.template = Some(region),
            SurfaceId::Mockup => self.mockup = Some(region),
        }
    }
}

/// Stores both regions in one JSON file, replaced atomically on save.
pub struct JsonFileRegionStore {
    path: PathBuf,
}

impl JsonFileRegionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoreResult<StoredRegions> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredRegions::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, doc: &StoredRegions) -> StoreResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, doc)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl RegionStore for JsonFileRegionStore {
    fn load(&self, surface: SurfaceId) -> StoreResult<Option<Region>> {
        let region = self.read()?.get(surface);
        debug!(path = ?self.path, %surface, ?region, "Loaded stored region");
        region.map(|r| validated(surface, r)).transpose()
    }

    fn save(&self, surface: SurfaceId, region: &Region) -> StoreResult<()> {
        let region = validated(surface, *region)?;
        let mut doc = self.read()?;
        doc.set(surface, region);
        self.write(&doc)?;
        info!(path = ?self.path, %surface, %region, "Saved region");
        Ok(())
    }
}
