//! Watches the settings file so a host can hot-reload [`EngineSettings`].
//!
//! The parent directory is watched rather than the file itself: editors and
//! atomic writers replace the file, which would drop a direct watch.

use crate::error::SettingsResult;
use crate::settings::EngineSettings;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

/// What happened to the settings file since the last poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Changed,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        debug!(?path, "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file system events without blocking. Returns the most
    /// recent event that concerns the settings file.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(e) = classify(&self.path, &event) {
                        latest = Some(e);
                    }
                }
                Ok(Err(e)) => {
                    warn!("Settings watch error: {}", e);
                    latest = Some(SettingsEvent::Error(e.to_string()));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    latest = Some(SettingsEvent::Error("watcher disconnected".to_string()));
                    break;
                }
            }
        }
        latest
    }

    /// Re-read the watched file.
    pub fn reload(&self) -> SettingsResult<EngineSettings> {
        EngineSettings::load_from(&self.path)
    }
}

/// Map a file system event to what it means for the settings file at `path`.
/// Events for other files in the watched directory are ignored.
fn classify(path: &Path, event: &Event) -> Option<SettingsEvent> {
    let file_name = path.file_name()?;
    if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
        return None;
    }
    match event.kind {
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        EventKind::Create(_) | EventKind::Modify(_) => Some(SettingsEvent::Changed),
        _ => None,
    }
}
