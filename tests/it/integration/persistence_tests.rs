//! Persistence Integration Tests
//!
//! Restoring a session from a store and saving it back.

use crate::helpers::{
    MOCKUP_BOUNDS, TEMPLATE_BOUNDS, changed_regions, move_to, press, standard_session,
    synced_regions, t0,
};
use printzone::error::StoreError;
use printzone::session::ImageSlot;
use printzone::settings::EngineSettings;
use printzone::store::{JsonFileRegionStore, MemoryRegionStore, RegionStore};
use printzone::types::{Region, SurfaceId};
use printzone::EditorSession;
use tempfile::tempdir;

#[test]
fn test_restore_uses_stored_and_default_regions() {
    let store = MemoryRegionStore::new()
        .with_region(SurfaceId::Template, Region::new(10.0, 10.0, 40.0, 40.0));
    let session = EditorSession::restore(EngineSettings::default(), &store).unwrap();

    assert_eq!(session.region(SurfaceId::Template), Region::new(10.0, 10.0, 40.0, 40.0));
    assert_eq!(session.region(SurfaceId::Mockup), Region::default());
}

#[test]
fn test_restored_region_is_clamped_when_image_loads() {
    let store = MemoryRegionStore::new()
        .with_region(SurfaceId::Template, Region::new(480.0, 0.0, 100.0, 100.0));
    let mut session = EditorSession::restore(EngineSettings::default(), &store).unwrap();
    session.image_loaded(ImageSlot::Template, TEMPLATE_BOUNDS);

    assert_eq!(session.region(SurfaceId::Template), Region::new(400.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_restoring_template_resyncs_loaded_mockup() {
    let mut session = standard_session();
    let events = session.restore_region(SurfaceId::Template, Region::new(0.0, 0.0, 100.0, 50.0));

    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(0.0, 0.0, 100.0, 50.0)]
    );
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 50.0)]);
    assert!(session.region_pair().is_in_proportion());
}

#[test]
fn test_restoring_template_before_mockup_loads_keeps_stored_mockup() {
    let mut session = EditorSession::default();
    session.restore_region(SurfaceId::Mockup, Region::new(10.0, 10.0, 300.0, 300.0));
    session.image_loaded(ImageSlot::Template, TEMPLATE_BOUNDS);
    let events = session.restore_region(SurfaceId::Template, Region::new(0.0, 0.0, 100.0, 50.0));

    assert!(synced_regions(&events).is_empty());
    assert!(!session.is_sync_deferred());
    assert_eq!(session.region(SurfaceId::Mockup), Region::new(10.0, 10.0, 300.0, 300.0));
}

#[test]
fn test_restore_propagates_invalid_region() {
    let store = MemoryRegionStore::new()
        .with_region(SurfaceId::Mockup, Region::new(0.0, 0.0, f64::NAN, 10.0));
    let result = EditorSession::restore(EngineSettings::default(), &store);
    assert!(matches!(result, Err(StoreError::InvalidRegion { .. })));
}

#[test]
fn test_save_writes_both_surfaces() {
    let session = EditorSession::default();
    let store = MemoryRegionStore::new();
    session.save(&store).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_edit_save_restore_through_file() {
    let dir = tempdir().unwrap();
    let store = JsonFileRegionStore::new(dir.path().join("regions.json"));

    let mut session = EditorSession::restore(EngineSettings::default(), &store).unwrap();
    session.image_loaded(ImageSlot::Template, TEMPLATE_BOUNDS);
    session.image_loaded(ImageSlot::Mockup, MOCKUP_BOUNDS);

    press(&mut session, SurfaceId::Template, 100.0, 100.0);
    move_to(&mut session, SurfaceId::Template, 130.0, 120.0);
    session.animation_frame(t0());
    session.pointer_up(SurfaceId::Template);
    session.save(&store).unwrap();

    let restored = EditorSession::restore(EngineSettings::default(), &store).unwrap();
    assert_eq!(restored.region(SurfaceId::Template), Region::new(80.0, 70.0, 200.0, 200.0));
    assert_eq!(restored.region_pair(), session.region_pair());
}

#[test]
fn test_save_single_surface() {
    let dir = tempdir().unwrap();
    let store = JsonFileRegionStore::new(dir.path().join("regions.json"));
    let session = EditorSession::default();

    session.save_surface(SurfaceId::Mockup, &store).unwrap();
    assert_eq!(store.load(SurfaceId::Template).unwrap(), None);
    assert_eq!(store.load(SurfaceId::Mockup).unwrap(), Some(Region::default()));
}
