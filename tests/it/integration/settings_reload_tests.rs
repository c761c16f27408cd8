//! Settings Reload Integration Tests

use crate::helpers::{
    MOCKUP_BOUNDS, TEMPLATE_BOUNDS, TestSessionBuilder, changed_regions, move_to, ms, press,
    standard_session, synced_regions, t0,
};
use printzone::session::SessionEvent;
use printzone::settings::EngineSettings;
use printzone::types::{Region, SurfaceId};

#[test]
fn test_larger_min_size_reclamps_and_resyncs() {
    let mut session = TestSessionBuilder::new()
        .with_template(TEMPLATE_BOUNDS, Region::new(100.0, 100.0, 100.0, 50.0))
        .with_mockup(MOCKUP_BOUNDS, Region::new(100.0, 100.0, 200.0, 100.0))
        .build();
    let events = session.update_settings(EngineSettings {
        min_region_size: 80.0,
        ..Default::default()
    });

    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(100.0, 100.0, 100.0, 80.0)]
    );
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 200.0, 160.0)]);
    assert!(session.region_pair().is_in_proportion());
}

#[test]
fn test_reclamped_template_moves_placement() {
    let mut session = TestSessionBuilder::new()
        .with_template(TEMPLATE_BOUNDS, Region::new(100.0, 100.0, 100.0, 50.0))
        .with_mockup(MOCKUP_BOUNDS, Region::new(100.0, 100.0, 200.0, 100.0))
        .with_design(400.0, 200.0)
        .build();
    let events = session.update_settings(EngineSettings {
        min_region_size: 80.0,
        ..Default::default()
    });

    assert!(events.iter().any(|e| matches!(e, SessionEvent::PlacementChanged(_))));
    assert_eq!(
        session.placement().unwrap().bounds(),
        Region::new(100.0, 115.0, 100.0, 50.0)
    );
}

#[test]
fn test_min_size_below_regions_changes_nothing() {
    let mut session = standard_session();
    let events = session.update_settings(EngineSettings {
        min_region_size: 10.0,
        ..Default::default()
    });

    assert!(changed_regions(&events, SurfaceId::Template).is_empty());
    assert!(synced_regions(&events).is_empty());
}

#[test]
fn test_handle_size_applies_to_next_press() {
    let mut session = standard_session();
    session.update_settings(EngineSettings {
        handle_size: 30.0,
        ..Default::default()
    });

    assert!(press(&mut session, SurfaceId::Template, 162.0, 162.0));
    assert!(session.interaction_state(SurfaceId::Template).is_resizing());
}

#[test]
fn test_debounce_delay_is_updated() {
    let mut session = standard_session();
    session.update_settings(EngineSettings {
        sync_debounce_ms: 500,
        ..Default::default()
    });
    let start = t0();

    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);
    session.animation_frame(start);

    assert!(synced_regions(&session.animation_frame(start + ms(200))).is_empty());
    assert_eq!(synced_regions(&session.animation_frame(start + ms(500))).len(), 1);
}
