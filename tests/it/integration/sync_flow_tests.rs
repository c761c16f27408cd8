//! Sync Flow Integration Tests
//!
//! Template resizes reshaping the mockup region: debounced while the gesture
//! runs, immediate on release, deferred while the mockup image is missing.

use crate::helpers::{
    MOCKUP_BOUNDS, TEMPLATE_BOUNDS, TestSessionBuilder, assert_region_approx, changed_regions,
    move_to, ms, press, standard_session, synced_regions, t0,
};
use printzone::session::ImageSlot;
use printzone::types::{ImageBounds, Region, SurfaceId};

#[test]
fn test_sync_waits_for_quiet_period() {
    let mut session = standard_session();
    let start = t0();

    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);
    let events = session.animation_frame(start);
    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(100.0, 100.0, 100.0, 50.0)]
    );
    assert!(session.is_sync_pending());
    assert_eq!(session.region(SurfaceId::Mockup), Region::new(100.0, 100.0, 100.0, 100.0));

    assert!(synced_regions(&session.animation_frame(start + ms(50))).is_empty());

    let events = session.animation_frame(start + ms(120));
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 50.0)]);
    assert!(!session.is_sync_pending());

    // Already settled: release does not sync again
    assert!(synced_regions(&session.pointer_up(SurfaceId::Template)).is_empty());
}

#[test]
fn test_each_resize_frame_restarts_quiet_period() {
    let mut session = standard_session();
    let start = t0();

    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);
    session.animation_frame(start);
    move_to(&mut session, SurfaceId::Template, 210.0, 160.0);
    session.animation_frame(start + ms(100));

    assert!(synced_regions(&session.animation_frame(start + ms(150))).is_empty());
    let events = session.animation_frame(start + ms(220));
    assert_eq!(synced_regions(&events).len(), 1);
    assert!(session.region_pair().proportions_match(1e-9));
}

#[test]
fn test_release_syncs_immediately() {
    let mut session = standard_session();
    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);

    // No frame in between: the release applies the pending move and settles
    let events = session.pointer_up(SurfaceId::Template);
    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(100.0, 100.0, 100.0, 50.0)]
    );
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 50.0)]);
    assert!(!session.is_sync_pending());
    assert!(session.region_pair().proportions_match(1e-9));
}

#[test]
fn test_release_after_frame_settles_pending_sync() {
    let mut session = standard_session();
    let start = t0();
    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);
    session.animation_frame(start);
    assert!(session.is_sync_pending());

    let events = session.pointer_up(SurfaceId::Template);
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 50.0)]);
    assert!(!session.is_sync_pending());
}

#[test]
fn test_sync_deferred_until_mockup_loads() {
    let mut session = TestSessionBuilder::new()
        .with_template(TEMPLATE_BOUNDS, Region::new(100.0, 100.0, 50.0, 50.0))
        .with_unloaded_mockup(Region::new(100.0, 100.0, 100.0, 100.0))
        .build();

    press(&mut session, SurfaceId::Template, 151.0, 149.0);
    move_to(&mut session, SurfaceId::Template, 200.0, 150.0);
    let events = session.pointer_up(SurfaceId::Template);
    assert!(synced_regions(&events).is_empty());
    assert!(session.is_sync_deferred());

    let events = session.image_loaded(ImageSlot::Mockup, MOCKUP_BOUNDS);
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 50.0)]);
    assert!(!session.is_sync_deferred());
}

#[test]
fn test_smaller_template_image_reclamps_and_syncs() {
    let mut session = TestSessionBuilder::new()
        .with_template(TEMPLATE_BOUNDS, Region::new(100.0, 100.0, 200.0, 100.0))
        .with_mockup(MOCKUP_BOUNDS, Region::new(100.0, 100.0, 100.0, 100.0))
        .build();

    let events = session.image_loaded(ImageSlot::Template, ImageBounds::new(150.0, 500.0));
    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(0.0, 100.0, 150.0, 100.0)]
    );
    let synced = synced_regions(&events);
    assert_eq!(synced.len(), 1);
    assert_region_approx(synced[0], Region::new(100.0, 100.0, 100.0, 100.0 / 1.5));
}

#[test]
fn test_template_reload_moving_region_does_not_sync() {
    let mut session = standard_session();
    let events = session.image_loaded(ImageSlot::Template, ImageBounds::new(120.0, 500.0));
    assert_eq!(
        changed_regions(&events, SurfaceId::Template),
        vec![Region::new(70.0, 100.0, 50.0, 50.0)]
    );
    assert!(synced_regions(&events).is_empty());
}

#[test]
fn test_min_size_wins_over_proportions() {
    let mut session = TestSessionBuilder::new()
        .with_template(TEMPLATE_BOUNDS, Region::new(0.0, 0.0, 400.0, 20.0))
        .with_mockup(MOCKUP_BOUNDS, Region::new(100.0, 100.0, 100.0, 100.0))
        .build();

    press(&mut session, SurfaceId::Template, 400.0, 20.0);
    move_to(&mut session, SurfaceId::Template, 500.0, 20.0);
    let events = session.pointer_up(SurfaceId::Template);

    // Aspect 25 would make the mockup 4px tall
    assert_eq!(synced_regions(&events), vec![Region::new(100.0, 100.0, 100.0, 20.0)]);
}
