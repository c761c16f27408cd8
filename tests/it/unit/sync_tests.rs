//! Unit tests for proportion synchronization.

use crate::helpers::assert_region_approx;
use printzone::sync::{edit_dependent_field, sync_dependent_to_reference};
use printzone::types::{ImageBounds, Region, RegionField, RegionPair};
use proptest::prelude::*;

const MOCKUP: ImageBounds = ImageBounds {
    width: 1000.0,
    height: 1000.0,
};

#[test]
fn test_dependent_takes_reference_aspect() {
    let reference = Region::new(100.0, 100.0, 100.0, 50.0);
    let dependent = Region::new(100.0, 100.0, 100.0, 100.0);
    let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);
    assert_eq!(synced, Region::new(100.0, 100.0, 100.0, 50.0));
}

#[test]
fn test_position_is_kept() {
    let reference = Region::new(0.0, 0.0, 300.0, 100.0);
    let dependent = Region::new(420.0, 17.0, 300.0, 300.0);
    let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);
    assert_eq!((synced.x, synced.y), (420.0, 17.0));
}

#[test]
fn test_height_overflow_derives_width() {
    // Tall reference, dependent near the bottom edge
    let reference = Region::new(0.0, 0.0, 50.0, 100.0);
    let dependent = Region::new(100.0, 800.0, 200.0, 100.0);
    let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);
    assert_region_approx(synced, Region::new(100.0, 800.0, 100.0, 200.0));
}

#[test]
fn test_width_overflow_derives_height() {
    let reference = Region::new(0.0, 0.0, 400.0, 100.0);
    // Already hanging over the right edge before the sync
    let dependent = Region::new(900.0, 0.0, 200.0, 50.0);
    let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);
    assert_region_approx(synced, Region::new(900.0, 0.0, 100.0, 25.0));
}

#[test]
fn test_degenerate_reference_only_clamps() {
    let reference = Region::new(0.0, 0.0, 100.0, 0.0);
    let dependent = Region::new(990.0, 10.0, 100.0, 100.0);
    let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);
    assert_eq!(synced, Region::new(900.0, 10.0, 100.0, 100.0));
}

#[test]
fn test_field_edits_keep_reference_aspect() {
    let dependent = Region::new(100.0, 100.0, 100.0, 100.0);
    assert_eq!(
        edit_dependent_field(&dependent, RegionField::Width, 300.0, Some(2.0)),
        Region::new(100.0, 100.0, 300.0, 150.0)
    );
    assert_eq!(
        edit_dependent_field(&dependent, RegionField::Height, 60.0, Some(2.0)),
        Region::new(100.0, 100.0, 120.0, 60.0)
    );
    assert_eq!(
        edit_dependent_field(&dependent, RegionField::X, 7.0, Some(2.0)),
        Region::new(7.0, 100.0, 100.0, 100.0)
    );
    assert_eq!(
        edit_dependent_field(&dependent, RegionField::Width, 40.0, None),
        Region::new(100.0, 100.0, 40.0, 100.0)
    );
}

proptest! {
    #[test]
    fn prop_synced_proportions_match_when_space_allows(
        rw in 20.0..400.0f64,
        rh in 20.0..400.0f64,
        dx in 0.0..200.0f64,
        dy in 0.0..200.0f64,
        dw in 40.0..300.0f64,
    ) {
        // Derived height between the minimum size and the space below
        prop_assume!(dw / (rw / rh) >= 20.0 && dw * (rh / rw) <= 800.0);

        let reference = Region::new(0.0, 0.0, rw, rh);
        let dependent = Region::new(dx, dy, dw, dw);
        let synced = sync_dependent_to_reference(&reference, &dependent, MOCKUP, 20.0);

        let pair = RegionPair { reference, dependent: synced };
        prop_assert!(pair.proportions_match(1e-6), "{pair:?}");
        prop_assert!(synced.right() <= MOCKUP.width + 1e-9);
        prop_assert!(synced.bottom() <= MOCKUP.height + 1e-9);
    }
}
