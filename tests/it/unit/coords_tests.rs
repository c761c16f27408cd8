//! Unit tests for display/image coordinate mapping.

use printzone::input::{CoordinateContext, CoordinateConverter, to_image_space};
use printzone::types::{DisplayRect, ImageBounds, Point, Region};

fn scaled_context() -> CoordinateContext {
    // 1000x800 image shown at half size, offset by the layout
    CoordinateContext::new(
        DisplayRect::new(10.0, 20.0, 500.0, 400.0),
        Some(ImageBounds::new(1000.0, 800.0)),
    )
}

#[test]
fn test_display_to_image_scales_and_offsets() {
    let p = CoordinateConverter::display_to_image(Point::new(70.0, 80.0), &scaled_context());
    assert_eq!(p, Point::new(120.0, 120.0));
}

#[test]
fn test_image_to_display_inverts() {
    let ctx = scaled_context();
    let image = Point::new(120.0, 120.0);
    let display = CoordinateConverter::image_to_display(image, &ctx);
    assert_eq!(display, Point::new(70.0, 80.0));
    assert_eq!(CoordinateConverter::display_to_image(display, &ctx), image);
}

#[test]
fn test_region_to_display() {
    let rect = CoordinateConverter::region_to_display(
        &Region::new(100.0, 100.0, 200.0, 100.0),
        &scaled_context(),
    );
    assert_eq!(rect, DisplayRect::new(60.0, 70.0, 100.0, 50.0));
}

#[test]
fn test_unloaded_image_maps_to_origin() {
    let p = to_image_space(
        Point::new(70.0, 80.0),
        DisplayRect::new(0.0, 0.0, 500.0, 400.0),
        None,
    );
    assert_eq!(p, Point::ORIGIN);
}

#[test]
fn test_zero_display_maps_to_origin() {
    let p = to_image_space(
        Point::new(70.0, 80.0),
        DisplayRect::new(0.0, 0.0, 0.0, 0.0),
        Some(ImageBounds::new(1000.0, 800.0)),
    );
    assert_eq!(p, Point::ORIGIN);
}
