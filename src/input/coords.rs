//! Coordinate conversion between display space and image pixel space.
//!
//! Every conversion takes the display rect and natural size explicitly. A
//! surface that is not laid out yet, or whose image has not loaded, maps
//! everything to the origin instead of dividing by zero.

use crate::types::{DisplayRect, ImageBounds, Point, Region};

/// Context needed for coordinate conversions on one surface.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub display: DisplayRect,
    pub natural: Option<ImageBounds>,
}

impl CoordinateContext {
    #[inline]
    pub fn new(display: DisplayRect, natural: Option<ImageBounds>) -> Self {
        Self { display, natural }
    }

    /// Image pixels per display pixel on each axis, if the surface is ready.
    #[inline]
    fn scale(&self) -> Option<(f64, f64)> {
        let natural = self.natural.filter(ImageBounds::is_usable)?;
        if !self.display.is_laid_out() {
            return None;
        }
        Some((
            natural.width / self.display.width,
            natural.height / self.display.height,
        ))
    }

    /// True if pointer positions on this surface can be mapped meaningfully.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.scale().is_some()
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer position to image pixel space.
    #[inline]
    pub fn display_to_image(pointer: Point, ctx: &CoordinateContext) -> Point {
        match ctx.scale() {
            Some((sx, sy)) => Point::new(
                (pointer.x - ctx.display.left) * sx,
                (pointer.y - ctx.display.top) * sy,
            ),
            None => Point::ORIGIN,
        }
    }

    /// Convert an image pixel position back to display space.
    #[inline]
    pub fn image_to_display(image_pos: Point, ctx: &CoordinateContext) -> Point {
        match ctx.scale() {
            Some((sx, sy)) => Point::new(
                image_pos.x / sx + ctx.display.left,
                image_pos.y / sy + ctx.display.top,
            ),
            None => Point::new(ctx.display.left, ctx.display.top),
        }
    }

    /// Display-space rectangle of an image-space region, for drawing overlays.
    pub fn region_to_display(region: &Region, ctx: &CoordinateContext) -> DisplayRect {
        match ctx.scale() {
            Some((sx, sy)) => DisplayRect::new(
                region.x / sx + ctx.display.left,
                region.y / sy + ctx.display.top,
                region.width / sx,
                region.height / sy,
            ),
            None => DisplayRect::new(ctx.display.left, ctx.display.top, 0.0, 0.0),
        }
    }
}

/// Free-function form of [`CoordinateConverter::display_to_image`].
#[inline]
pub fn to_image_space(
    pointer: Point,
    display: DisplayRect,
    natural: Option<ImageBounds>,
) -> Point {
    CoordinateConverter::display_to_image(pointer, &CoordinateContext::new(display, natural))
}
