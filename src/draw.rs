use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::Point;
use embedded_graphics_core::Pixel;

use crate::DrawPrimitive;

/// Side length of a position marker in pixels.
pub const MARKER_SIZE: i32 = 4;

/// Rasterize one primitive onto `fb`.
#[inline]
pub fn draw<D: DrawTarget<Color = Rgb565>>(primitive: DrawPrimitive, fb: &mut D) -> Result<(), D::Error> {
    match primitive {
        DrawPrimitive::Line([p1, p2], color) => fb.draw_iter(
            line_drawing::Bresenham::new((p1.x, p1.y), (p2.x, p2.y))
                .map(|(x, y)| Pixel(Point::new(x, y), color)),
        ),
        DrawPrimitive::Marker(p, color) => {
            // Offset by one so the marker covers the body's origin pixel.
            let x0 = p.x - 1;
            let y0 = p.y - 1;
            fb.draw_iter((0..MARKER_SIZE).flat_map(move |dy| {
                (0..MARKER_SIZE).map(move |dx| Pixel(Point::new(x0 + dx, y0 + dy), color))
            }))
        }
    }
}
