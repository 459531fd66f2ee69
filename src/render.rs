//! Turns simulation state into [`DrawPrimitive`]s for a host loop.
//!
//! Nothing here touches a display; the callback decides where primitives go
//! (usually [`crate::draw::draw`]).

use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use nalgebra::Point2;

use crate::collision::Contact;
use crate::simulation::Simulation;
use crate::vector::Vec2;
use crate::DrawPrimitive;

pub const BODY_COLOR: Rgb565 = Rgb565::WHITE;
pub const MARKER_COLOR: Rgb565 = Rgb565::RED;
pub const CONTACT_COLOR: Rgb565 = Rgb565::GREEN;

#[inline]
fn to_screen(v: Vec2) -> Point2<i32> {
    Point2::new(v.x as i32, v.y as i32)
}

/// Emit every body's outline and position marker, movable bodies first,
/// followed by `contact`'s edge when given.
pub fn render<const M: usize, const S: usize, F>(
    sim: &Simulation<M, S>,
    contact: Option<&Contact>,
    mut callback: F,
) where
    F: FnMut(DrawPrimitive),
{
    for (_, body) in sim.movables() {
        for edge in body.world_edges() {
            callback(DrawPrimitive::Line(
                [to_screen(edge.start), to_screen(edge.end)],
                BODY_COLOR,
            ));
        }
        callback(DrawPrimitive::Marker(to_screen(body.position), MARKER_COLOR));
    }

    for (_, body) in sim.statics() {
        for edge in body.world_edges() {
            callback(DrawPrimitive::Line(
                [to_screen(edge.start), to_screen(edge.end)],
                BODY_COLOR,
            ));
        }
        callback(DrawPrimitive::Marker(to_screen(body.position), MARKER_COLOR));
    }

    if let Some(contact) = contact {
        callback(DrawPrimitive::Line(
            [to_screen(contact.edge.start), to_screen(contact.edge.end)],
            CONTACT_COLOR,
        ));
    }
}
