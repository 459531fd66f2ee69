//! Polygon-vs-polygon collision query.
//!
//! Two colliders collide when any edge of one crosses (or touches) any edge
//! of the other. Full containment without edge contact is not detected; the
//! stepper's small substeps keep bodies from ending up fully inside each
//! other.

use crate::collider::Collider;
use crate::segment::{segments_intersect, Segment};
use crate::vector::Vec2;

/// A detected contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// World-frame intersection point.
    pub point: Vec2,
    /// World-frame edge of the *other* collider (the `b` side of the query).
    pub edge: Segment,
}

/// Test collider `a` at `pos_a` against collider `b` at `pos_b`.
///
/// Edges are visited A-major, B-minor; the first intersecting pair wins, so
/// the reported point and edge are deterministic. Cost is `O(|A|·|B|)`.
pub fn polygons_collide(a: &Collider, pos_a: Vec2, b: &Collider, pos_b: Vec2) -> Option<Contact> {
    for edge_a in a.edges(pos_a) {
        for edge_b in b.edges(pos_b) {
            if let Some(point) = segments_intersect(&edge_a, &edge_b) {
                return Some(Contact {
                    point,
                    edge: edge_b,
                });
            }
        }
    }
    None
}
