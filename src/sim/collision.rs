//! Collision detection and response against the polygon's edges
//!
//! Detection projects the ball center onto each edge segment (clamped to the
//! segment, which handles contact near a vertex) and compares the distance
//! to the ball radius. Response happens in the wall's reference frame: an
//! edge of a spinning polygon is a moving surface, and reflecting the
//! absolute velocity would give physically wrong bounces.

use glam::Vec2;

/// A ball-vs-edge contact
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Closest point on the edge to the ball center
    pub point: Vec2,
    /// Unit normal at the contact, pointing from the edge toward the ball
    pub normal: Vec2,
    /// Overlap depth (ball radius minus distance), for position correction
    pub penetration: f32,
}

/// Closest point on segment [a, b] to p
///
/// Projects p onto the infinite line through the segment, then clamps the
/// projection parameter to [0, 1].
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Check the ball against one edge segment
///
/// `interior` is the polygon center; it orients the fallback normal when the
/// ball center sits exactly on the edge line and the contact offset is zero.
pub fn ball_edge_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    a: Vec2,
    b: Vec2,
    interior: Vec2,
) -> Option<Contact> {
    let point = closest_point_on_segment(ball_pos, a, b);
    let offset = ball_pos - point;
    let dist = offset.length();

    if dist >= ball_radius {
        return None;
    }

    let normal = if dist > 0.0 {
        offset / dist
    } else {
        // Degenerate: ball center exactly on the edge line. Use the edge
        // perpendicular, flipped onto the side the interior is on.
        let edge = b - a;
        let perp = Vec2::new(-edge.y, edge.x).normalize();
        if perp.dot(interior - point) < 0.0 {
            -perp
        } else {
            perp
        }
    };

    Some(Contact {
        point,
        normal,
        penetration: ball_radius - dist,
    })
}

/// Reflect velocity across a surface normal: v' = v - 2(v·n)n
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Resolve a bounce against a moving wall
///
/// Reflects the velocity relative to the wall, scales it by restitution,
/// then re-adds the wall velocity. Returns `None` when the relative velocity
/// already points away from the wall: the ball is separating, and reflecting
/// again while still overlapping would trap it against the surface.
pub fn resolve_bounce(
    vel: Vec2,
    wall_vel: Vec2,
    normal: Vec2,
    restitution: f32,
) -> Option<Vec2> {
    let rel = vel - wall_vel;
    if rel.dot(normal) >= 0.0 {
        return None;
    }
    Some(reflect(rel, normal) * restitution + wall_vel)
}
