//! Rotating polygon kinematics
//!
//! The polygon never stores its outline: vertices are derived every step
//! from center, circumradius, side count, and the current rotation angle.
//! The angle grows unbounded since only its cosine/sine are ever taken.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// A regular polygon spinning about its fixed center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Rotation center (fixed)
    pub center: Vec2,
    /// Distance from center to each vertex (fixed)
    pub radius: f32,
    /// Number of sides (fixed, >= 3)
    pub sides: u32,
    /// Current rotation angle (radians)
    pub angle: f32,
    /// Rotation per step (radians, fixed)
    pub angular_velocity: f32,
}

impl Polygon {
    pub fn new(center: Vec2, radius: f32, sides: u32, angular_velocity: f32) -> Self {
        Self {
            center,
            radius,
            sides,
            angle: 0.0,
            angular_velocity,
        }
    }

    /// Advance the rotation by one step
    pub fn rotate(&mut self) {
        self.angle += self.angular_velocity;
    }

    /// Current world-space vertex positions, in edge-adjacency order
    ///
    /// Vertex i sits at `angle + i * TAU / sides`; edge i joins vertex i to
    /// vertex (i + 1) % sides.
    pub fn vertices(&self) -> Vec<Vec2> {
        let step = TAU / self.sides as f32;
        (0..self.sides)
            .map(|i| self.center + polar_to_cartesian(self.radius, self.angle + i as f32 * step))
            .collect()
    }

    /// Instantaneous velocity of a point rigidly attached to the polygon
    ///
    /// A point at offset r from the rotation center moves perpendicular to r
    /// at speed `angular_velocity * |r|`. A contact point on a spinning wall
    /// is not stationary, and collision response must account for that.
    pub fn point_velocity(&self, point: Vec2) -> Vec2 {
        let r = point - self.center;
        self.angular_velocity * Vec2::new(-r.y, r.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_vertices() {
        let poly = Polygon::new(Vec2::new(300.0, 300.0), 250.0, 6, 0.02);
        let verts = poly.vertices();
        assert_eq!(verts.len(), 6);

        // At angle 0 the first vertex sits directly right of center
        assert!((verts[0] - Vec2::new(550.0, 300.0)).length() < 1e-3);

        // All vertices lie on the circumcircle
        for v in &verts {
            assert!(((v - poly.center).length() - 250.0).abs() < 1e-3);
        }

        // Regular hexagon side length equals the circumradius
        for i in 0..6 {
            let side = (verts[(i + 1) % 6] - verts[i]).length();
            assert!((side - 250.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut poly = Polygon::new(Vec2::ZERO, 100.0, 6, 0.02);
        for _ in 0..5 {
            poly.rotate();
        }
        assert!((poly.angle - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_point_velocity_perpendicular() {
        let poly = Polygon::new(Vec2::new(300.0, 300.0), 250.0, 6, 0.02);
        let point = Vec2::new(400.0, 350.0);

        let vel = poly.point_velocity(point);
        let r = point - poly.center;

        // Perpendicular to the radius vector, speed = omega * |r|
        assert!(vel.dot(r).abs() < 1e-3);
        assert!((vel.length() - 0.02 * r.length()).abs() < 1e-3);
    }

    #[test]
    fn test_center_point_is_stationary() {
        let poly = Polygon::new(Vec2::new(300.0, 300.0), 250.0, 6, 0.5);
        assert_eq!(poly.point_velocity(poly.center), Vec2::ZERO);
    }

    #[test]
    fn test_stationary_polygon_has_no_wall_velocity() {
        let poly = Polygon::new(Vec2::ZERO, 250.0, 6, 0.0);
        assert_eq!(poly.point_velocity(Vec2::new(250.0, 0.0)), Vec2::ZERO);
    }
}
