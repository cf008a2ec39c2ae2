//! Ball state and the per-step render snapshot

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The bouncing ball
///
/// Position and velocity are written only by
/// [`Simulator::step`](super::Simulator::step) and
/// [`Simulator::reset`](super::Simulator::reset); the radius never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// Polygon outline vertices in draw order
    pub vertices: Vec<Vec2>,
}
