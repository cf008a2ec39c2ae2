//! Roto Hex - a ball bouncing inside a spinning regular polygon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, ball state)
//! - `config`: Validated simulation constants with JSON load/save
//!
//! Rendering and frame scheduling are left to the embedder: the library
//! exposes a [`Simulator`] that advances one logical step per call and
//! returns everything a renderer needs to draw the frame.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{Ball, RenderState, Simulator};

use glam::Vec2;

/// Reference tuning constants
pub mod consts {
    /// Display space dimensions
    pub const WIDTH: f32 = 600.0;
    pub const HEIGHT: f32 = 600.0;

    /// Distance from the polygon center to each vertex
    pub const POLYGON_RADIUS: f32 = 250.0;
    /// Number of polygon sides
    pub const POLYGON_SIDES: u32 = 6;
    /// Polygon rotation per step (radians)
    pub const ANGULAR_VELOCITY: f32 = 0.02;

    /// Downward acceleration per step
    pub const GRAVITY: f32 = 0.5;
    /// Global velocity damping applied every step
    pub const DAMPING: f32 = 0.99;
    /// Fraction of relative normal speed retained after a bounce
    pub const RESTITUTION: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawns this far above the polygon center
    pub const BALL_START_OFFSET: f32 = 100.0;
    /// Initial horizontal ball speed
    pub const BALL_START_SPEED: f32 = 3.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
