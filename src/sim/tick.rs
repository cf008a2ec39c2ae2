//! Fixed timestep simulation step
//!
//! One [`Simulator::step`] call advances the world by one logical time unit:
//! rotate the polygon, integrate the ball, resolve edge collisions, damp.
//! The stepping cadence is the caller's concern; the simulator owns all
//! mutable state, so independent instances can run side by side.

use glam::Vec2;

use super::collision::{ball_edge_collision, resolve_bounce};
use super::polygon::Polygon;
use super::state::{Ball, RenderState};
use crate::config::{ConfigError, SimConfig};
use crate::consts::{BALL_START_OFFSET, BALL_START_SPEED};

/// Owns the ball and polygon; the sole writer of both.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    ball: Ball,
    polygon: Polygon,
}

impl Simulator {
    /// Build a simulator from a validated config.
    ///
    /// The ball starts above the polygon center with a small horizontal
    /// velocity; the polygon starts unrotated.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = config.center();
        let ball = Ball::new(
            center - Vec2::new(0.0, BALL_START_OFFSET),
            Vec2::new(BALL_START_SPEED, 0.0),
            config.ball_radius,
        );
        let polygon = Polygon::new(
            center,
            config.polygon_radius,
            config.sides,
            config.angular_velocity,
        );

        log::debug!(
            "simulator ready: {} sides, radius {}, angular velocity {}",
            config.sides,
            config.polygon_radius,
            config.angular_velocity
        );

        Ok(Self {
            config,
            ball,
            polygon,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Advance one step and return the frame to draw.
    pub fn step(&mut self) -> RenderState {
        self.polygon.rotate();

        // Symplectic Euler with unit dt
        self.ball.vel.y += self.config.gravity;
        self.ball.pos += self.ball.vel;

        let vertices = self.polygon.vertices();

        // Edges are resolved sequentially: a bounce off one edge feeds the
        // next edge's test, so a corner hit resolves one edge after the
        // other rather than simultaneously.
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];

            let Some(contact) =
                ball_edge_collision(self.ball.pos, self.ball.radius, a, b, self.polygon.center)
            else {
                continue;
            };

            let wall_vel = self.polygon.point_velocity(contact.point);
            if let Some(vel) =
                resolve_bounce(self.ball.vel, wall_vel, contact.normal, self.config.restitution)
            {
                self.ball.vel = vel;
                // Push the ball out of the wall so the next step does not
                // re-trigger on the same overlap.
                self.ball.pos += contact.normal * contact.penetration;
                log::trace!(
                    "bounce on edge {i} at ({:.1}, {:.1})",
                    contact.point.x,
                    contact.point.y
                );
            }
        }

        self.ball.vel *= self.config.damping;

        RenderState {
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            vertices,
        }
    }

    /// Reinstall caller-supplied starting state (restart).
    ///
    /// Config, polygon center, and angular velocity are unchanged.
    pub fn reset(&mut self, ball: Ball, polygon_angle: f32) {
        self.ball = ball;
        self.polygon.angle = polygon_angle;
        log::debug!("simulator reset");
    }
}
