//! Simulation configuration
//!
//! All tunable constants live here, fixed for the lifetime of a
//! [`Simulator`](crate::Simulator). Degenerate values (a two-sided polygon,
//! damping above 1) are rejected at construction rather than allowed to
//! produce nonsensical geometry at runtime.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error type for configuration validation and loading.
#[derive(Debug)]
pub enum ConfigError {
    BadDisplaySize { width: f32, height: f32 },
    BadPolygonRadius(f32),
    TooFewSides(u32),
    BadAngularVelocity(f32),
    BadGravity(f32),
    BadDamping(f32),
    BadRestitution(f32),
    BadBallRadius(f32),
    /// Ball radius must be smaller than the polygon's inscribed radius
    BallTooLarge { ball: f32, apothem: f32 },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BadDisplaySize { width, height } => {
                write!(f, "display size must be positive, got {width}x{height}")
            }
            ConfigError::BadPolygonRadius(r) => {
                write!(f, "polygon radius must be positive and finite, got {r}")
            }
            ConfigError::TooFewSides(n) => {
                write!(f, "polygon needs at least 3 sides, got {n}")
            }
            ConfigError::BadAngularVelocity(w) => {
                write!(f, "angular velocity must be finite, got {w}")
            }
            ConfigError::BadGravity(g) => write!(f, "gravity must be finite, got {g}"),
            ConfigError::BadDamping(d) => {
                write!(f, "damping must be in (0, 1], got {d}")
            }
            ConfigError::BadRestitution(r) => {
                write!(f, "restitution must be in [0, 1], got {r}")
            }
            ConfigError::BadBallRadius(r) => {
                write!(f, "ball radius must be positive and finite, got {r}")
            }
            ConfigError::BallTooLarge { ball, apothem } => {
                write!(
                    f,
                    "ball radius {ball} does not fit inside the polygon (apothem {apothem})"
                )
            }
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Simulation constants, read-only once a simulator is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Display space width (the polygon is centered in it)
    pub width: f32,
    /// Display space height
    pub height: f32,
    /// Distance from polygon center to each vertex
    pub polygon_radius: f32,
    /// Number of polygon sides (>= 3)
    pub sides: u32,
    /// Polygon rotation per step (radians)
    pub angular_velocity: f32,
    /// Downward acceleration added to vertical velocity every step
    pub gravity: f32,
    /// Velocity damping factor applied every step, in (0, 1]
    pub damping: f32,
    /// Fraction of relative normal speed retained after a bounce, in [0, 1]
    pub restitution: f32,
    /// Ball radius
    pub ball_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            polygon_radius: POLYGON_RADIUS,
            sides: POLYGON_SIDES,
            angular_velocity: ANGULAR_VELOCITY,
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl SimConfig {
    /// Geometric center of the display space (the polygon's rotation center)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inscribed radius: distance from center to the midpoint of each edge
    pub fn apothem(&self) -> f32 {
        self.polygon_radius * (std::f32::consts::PI / self.sides as f32).cos()
    }

    /// Reject degenerate configurations before they reach the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(ConfigError::BadDisplaySize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.polygon_radius.is_finite() && self.polygon_radius > 0.0) {
            return Err(ConfigError::BadPolygonRadius(self.polygon_radius));
        }
        if self.sides < 3 {
            return Err(ConfigError::TooFewSides(self.sides));
        }
        if !self.angular_velocity.is_finite() {
            return Err(ConfigError::BadAngularVelocity(self.angular_velocity));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::BadGravity(self.gravity));
        }
        if !(self.damping.is_finite() && self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::BadDamping(self.damping));
        }
        if !(self.restitution.is_finite() && (0.0..=1.0).contains(&self.restitution)) {
            return Err(ConfigError::BadRestitution(self.restitution));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(ConfigError::BadBallRadius(self.ball_radius));
        }
        if self.ball_radius >= self.apothem() {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_radius,
                apothem: self.apothem(),
            });
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Save the config as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_few_sides() {
        let config = SimConfig {
            sides: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewSides(2))
        ));
    }

    #[test]
    fn test_damping_out_of_range() {
        for damping in [0.0, -0.5, 1.5, f32::NAN] {
            let config = SimConfig {
                damping,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::BadDamping(_))
            ));
        }
    }

    #[test]
    fn test_restitution_out_of_range() {
        let config = SimConfig {
            restitution: 1.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadRestitution(_))
        ));
    }

    #[test]
    fn test_non_finite_angular_velocity() {
        let config = SimConfig {
            angular_velocity: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadAngularVelocity(_))
        ));
    }

    #[test]
    fn test_ball_must_fit_inside_polygon() {
        // Hexagon of radius 250 has apothem ~216.5
        let config = SimConfig {
            ball_radius: 220.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
