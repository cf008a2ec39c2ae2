//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed unit timestep only
//! - Stable edge iteration order (ascending edge index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod polygon;
pub mod state;
pub mod tick;

pub use collision::{Contact, ball_edge_collision, closest_point_on_segment, reflect, resolve_bounce};
pub use polygon::Polygon;
pub use state::{Ball, RenderState};
pub use tick::Simulator;
