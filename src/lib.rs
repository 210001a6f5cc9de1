//! Galactica - procedural spiral galaxy with differential rotation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sampling, orbits, generation, tick)
//! - `curve`: Data-driven response curves and color gradients
//! - `config`: Galaxy configuration bundle and validation
//! - `gizmos`: Debug polylines for orbit paths and spiral arms
//! - `error`: Library error type

pub mod config;
pub mod curve;
pub mod error;
pub mod gizmos;
pub mod sim;

pub use config::GalaxyConfig;
pub use error::{ConfigIssue, GalaxyError};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz is plenty for orbit angles)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Mass = MASS_FACTOR * density * size³
    pub const MASS_FACTOR: f32 = 1000.0;

    /// Upper bound on generated arm accents (two per spacing step)
    pub const MAX_ARM_ACCENTS: usize = 20_000;

    /// Points per full revolution when exporting an orbit path
    pub const ORBIT_PATH_POINTS: usize = 100;
    /// Orbit paths run a little past one revolution so the polyline closes
    pub const ORBIT_PATH_SWEEP: f32 = 2.1 * std::f32::consts::PI;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Inverse of linear interpolation: where `value` sits between `a` and `b`.
///
/// Unclamped; returns 0 when the bounds coincide.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b { 0.0 } else { (value - a) / (b - a) }
}

/// Linear interpolation without clamping `t`
#[inline]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, t.clamp(0.0, 1.0))
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
