//! Deterministic simulation module
//!
//! Generation and orbital motion live here. This module must be pure and
//! deterministic:
//! - Seeded RNG only, injected into every sampler
//! - Stable iteration order (spawn distance, fixed after generation)
//! - No rendering or platform dependencies

pub mod body;
pub mod galaxy;
pub mod generate;
pub mod orbit;
pub mod sampling;
pub mod tick;

pub use body::{ArmAccent, Body, BodyKind};
pub use galaxy::{BodyView, Galaxy, Snapshot};
pub use generate::{arm_crossing_angle, distance_orbit, generate, generate_with_rng};
pub use orbit::Orbit;
pub use sampling::{chance, half, inside_unit_circle, sample_curve, triangular, triangular_at};
pub use tick::{TickSummary, angular_velocity, linear_velocity, run, tick};
