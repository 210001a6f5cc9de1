//! Galaxy aggregate
//!
//! Owns the bodies, the arm accents and the configuration. Bodies are ordered
//! by their distance from the center at spawn time; that order is the
//! traversal order of every tick and is never re-sorted as bodies move.

use glam::Vec2;
use serde::Serialize;

use super::body::{ArmAccent, Body, BodyKind};
use crate::config::GalaxyConfig;
use crate::curve::Color;

#[derive(Debug, Clone)]
pub struct Galaxy {
    config: GalaxyConfig,
    /// Sorted ascending by `spawn_distances`
    bodies: Vec<Body>,
    spawn_distances: Vec<f32>,
    arm_accents: Vec<ArmAccent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Mass enclosed after the last tick's traversal (center + all bodies)
    pub enclosed_mass: f32,
}

impl Galaxy {
    /// Assemble from spawned bodies paired with their spawn distance
    pub fn from_parts(
        config: GalaxyConfig,
        mut spawned: Vec<(Body, f32)>,
        arm_accents: Vec<ArmAccent>,
    ) -> Self {
        // Stable sort: equal distances keep spawn order
        spawned.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (bodies, spawn_distances) = spawned.into_iter().unzip();
        let enclosed_mass = config.galactic_center_mass;

        Self {
            config,
            bodies,
            spawn_distances,
            arm_accents,
            time_ticks: 0,
            enclosed_mass,
        }
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// Galactic center reference point
    pub fn center(&self) -> Vec2 {
        self.config.center
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Distance of each body from the center when it was spawned
    pub fn spawn_distances(&self) -> &[f32] {
        &self.spawn_distances
    }

    pub fn arm_accents(&self) -> &[ArmAccent] {
        &self.arm_accents
    }

    pub fn star_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_star()).count()
    }

    pub fn nebula_count(&self) -> usize {
        self.bodies.len() - self.star_count()
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Center mass plus every body's mass
    pub fn total_mass(&self) -> f32 {
        self.config.galactic_center_mass + self.bodies.iter().map(Body::mass).sum::<f32>()
    }

    /// Render-facing view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let center = self.center();
        Snapshot {
            tick: self.time_ticks,
            center,
            bodies: self
                .bodies
                .iter()
                .map(|b| BodyView {
                    id: b.id(),
                    kind: match b.kind() {
                        BodyKind::Star { .. } => "star",
                        BodyKind::Nebula { .. } => "nebula",
                    },
                    pos: b.position(center),
                    scale: b.display_scale(),
                    color: b.color(),
                    distance: b.distance_from_center(),
                })
                .collect(),
            arm_accents: self
                .arm_accents
                .iter()
                .map(|a| ArmAccent {
                    pos: center + a.pos,
                    ..*a
                })
                .collect(),
        }
    }
}

/// Per-body data a renderer needs
#[derive(Debug, Clone, Serialize)]
pub struct BodyView {
    pub id: u32,
    pub kind: &'static str,
    pub pos: Vec2,
    pub scale: f32,
    pub color: Color,
    pub distance: f32,
}

/// Everything drawable at one tick, in world coordinates
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub center: Vec2,
    pub bodies: Vec<BodyView>,
    pub arm_accents: Vec<ArmAccent>,
}
