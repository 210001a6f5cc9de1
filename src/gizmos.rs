//! Debug polylines for visualization tooling
//!
//! Pure reads of the configuration: orbit paths, the two spiral arm traces
//! and the radius bounds, as point lists a line renderer can draw.

use glam::Vec2;

use crate::config::GalaxyConfig;
use crate::consts::{ORBIT_PATH_POINTS, ORBIT_PATH_SWEEP};
use crate::polar_to_cartesian;
use crate::sim::{Orbit, arm_crossing_angle, distance_orbit};

/// Points along `orbit` at fixed angle steps, running slightly past a full turn
pub fn orbit_path(orbit: &Orbit) -> Vec<Vec2> {
    let step = std::f32::consts::TAU / ORBIT_PATH_POINTS as f32;
    let count = (ORBIT_PATH_SWEEP / step).floor() as usize + 1;

    (0..count).map(|i| orbit.position_at(i as f32 * step)).collect()
}

/// Semi-minor axes at which gizmo orbits are drawn
fn gizmo_radii(config: &GalaxyConfig) -> Vec<f32> {
    let step = config.gizmos.orbit_draw_step;
    if !(step >= 1.0) {
        return Vec::new();
    }
    (1u32..)
        .map(|i| i as f32 * step)
        .take_while(|&r| r <= config.gizmos.max_orbit_semi_minor)
        .collect()
}

/// The family of distance-correlated orbits, one per gizmo step
pub fn orbit_paths(config: &GalaxyConfig) -> Vec<Vec<Vec2>> {
    gizmo_radii(config)
        .into_iter()
        .map(|r| orbit_path(&distance_orbit(config, r)))
        .collect()
}

/// Traces of both spiral arms, one point per gizmo step
pub fn arm_polylines(config: &GalaxyConfig) -> [Vec<Vec2>; 2] {
    let mut arms = [Vec::new(), Vec::new()];
    for r in gizmo_radii(config) {
        let orbit = distance_orbit(config, r);
        let crossing = arm_crossing_angle(config, &orbit);
        arms[0].push(orbit.position_at(crossing));
        arms[1].push(orbit.position_at(std::f32::consts::PI + crossing));
    }
    arms
}

/// Circles at the inner and outer galaxy radius
pub fn boundary_rings(config: &GalaxyConfig) -> [Vec<Vec2>; 2] {
    let ring = |r: f32| -> Vec<Vec2> {
        (0..=ORBIT_PATH_POINTS)
            .map(|i| {
                let theta = i as f32 / ORBIT_PATH_POINTS as f32 * std::f32::consts::TAU;
                config.center + polar_to_cartesian(r, theta)
            })
            .collect()
    };
    [ring(config.galaxy_min_radius), ring(config.galaxy_radius)]
}
