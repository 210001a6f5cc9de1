//! Per-tick orbital motion
//!
//! Linear velocity is interpolated between the innermost and outermost bounds
//! by distance, so inner bodies sweep more angle per tick than outer ones and
//! the arms keep winding without any N-body integration.

use super::galaxy::Galaxy;
use crate::config::GalaxyConfig;
use crate::{inverse_lerp, lerp_unclamped, normalize_angle};

/// What one tick observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummary {
    /// Center mass plus the mass of every body traversed.
    ///
    /// Accumulated in spawn-distance order but not fed back into the
    /// velocity law.
    pub enclosed_mass: f32,
    /// Bodies sitting exactly on the center that could not move
    pub stalled: usize,
}

/// Linear velocity of a body at `dist`, extrapolated past the radius bounds
#[inline]
pub fn linear_velocity(config: &GalaxyConfig, dist: f32) -> f32 {
    VelocityBounds::from(config).linear_velocity(dist)
}

/// Angular velocity (radians per unit time) of a body at `dist`
#[inline]
pub fn angular_velocity(config: &GalaxyConfig, dist: f32) -> f32 {
    VelocityBounds::from(config).angular_velocity(dist)
}

/// Advance every body's orbit angle by `dt`
///
/// Bodies are visited in the fixed spawn-distance order. `dt` is whatever the
/// caller's clock says; pausing is a `dt` of zero.
pub fn tick(galaxy: &mut Galaxy, dt: f32) -> TickSummary {
    let mut enclosed_mass = galaxy.config().galactic_center_mass;
    let mut stalled = 0;

    // Copied out so the bodies can be borrowed mutably
    let bounds = VelocityBounds::from(galaxy.config());

    for body in galaxy.bodies_mut() {
        let current_angle = body.orbit_angle();
        let dist = body.orbit().radius_at(current_angle);
        if dist > 0.0 {
            // Wrapped so long runs keep f32 precision; positions are 2π-periodic
            let next = current_angle + bounds.angular_velocity(dist) * dt;
            body.set_orbit_angle(normalize_angle(next));
        } else {
            stalled += 1;
        }

        enclosed_mass += body.mass();
    }

    if stalled > 0 {
        log::warn!("{stalled} bodies at the galactic center did not move");
    }

    galaxy.time_ticks += 1;
    galaxy.enclosed_mass = enclosed_mass;

    TickSummary {
        enclosed_mass,
        stalled,
    }
}

/// Run `n` ticks of `dt` each
pub fn run(galaxy: &mut Galaxy, n: u32, dt: f32) -> Option<TickSummary> {
    (0..n).map(|_| tick(galaxy, dt)).last()
}

#[derive(Clone, Copy)]
struct VelocityBounds {
    min_radius: f32,
    max_radius: f32,
    inner: f32,
    outer: f32,
}

impl VelocityBounds {
    #[inline]
    fn linear_velocity(&self, dist: f32) -> f32 {
        let rel = inverse_lerp(self.min_radius, self.max_radius, dist);
        lerp_unclamped(self.inner, self.outer, rel)
    }

    /// Zero at the center, where the angle is undefined
    #[inline]
    fn angular_velocity(&self, dist: f32) -> f32 {
        if dist > 0.0 {
            self.linear_velocity(dist) / dist
        } else {
            0.0
        }
    }
}

impl From<&GalaxyConfig> for VelocityBounds {
    fn from(config: &GalaxyConfig) -> Self {
        Self {
            min_radius: config.galaxy_min_radius,
            max_radius: config.galaxy_radius,
            inner: config.innermost_velocity,
            outer: config.outermost_velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::curve::Color;
    use crate::sim::body::{Body, BodyKind};
    use crate::sim::generate::generate;
    use crate::sim::orbit::Orbit;
    use glam::Vec2;

    fn circle_body(id: u32, radius: f32, size: f32) -> (Body, f32) {
        let body = Body::new(
            id,
            BodyKind::Star {
                temperature: 0.5,
                color: Color::WHITE,
            },
            Orbit::from_eccentricity(radius, 0.0, 0.0),
            0.0,
            size,
            Vec2::new(1.0, 2.0),
            1.0,
        );
        (body, radius)
    }

    fn test_config() -> GalaxyConfig {
        GalaxyConfig {
            galaxy_min_radius: 100.0,
            galaxy_radius: 1000.0,
            innermost_velocity: 50.0,
            outermost_velocity: 20.0,
            galactic_center_mass: 500.0,
            star_count: 100,
            nebula_count: 20,
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn test_velocity_at_bounds() {
        let config = test_config();
        assert!((linear_velocity(&config, 100.0) - 50.0).abs() < 1e-4);
        assert!((linear_velocity(&config, 1000.0) - 20.0).abs() < 1e-4);
        assert!((angular_velocity(&config, 100.0) - 0.5).abs() < 1e-6);
        assert!((angular_velocity(&config, 1000.0) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_extrapolates_outside_bounds() {
        let config = test_config();
        // 1900 is one full span past the outer radius
        assert!((linear_velocity(&config, 1900.0) + 10.0).abs() < 1e-3);
        assert!((linear_velocity(&config, 0.0) - (50.0 + 30.0 / 9.0 * 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_tick_advances_angle_by_angular_velocity() {
        let config = test_config();
        let mut galaxy = Galaxy::from_parts(
            config,
            vec![circle_body(1, 100.0, 0.1), circle_body(2, 1000.0, 0.1)],
            Vec::new(),
        );
        tick(&mut galaxy, 2.0);
        assert!((galaxy.bodies()[0].orbit_angle() - 1.0).abs() < 1e-5);
        assert!((galaxy.bodies()[1].orbit_angle() - 0.04).abs() < 1e-5);
        assert_eq!(galaxy.time_ticks, 1);
    }

    #[test]
    fn test_enclosed_mass_is_inert() {
        let heavy = GalaxyConfig {
            galactic_center_mass: 1.0e9,
            ..test_config()
        };
        let mut light = Galaxy::from_parts(test_config(), vec![circle_body(1, 300.0, 1.0)], Vec::new());
        let mut massive = Galaxy::from_parts(heavy, vec![circle_body(1, 300.0, 1.0)], Vec::new());

        let summary = tick(&mut light, SIM_DT);
        tick(&mut massive, SIM_DT);

        assert_eq!(
            light.bodies()[0].orbit_angle(),
            massive.bodies()[0].orbit_angle()
        );
        // 500 center + 1000 * density 1 * size 1
        assert!((summary.enclosed_mass - 1500.0).abs() < 1e-3);
        assert_eq!(light.enclosed_mass, summary.enclosed_mass);
    }

    #[test]
    fn test_body_at_center_does_not_move() {
        let mut galaxy = Galaxy::from_parts(test_config(), vec![circle_body(1, 0.0, 0.5)], Vec::new());
        let summary = tick(&mut galaxy, SIM_DT);
        assert_eq!(summary.stalled, 1);
        assert_eq!(galaxy.bodies()[0].orbit_angle(), 0.0);
        assert!(galaxy.bodies()[0].orbit_angle().is_finite());
    }

    #[test]
    fn test_zero_dt_is_a_pause() {
        let mut galaxy = generate(test_config()).unwrap();
        let before: Vec<Vec2> = galaxy.bodies().iter().map(|b| b.local_position()).collect();
        tick(&mut galaxy, 0.0);
        for (body, p) in galaxy.bodies().iter().zip(&before) {
            assert!((body.local_position() - *p).length() < 1e-2);
        }
    }

    #[test]
    fn test_angles_stay_wrapped() {
        let mut galaxy = Galaxy::from_parts(test_config(), vec![circle_body(1, 100.0, 0.1)], Vec::new());
        // 0.5 rad/s for 100 s is many full turns
        run(&mut galaxy, 100, 1.0);
        let angle = galaxy.bodies()[0].orbit_angle();
        assert!((-std::f32::consts::PI..std::f32::consts::PI).contains(&angle));
        let expected = crate::normalize_angle(50.0);
        assert!((angle - expected).abs() < 1e-3, "{angle} vs {expected}");
    }

    #[test]
    fn test_order_survives_ticks() {
        let mut galaxy = generate(test_config()).unwrap();
        let ids: Vec<u32> = galaxy.bodies().iter().map(Body::id).collect();
        let angles: Vec<f32> = galaxy.bodies().iter().map(|b| b.orbit_angle()).collect();

        run(&mut galaxy, 240, SIM_DT);

        let ids_after: Vec<u32> = galaxy.bodies().iter().map(Body::id).collect();
        assert_eq!(ids, ids_after);
        assert!(
            galaxy
                .bodies()
                .iter()
                .zip(&angles)
                .all(|(b, a)| b.orbit_angle() != *a)
        );
        assert!(galaxy.spawn_distances().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(galaxy.time_ticks, 240);
    }

    #[test]
    fn test_ticks_are_deterministic() {
        let mut a = generate(test_config()).unwrap();
        let mut b = generate(test_config()).unwrap();
        for _ in 0..100 {
            let sa = tick(&mut a, SIM_DT);
            let sb = tick(&mut b, SIM_DT);
            assert_eq!(sa, sb);
        }
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.local_position(), y.local_position());
        }
    }

    #[test]
    fn test_inner_bodies_sweep_faster() {
        let mut galaxy = Galaxy::from_parts(
            test_config(),
            vec![circle_body(1, 150.0, 0.1), circle_body(2, 800.0, 0.1)],
            Vec::new(),
        );
        run(&mut galaxy, 60, SIM_DT);
        let bodies = galaxy.bodies();
        assert!(bodies[0].orbit_angle() > bodies[1].orbit_angle());
    }

    #[test]
    fn test_run_zero_ticks() {
        let mut galaxy = Galaxy::from_parts(test_config(), Vec::new(), Vec::new());
        assert!(run(&mut galaxy, 0, SIM_DT).is_none());
        assert_eq!(galaxy.time_ticks, 0);
    }
}
