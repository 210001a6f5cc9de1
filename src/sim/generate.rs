//! One-shot galaxy generation
//!
//! Bodies are scattered radially by a placement curve, then each one gets an
//! orbit whose semi-minor axis is its spawn distance and whose tilt grows
//! linearly with that distance. The growing tilt is what winds the arms.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{ArmAccent, Body, BodyKind};
use super::galaxy::Galaxy;
use super::orbit::Orbit;
use super::sampling::{angular_jitter, half, inside_unit_circle, sample_curve, value};
use crate::config::GalaxyConfig;
use crate::curve::Curve;
use crate::error::{ConfigIssue, GalaxyError, Result};
use crate::{inverse_lerp, lerp};

/// Where a freshly placed body starts
struct Placement {
    /// Distance of the raw placement point from the center
    dist: f32,
    orbit: Orbit,
    orbit_angle: f32,
}

/// Generate a galaxy from `config`, seeding the RNG from `config.seed`
pub fn generate(config: GalaxyConfig) -> Result<Galaxy> {
    let mut rng = Pcg32::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generate a galaxy drawing from the given RNG
///
/// The configuration is validated first; on any issue nothing is generated.
pub fn generate_with_rng<R: Rng + ?Sized>(config: GalaxyConfig, rng: &mut R) -> Result<Galaxy> {
    config.validate()?;

    let star_traits = config.templates.star.star_traits().ok_or_else(|| {
        GalaxyError::ConfigurationInvalid(vec![ConfigIssue::new("templates.star", "no star capability")])
    })?;
    let nebula_traits = config.templates.nebula.nebula_traits().ok_or_else(|| {
        GalaxyError::ConfigurationInvalid(vec![ConfigIssue::new(
            "templates.nebula",
            "no nebula capability",
        )])
    })?;

    let total = (config.star_count + config.nebula_count) as usize;
    let mut spawned: Vec<(Body, f32)> = Vec::with_capacity(total);
    let mut next_id = 1u32;

    for _ in 0..config.star_count {
        let placement = place(&config, &config.galaxy_star_distribution, rng)?;

        let size = sample_curve(&config.star_size_distribution, value(rng));
        let temperature = sample_curve(&config.star_temperature_distribution, value(rng));
        let kind = BodyKind::Star {
            temperature,
            color: star_traits.color_gradient.evaluate(temperature),
        };

        let body = Body::new(
            next_id,
            kind,
            placement.orbit,
            placement.orbit_angle,
            size,
            star_traits.size_bounds,
            star_traits.density,
        );
        next_id += 1;
        log::debug!("{body}");
        let dist = body.distance_from_center();
        spawned.push((body, dist));
    }

    for _ in 0..config.nebula_count {
        let placement = place(&config, &config.galaxy_nebula_distribution, rng)?;

        let size = sample_curve(&config.star_size_distribution, value(rng))
            * sample_curve(
                &config.nebula_size_by_dist,
                placement.dist / config.galaxy_radius,
            );
        let color_key = value(rng);
        let kind = BodyKind::Nebula {
            color_key,
            color: nebula_traits.color_variation.evaluate(color_key),
        };

        let body = Body::new(
            next_id,
            kind,
            placement.orbit,
            placement.orbit_angle,
            size,
            nebula_traits.size_bounds,
            nebula_traits.density,
        );
        next_id += 1;
        log::debug!("{body}");
        let dist = body.distance_from_center();
        spawned.push((body, dist));
    }

    let arm_accents = arm_accents(&config, rng)?;

    log::info!(
        "Generated galaxy (seed {}): {} stars, {} nebulae, {} arm accents",
        config.seed,
        config.star_count,
        config.nebula_count,
        arm_accents.len()
    );

    Ok(Galaxy::from_parts(config, spawned, arm_accents))
}

/// Orbit shared by every body and accent at distance `dist`
pub fn distance_orbit(config: &GalaxyConfig, dist: f32) -> Orbit {
    Orbit::from_eccentricity(dist, config.eccentricity_at(dist), config.tilt_at(dist))
}

/// Angle on `orbit` where the arm crosses it (first arm; the second is + π)
pub fn arm_crossing_angle(config: &GalaxyConfig, orbit: &Orbit) -> f32 {
    orbit.tilt_angle() - config.arm_lag_deg.to_radians()
}

fn place<R: Rng + ?Sized>(config: &GalaxyConfig, placement: &Curve, rng: &mut R) -> Result<Placement> {
    let span = config.galaxy_radius - config.galaxy_min_radius;

    let dir = inside_unit_circle(rng);
    let pos: Vec2 =
        span * sample_curve(placement, value(rng)) * dir + dir.normalize_or_zero() * config.galaxy_min_radius;
    let dist = pos.length();
    let orbit = distance_orbit(config, dist);

    let mut orbit_angle = orbit.tilt_angle()
        + (config.arm_lag_deg - config.arm_angle_deg).to_radians()
        + angular_jitter(rng, config.arm_spread_deg)?;
    // Either side of the galaxy
    if half(rng) {
        orbit_angle += PI;
    }

    Ok(Placement {
        dist,
        orbit,
        orbit_angle,
    })
}

/// Decorative points along both arms, one pair per `arm_accent_spacing`
fn arm_accents<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> Result<Vec<ArmAccent>> {
    let steps = config.arm_accent_steps().ok_or_else(|| {
        GalaxyError::ConfigurationInvalid(vec![ConfigIssue::new(
            "arm_accent_spacing",
            "must be positive",
        )])
    })?;
    let mut accents = Vec::with_capacity(2 * (steps + 1));
    let bounds = config.arm_accent_size_bounds;

    for step in 0..=steps {
        // Step from an index so long arms don't accumulate rounding
        let radius = config.galaxy_min_radius + step as f32 * config.arm_accent_spacing;
        if radius > config.galaxy_radius {
            break;
        }

        let orbit = distance_orbit(config, radius);
        let crossing = arm_crossing_angle(config, &orbit);
        let a = orbit.position_at(crossing + angular_jitter(rng, config.arm_accent_spread_deg)?);
        let b = orbit.position_at(PI + crossing + angular_jitter(rng, config.arm_accent_spread_deg)?);

        for pos in [a, b] {
            let rel = inverse_lerp(config.galaxy_min_radius, config.galaxy_radius, pos.length());
            let size_scale = sample_curve(&config.arm_accent_size_by_dist, rel) * value(rng);
            accents.push(ArmAccent {
                pos,
                scale: lerp(bounds.x, bounds.y, size_scale),
                color: config.arm_accent_color.evaluate(value(rng)),
            });
        }
    }

    Ok(accents)
}
