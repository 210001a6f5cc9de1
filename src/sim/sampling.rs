//! Distribution sampling over an injected random source
//!
//! Every function takes the RNG explicitly; seed it and the draws repeat.

use glam::Vec2;
use rand::Rng;

use crate::curve::Curve;
use crate::error::{GalaxyError, Result};

/// Map a uniform draw through a response curve
#[inline]
pub fn sample_curve(curve: &Curve, u: f32) -> f32 {
    curve.evaluate(u)
}

/// Uniform draw in [0, 1)
#[inline]
pub fn value<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

/// Bernoulli draw: true with probability `p`
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    value(rng) < p
}

/// Coin flip
#[inline]
pub fn half<R: Rng + ?Sized>(rng: &mut R) -> bool {
    chance(rng, 0.5)
}

/// Uniform point inside the unit disc
pub fn inside_unit_circle<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let theta = value(rng) * std::f32::consts::TAU;
    let r = value(rng).sqrt();
    crate::polar_to_cartesian(r, theta)
}

fn check_triangular(min: f32, max: f32, median: f32) -> Result<()> {
    if min > median || median > max || min > max {
        return Err(GalaxyError::ArgumentInvalid(format!(
            "triangular bounds must satisfy min <= median <= max (min={min}, median={median}, max={max})"
        )));
    }
    Ok(())
}

/// Inverse CDF of the triangular distribution at `u`
pub fn triangular_at(u: f32, min: f32, max: f32, median: f32) -> Result<f32> {
    check_triangular(min, max, median)?;
    if min == max {
        return Ok(min);
    }

    let range = max - min;
    let f = (median - min) / range;
    if u < f {
        Ok(min + (u * range * (median - min)).sqrt())
    } else {
        Ok(max - ((1.0 - u) * range * (max - median)).sqrt())
    }
}

/// Triangular draw in [min, max] peaking at `median`
pub fn triangular<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, median: f32) -> Result<f32> {
    check_triangular(min, max, median)?;
    if min == max {
        return Ok(min);
    }
    triangular_at(value(rng), min, max, median)
}

/// Symmetric jitter in [-width/2, width/2] peaking at 0, in radians
pub fn angular_jitter<R: Rng + ?Sized>(rng: &mut R, width_deg: f32) -> Result<f32> {
    let half_width = width_deg / 2.0;
    Ok(triangular(rng, -half_width, half_width, 0.0)?.to_radians())
}
