//! Tilted elliptical orbit geometry
//!
//! The ellipse is centered on the galactic center and parametrized by an
//! angle. Position at angle θ is the axis-aligned point
//! (a·cos(θ - tilt), b·sin(θ - tilt)) rotated by tilt. This is not a Keplerian
//! anomaly: equal angle steps do not cover equal arc lengths.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// An immutable tilted ellipse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    semi_major_axis: f32,
    semi_minor_axis: f32,
    /// Rotation of the major axis (radians)
    tilt_angle: f32,
}

impl Orbit {
    pub fn new(semi_major_axis: f32, semi_minor_axis: f32, tilt_angle: f32) -> Self {
        Self {
            semi_major_axis,
            semi_minor_axis,
            tilt_angle,
        }
    }

    /// Build from the semi-minor axis and eccentricity.
    ///
    /// `eccentricity` is expected in [0, 1); anything else yields NaN axes.
    /// Use [`Orbit::try_from_eccentricity`] to have that checked.
    pub fn from_eccentricity(semi_minor: f32, eccentricity: f32, tilt_angle: f32) -> Self {
        let semi_major = semi_minor / (1.0 - eccentricity * eccentricity).sqrt();
        Self::new(semi_major, semi_minor, tilt_angle)
    }

    /// Checked [`Orbit::from_eccentricity`]
    pub fn try_from_eccentricity(semi_minor: f32, eccentricity: f32, tilt_angle: f32) -> Result<Self> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(GalaxyError::ArgumentInvalid(format!(
                "eccentricity {eccentricity} is outside [0, 1)"
            )));
        }
        if !(semi_minor > 0.0) || !semi_minor.is_finite() {
            return Err(GalaxyError::ArgumentInvalid(format!(
                "semi-minor axis {semi_minor} must be positive"
            )));
        }
        Ok(Self::from_eccentricity(semi_minor, eccentricity, tilt_angle))
    }

    #[inline]
    pub fn semi_major_axis(&self) -> f32 {
        self.semi_major_axis
    }

    #[inline]
    pub fn semi_minor_axis(&self) -> f32 {
        self.semi_minor_axis
    }

    #[inline]
    pub fn tilt_angle(&self) -> f32 {
        self.tilt_angle
    }

    /// Point on the ellipse at `angle`, relative to the galactic center
    pub fn position_at(&self, angle: f32) -> Vec2 {
        let (sin_angle, cos_angle) = (angle - self.tilt_angle).sin_cos();
        let (sin_tilt, cos_tilt) = self.tilt_angle.sin_cos();

        Vec2::new(
            self.semi_major_axis * cos_angle * cos_tilt - self.semi_minor_axis * sin_angle * sin_tilt,
            self.semi_major_axis * cos_angle * sin_tilt + self.semi_minor_axis * sin_angle * cos_tilt,
        )
    }

    #[inline]
    pub fn sqr_radius_at(&self, angle: f32) -> f32 {
        self.position_at(angle).length_squared()
    }

    #[inline]
    pub fn radius_at(&self, angle: f32) -> f32 {
        self.sqr_radius_at(angle).sqrt()
    }

    pub fn eccentricity(&self) -> f32 {
        let ratio = self.semi_minor_axis / self.semi_major_axis;
        (1.0 - ratio * ratio).max(0.0).sqrt()
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orbit of {} to {} tilted {}",
            self.semi_minor_axis, self.semi_major_axis, self.tilt_angle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_from_eccentricity_example() {
        let orbit = Orbit::from_eccentricity(100.0, 0.5, 0.0);
        assert!((orbit.semi_major_axis() - 115.470_05).abs() < 1e-3);

        let p0 = orbit.position_at(0.0);
        assert!((p0.x - 115.470_05).abs() < 1e-3);
        assert!(p0.y.abs() < 1e-3);

        let p90 = orbit.position_at(FRAC_PI_2);
        assert!(p90.x.abs() < 1e-3);
        assert!((p90.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_tilt_rotates_major_axis() {
        let orbit = Orbit::from_eccentricity(100.0, 0.5, FRAC_PI_2);
        // At angle == tilt the point lies on the major axis, rotated by 90°
        let p = orbit.position_at(FRAC_PI_2);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - orbit.semi_major_axis()).abs() < 1e-3);
        assert!((orbit.radius_at(PI) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_eccentricity_is_circle() {
        let orbit = Orbit::from_eccentricity(42.0, 0.0, 1.3);
        for i in 0..16 {
            let angle = i as f32 * 0.4;
            assert!((orbit.radius_at(angle) - 42.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_unchecked_out_of_range_eccentricity_is_nan() {
        let orbit = Orbit::from_eccentricity(10.0, 1.5, 0.0);
        assert!(orbit.semi_major_axis().is_nan());
    }

    #[test]
    fn test_try_from_eccentricity_guards_domain() {
        assert!(Orbit::try_from_eccentricity(10.0, 0.3, 0.0).is_ok());
        assert!(matches!(
            Orbit::try_from_eccentricity(10.0, 1.0, 0.0),
            Err(GalaxyError::ArgumentInvalid(_))
        ));
        assert!(Orbit::try_from_eccentricity(10.0, -0.1, 0.0).is_err());
        assert!(Orbit::try_from_eccentricity(0.0, 0.3, 0.0).is_err());
    }

    #[test]
    fn test_eccentricity_recovered() {
        let orbit = Orbit::from_eccentricity(80.0, 0.6, 0.2);
        assert!((orbit.eccentricity() - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_display() {
        let orbit = Orbit::new(2.0, 1.0, 0.5);
        assert_eq!(orbit.to_string(), "Orbit of 1 to 2 tilted 0.5");
    }

    proptest! {
        #[test]
        fn prop_radius_matches_position(
            semi_minor in 1.0f32..5000.0,
            e in 0.0f32..0.99,
            tilt in -10.0f32..10.0,
            angle in -100.0f32..100.0,
        ) {
            let orbit = Orbit::from_eccentricity(semi_minor, e, tilt);
            let p = orbit.position_at(angle);
            let r = orbit.radius_at(angle);
            prop_assert!((p.length() - r).abs() <= 1e-4 * r.max(1.0));
        }

        #[test]
        fn prop_semi_major_not_shorter(semi_minor in 0.01f32..1.0e5, e in 0.0001f32..0.9999) {
            let orbit = Orbit::from_eccentricity(semi_minor, e, 0.0);
            prop_assert!(orbit.semi_major_axis() >= orbit.semi_minor_axis());
        }

        #[test]
        fn prop_radius_between_axes(
            semi_minor in 1.0f32..5000.0,
            e in 0.0f32..0.95,
            tilt in -6.3f32..6.3,
            angle in -6.3f32..6.3,
        ) {
            let orbit = Orbit::from_eccentricity(semi_minor, e, tilt);
            let r = orbit.radius_at(angle);
            let tol = 1e-3 * orbit.semi_major_axis();
            prop_assert!(r >= orbit.semi_minor_axis() - tol);
            prop_assert!(r <= orbit.semi_major_axis() + tol);
        }

        #[test]
        fn prop_position_is_idempotent(semi_minor in 1.0f32..5000.0, e in 0.0f32..0.9, angle in -50.0f32..50.0) {
            let orbit = Orbit::from_eccentricity(semi_minor, e, 0.7);
            prop_assert_eq!(orbit.position_at(angle), orbit.position_at(angle));
        }
    }
}
