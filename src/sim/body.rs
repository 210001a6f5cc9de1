//! Galactic bodies and arm accents

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::orbit::Orbit;
use crate::consts::MASS_FACTOR;
use crate::curve::Color;
use crate::lerp;

/// Kind-specific body payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Star {
        /// Normalized temperature, also the key into the star color gradient
        temperature: f32,
        color: Color,
    },
    Nebula {
        /// Random gradient key drawn once at creation
        color_key: f32,
        color: Color,
    },
}

/// A simulated star or nebula
///
/// `orbit_angle` is the only state that changes after generation, and only
/// the tick changes it. Position and distance are derived from it on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    id: u32,
    kind: BodyKind,
    orbit: Orbit,
    orbit_angle: f32,
    /// Normalized size in [0, 1]
    size: f32,
    /// Display scale at size 0 and size 1
    size_bounds: Vec2,
    density: f32,
}

impl Body {
    pub fn new(
        id: u32,
        kind: BodyKind,
        orbit: Orbit,
        orbit_angle: f32,
        size: f32,
        size_bounds: Vec2,
        density: f32,
    ) -> Self {
        Self {
            id,
            kind,
            orbit,
            orbit_angle,
            size,
            size_bounds,
            density,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    #[inline]
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    #[inline]
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Only the tick advances bodies
    #[inline]
    pub(crate) fn set_orbit_angle(&mut self, angle: f32) {
        self.orbit_angle = angle;
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Scale the renderer should draw this body at
    pub fn display_scale(&self) -> f32 {
        lerp(self.size_bounds.x, self.size_bounds.y, self.size)
    }

    pub fn mass(&self) -> f32 {
        MASS_FACTOR * self.density * self.size * self.size * self.size
    }

    /// Position relative to the galactic center
    #[inline]
    pub fn local_position(&self) -> Vec2 {
        self.orbit.position_at(self.orbit_angle)
    }

    /// World position given the galactic center
    #[inline]
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + self.local_position()
    }

    #[inline]
    pub fn distance_from_center(&self) -> f32 {
        self.orbit.radius_at(self.orbit_angle)
    }

    pub fn color(&self) -> Color {
        match self.kind {
            BodyKind::Star { color, .. } | BodyKind::Nebula { color, .. } => color,
        }
    }

    pub fn temperature(&self) -> Option<f32> {
        match self.kind {
            BodyKind::Star { temperature, .. } => Some(temperature),
            BodyKind::Nebula { .. } => None,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star { .. })
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BodyKind::Star { temperature, .. } => write!(
                f,
                "star #{} size: {}, temperature: {}, distance from GC: {}",
                self.id,
                self.size,
                temperature,
                self.distance_from_center()
            ),
            BodyKind::Nebula { .. } => write!(
                f,
                "nebula #{} size: {}, distance from GC: {}",
                self.id,
                self.size,
                self.distance_from_center()
            ),
        }
    }
}

/// Decorative point along a spiral arm; placed once, never simulated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmAccent {
    /// Position relative to the galactic center
    pub pos: Vec2,
    pub scale: f32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(size: f32) -> Body {
        Body::new(
            1,
            BodyKind::Star {
                temperature: 0.5,
                color: Color::WHITE,
            },
            Orbit::from_eccentricity(100.0, 0.5, 0.0),
            0.0,
            size,
            Vec2::new(2.0, 10.0),
            2.0,
        )
    }

    #[test]
    fn test_identity_and_kind_are_read_only_views() {
        let body = star(0.5);
        assert_eq!(body.id(), 1);
        assert!(matches!(body.kind(), BodyKind::Star { temperature, .. } if *temperature == 0.5));
        assert_eq!(body.temperature(), Some(0.5));
    }

    #[test]
    fn test_mass_scales_with_cube_of_size() {
        let body = star(0.5);
        assert!((body.mass() - 1000.0 * 2.0 * 0.125).abs() < 1e-3);
        assert_eq!(star(0.0).mass(), 0.0);
    }

    #[test]
    fn test_display_scale_lerps_bounds() {
        assert!((star(0.0).display_scale() - 2.0).abs() < 1e-6);
        assert!((star(0.5).display_scale() - 6.0).abs() < 1e-6);
        assert!((star(1.0).display_scale() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_derived_from_angle() {
        let mut body = star(0.3);
        let first = body.local_position();
        assert_eq!(first, body.local_position());
        assert!((body.distance_from_center() - 115.470_05).abs() < 1e-3);

        body.set_orbit_angle(std::f32::consts::FRAC_PI_2);
        assert!((body.distance_from_center() - 100.0).abs() < 1e-3);
        let offset = Vec2::new(10.0, -5.0);
        assert_eq!(body.position(offset), offset + body.local_position());
    }

    #[test]
    fn test_kind_accessors() {
        let body = star(0.3);
        assert!(body.is_star());
        assert_eq!(body.temperature(), Some(0.5));
        assert!(body.to_string().starts_with("star #1 size: 0.3, temperature: 0.5"));
    }
}
