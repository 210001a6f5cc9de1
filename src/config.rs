//! Galaxy configuration bundle
//!
//! Everything the generator and the tick need: counts, radii, velocity bounds,
//! arm geometry, response curves, gradients and body templates. Loaded from
//! JSON; any field left out falls back to [`GalaxyConfig::default`].
//!
//! Angles are authored in degrees and converted when used.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_ARM_ACCENTS;
use crate::curve::{Color, ColorStop, Curve, Gradient};
use crate::error::{ConfigIssue, GalaxyError, Result};

/// Traits a template needs to spawn stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarTraits {
    /// Display scale at size 0 (x) and size 1 (y)
    pub size_bounds: Vec2,
    pub density: f32,
    /// Surface color by temperature
    pub color_gradient: Gradient,
}

/// Traits a template needs to spawn nebulae
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NebulaTraits {
    pub size_bounds: Vec2,
    pub density: f32,
    /// Color picked at random once per nebula
    pub color_variation: Gradient,
}

/// Something a body template can do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "capability", rename_all = "snake_case")]
pub enum Capability {
    Star(StarTraits),
    Nebula(NebulaTraits),
    /// Can be drawn as a tinted sprite
    Sprite,
}

/// A named bundle of capabilities used to spawn one kind of object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTemplate {
    pub name: String,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl BodyTemplate {
    pub fn new(name: impl Into<String>, capabilities: Vec<Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities,
        }
    }

    pub fn star_traits(&self) -> Option<&StarTraits> {
        self.capabilities.iter().find_map(|c| match c {
            Capability::Star(traits) => Some(traits),
            _ => None,
        })
    }

    pub fn nebula_traits(&self) -> Option<&NebulaTraits> {
        self.capabilities.iter().find_map(|c| match c {
            Capability::Nebula(traits) => Some(traits),
            _ => None,
        })
    }

    pub fn has_sprite(&self) -> bool {
        self.capabilities
            .iter()
            .any(|c| matches!(c, Capability::Sprite))
    }
}

/// Templates for every object the generator spawns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    pub star: BodyTemplate,
    pub nebula: BodyTemplate,
    pub arm_accent: BodyTemplate,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            star: BodyTemplate::new(
                "star",
                vec![
                    Capability::Sprite,
                    Capability::Star(StarTraits {
                        size_bounds: Vec2::new(1.0, 6.0),
                        density: 1.0,
                        color_gradient: Gradient::new(vec![
                            ColorStop { t: 0.0, color: Color::rgb(1.0, 0.35, 0.2) },
                            ColorStop { t: 0.4, color: Color::rgb(1.0, 0.85, 0.45) },
                            ColorStop { t: 0.7, color: Color::rgb(1.0, 1.0, 0.95) },
                            ColorStop { t: 1.0, color: Color::rgb(0.6, 0.75, 1.0) },
                        ]),
                    }),
                ],
            ),
            nebula: BodyTemplate::new(
                "nebula",
                vec![
                    Capability::Sprite,
                    Capability::Nebula(NebulaTraits {
                        size_bounds: Vec2::new(20.0, 90.0),
                        density: 0.05,
                        color_variation: Gradient::new(vec![
                            ColorStop { t: 0.0, color: Color { r: 0.5, g: 0.2, b: 0.8, a: 0.35 } },
                            ColorStop { t: 0.5, color: Color { r: 0.9, g: 0.3, b: 0.5, a: 0.35 } },
                            ColorStop { t: 1.0, color: Color { r: 0.2, g: 0.5, b: 0.9, a: 0.35 } },
                        ]),
                    }),
                ],
            ),
            arm_accent: BodyTemplate::new("arm_accent", vec![Capability::Sprite]),
        }
    }
}

/// Debug polyline export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Largest semi-minor axis drawn in the orbit family
    pub max_orbit_semi_minor: f32,
    /// Semi-minor step between drawn orbits; below 1 nothing is drawn
    pub orbit_draw_step: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            max_orbit_semi_minor: 1000.0,
            orbit_draw_step: 50.0,
        }
    }
}

/// Complete galaxy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// RNG seed; equal seeds give identical galaxies
    pub seed: u64,
    /// Galactic center reference point
    pub center: Vec2,

    // === Universe ===
    /// Scaling for a future gravity law (unused by the velocity law)
    pub gravitational_constant: f32,

    // === Galaxy ===
    pub galaxy_radius: f32,
    pub galaxy_min_radius: f32,
    pub galactic_center_mass: f32,
    /// Linear velocity of a body at `galaxy_min_radius`
    pub innermost_velocity: f32,
    /// Linear velocity of a body at `galaxy_radius`
    pub outermost_velocity: f32,

    // === Stars ===
    pub star_count: u32,
    pub star_size_distribution: Curve,
    pub star_temperature_distribution: Curve,
    /// Radial placement density for stars
    pub galaxy_star_distribution: Curve,

    // === Nebulae ===
    pub nebula_count: u32,
    pub galaxy_nebula_distribution: Curve,
    pub nebula_size_by_dist: Curve,

    // === Orbits ===
    /// Base eccentricity, scaled by `eccentricity_by_dist`
    pub orbital_eccentricity: f32,
    pub eccentricity_by_dist: Curve,
    pub arm_angle_deg: f32,
    /// Angular width of the band bodies are spawned in around an arm
    pub arm_spread_deg: f32,
    pub arm_lag_deg: f32,
    /// Orbit tilt added per unit of distance (degrees); winds the arms
    pub tilt_rate_deg: f32,

    // === Arm accents ===
    pub arm_accent_size_by_dist: Curve,
    pub arm_accent_color: Gradient,
    pub arm_accent_size_bounds: Vec2,
    pub arm_accent_spacing: f32,
    pub arm_accent_spread_deg: f32,

    pub templates: Templates,
    pub gizmos: GizmoSettings,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            seed: 0x6A1A_C71C,
            center: Vec2::ZERO,

            gravitational_constant: 1.0,

            galaxy_radius: 1000.0,
            galaxy_min_radius: 50.0,
            galactic_center_mass: 1.0e6,
            innermost_velocity: 40.0,
            outermost_velocity: 60.0,

            star_count: 2000,
            star_size_distribution: Curve::from_points(&[(0.0, 0.05), (0.9, 0.3), (1.0, 1.0)]),
            star_temperature_distribution: Curve::identity(),
            galaxy_star_distribution: Curve::from_points(&[(0.0, 0.0), (0.5, 0.3), (1.0, 1.0)]),

            nebula_count: 150,
            galaxy_nebula_distribution: Curve::from_points(&[(0.0, 0.1), (0.6, 0.5), (1.0, 1.0)]),
            nebula_size_by_dist: Curve::from_points(&[(0.0, 0.3), (0.5, 1.0), (1.0, 0.6)]),

            orbital_eccentricity: 0.3,
            eccentricity_by_dist: Curve::from_points(&[(0.0, 0.2), (0.3, 1.0), (1.0, 0.6)]),
            arm_angle_deg: 0.0,
            arm_spread_deg: 60.0,
            arm_lag_deg: 50.0,
            tilt_rate_deg: -0.25,

            arm_accent_size_by_dist: Curve::linear(1.0, 0.4),
            arm_accent_color: Gradient::two(
                Color { r: 0.45, g: 0.55, b: 1.0, a: 0.25 },
                Color { r: 0.8, g: 0.5, b: 0.9, a: 0.25 },
            ),
            arm_accent_size_bounds: Vec2::new(8.0, 40.0),
            arm_accent_spacing: 10.0,
            arm_accent_spread_deg: 20.0,

            templates: Templates::default(),
            gizmos: GizmoSettings::default(),
        }
    }
}

impl GalaxyConfig {
    /// Parse from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Collect every problem with this configuration
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.galaxy_min_radius.is_finite() || self.galaxy_min_radius < 0.0 {
            issues.push(ConfigIssue::new(
                "galaxy_min_radius",
                "must be finite and non-negative",
            ));
        }
        if !self.galaxy_radius.is_finite() || self.galaxy_radius <= self.galaxy_min_radius {
            issues.push(ConfigIssue::new(
                "galaxy_radius",
                format!(
                    "must be finite and greater than galaxy_min_radius ({})",
                    self.galaxy_min_radius
                ),
            ));
        }
        if !(self.orbital_eccentricity > 0.0 && self.orbital_eccentricity < 1.0) {
            issues.push(ConfigIssue::new(
                "orbital_eccentricity",
                format!("{} is outside (0, 1)", self.orbital_eccentricity),
            ));
        } else {
            // Clamped piecewise-linear curves never leave their key range
            let keys = self.eccentricity_by_dist.keys();
            let lowest = keys.iter().map(|k| k.value).fold(f32::INFINITY, f32::min);
            let highest = keys.iter().map(|k| k.value).fold(f32::NEG_INFINITY, f32::max);
            if keys.is_empty() || lowest < 0.0 || highest * self.orbital_eccentricity >= 1.0 {
                issues.push(ConfigIssue::new(
                    "eccentricity_by_dist",
                    "scaled eccentricity must stay within [0, 1)",
                ));
            }
        }

        for (field, value) in [
            ("arm_angle_deg", self.arm_angle_deg),
            ("arm_lag_deg", self.arm_lag_deg),
            ("tilt_rate_deg", self.tilt_rate_deg),
            ("innermost_velocity", self.innermost_velocity),
            ("outermost_velocity", self.outermost_velocity),
            ("galactic_center_mass", self.galactic_center_mass),
            ("gravitational_constant", self.gravitational_constant),
        ] {
            if !value.is_finite() {
                issues.push(ConfigIssue::new(field, "must be finite"));
            }
        }
        if !(0.0..=360.0).contains(&self.arm_spread_deg) {
            issues.push(ConfigIssue::new("arm_spread_deg", "must be within [0, 360]"));
        }
        if !(0.0..=180.0).contains(&self.arm_accent_spread_deg) {
            issues.push(ConfigIssue::new(
                "arm_accent_spread_deg",
                "must be within [0, 180]",
            ));
        }
        if !(self.arm_accent_spacing > 0.0) {
            issues.push(ConfigIssue::new("arm_accent_spacing", "must be positive"));
        } else if !self
            .arm_accent_steps()
            .is_some_and(|steps| steps.saturating_add(1).saturating_mul(2) <= MAX_ARM_ACCENTS)
        {
            issues.push(ConfigIssue::new(
                "arm_accent_spacing",
                format!("too small for the galaxy radius, more than {MAX_ARM_ACCENTS} accents"),
            ));
        }

        if self.templates.star.star_traits().is_none() {
            issues.push(ConfigIssue::new(
                "templates.star",
                format!("template '{}' has no star capability", self.templates.star.name),
            ));
        }
        if self.templates.nebula.nebula_traits().is_none() {
            issues.push(ConfigIssue::new(
                "templates.nebula",
                format!(
                    "template '{}' has no nebula capability",
                    self.templates.nebula.name
                ),
            ));
        }
        if !self.templates.arm_accent.has_sprite() {
            issues.push(ConfigIssue::new(
                "templates.arm_accent",
                format!(
                    "template '{}' has no sprite capability",
                    self.templates.arm_accent.name
                ),
            ));
        }
        if let Some(traits) = self.templates.star.star_traits() {
            if !(traits.density >= 0.0) {
                issues.push(ConfigIssue::new("templates.star", "density must be non-negative"));
            }
        }
        if let Some(traits) = self.templates.nebula.nebula_traits() {
            if !(traits.density >= 0.0) {
                issues.push(ConfigIssue::new("templates.nebula", "density must be non-negative"));
            }
        }

        issues
    }

    /// Fail with every issue at once, logging each one
    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        for issue in &issues {
            log::error!("Error while generating galaxy: {issue}");
        }
        Err(GalaxyError::ConfigurationInvalid(issues))
    }

    /// Eccentricity for an orbit whose semi-minor axis is `dist`
    pub fn eccentricity_at(&self, dist: f32) -> f32 {
        let rel = crate::inverse_lerp(self.galaxy_min_radius, self.galaxy_radius, dist);
        self.orbital_eccentricity * self.eccentricity_by_dist.evaluate(rel)
    }

    /// Number of spacing steps past the first accent pair, `None` when the
    /// spacing or radii can't produce a finite count
    pub fn arm_accent_steps(&self) -> Option<usize> {
        let span = (self.galaxy_radius - self.galaxy_min_radius).max(0.0) as f64;
        let steps = (span / self.arm_accent_spacing as f64).floor();
        if self.arm_accent_spacing > 0.0 && steps.is_finite() {
            // Float to int casts saturate
            Some(steps as usize)
        } else {
            None
        }
    }

    /// Orbit tilt (radians) for a body at `dist`
    pub fn tilt_at(&self, dist: f32) -> f32 {
        (self.arm_angle_deg + dist * self.tilt_rate_deg).to_radians()
    }
}
