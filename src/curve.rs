//! Response curves and color gradients
//!
//! Curves are keyframed piecewise-linear maps, evaluated with clamping at the
//! first and last key. They bias uniform draws into a density profile or map a
//! normalized distance to a scale factor. Gradients map [0, 1] to a color.

use serde::{Deserialize, Serialize};

use crate::lerp;

/// A single curve keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub t: f32,
    pub value: f32,
}

/// Piecewise-linear response curve
///
/// Keys are kept sorted by `t`. An empty curve evaluates to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct Curve {
    keys: Vec<Key>,
}

impl Curve {
    pub fn new(mut keys: Vec<Key>) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    /// Build from `(t, value)` pairs
    pub fn from_points(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().map(|&(t, value)| Key { t, value }).collect())
    }

    /// Straight line from (0, start) to (1, end)
    pub fn linear(start: f32, end: f32) -> Self {
        Self::from_points(&[(0.0, start), (1.0, end)])
    }

    /// Identity on [0, 1]
    pub fn identity() -> Self {
        Self::linear(0.0, 1.0)
    }

    pub fn constant(value: f32) -> Self {
        Self::from_points(&[(0.0, value)])
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t <= first.t {
            return first.value;
        }
        if t >= last.t {
            return last.value;
        }

        // First key strictly past t; always in 1..len because of the checks above
        let idx = self.keys.partition_point(|k| k.t <= t);
        let a = self.keys[idx - 1];
        let b = self.keys[idx];
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * (t - a.t) / span
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vec<Key>> for Curve {
    fn from(keys: Vec<Key>) -> Self {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<Key> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }
}

/// Gradient stop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

/// Color gradient, blended linearly between stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { stops }
    }

    pub fn two(start: Color, end: Color) -> Self {
        Self::new(vec![
            ColorStop { t: 0.0, color: start },
            ColorStop { t: 1.0, color: end },
        ])
    }

    pub fn evaluate(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::WHITE,
        };
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        let idx = self.stops.partition_point(|s| s.t <= t);
        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.color;
        }
        a.color.lerp(b.color, (t - a.t) / span)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::two(Color::WHITE, Color::WHITE)
    }
}

impl From<Vec<ColorStop>> for Gradient {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self::new(stops)
    }
}

impl From<Gradient> for Vec<ColorStop> {
    fn from(gradient: Gradient) -> Self {
        gradient.stops
    }
}
