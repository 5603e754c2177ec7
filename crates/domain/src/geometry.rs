//! Radar chart geometry for base stats.
//!
//! Stat `i` of `n` sits at angle `2πi/n - π/2`: the first stat points
//! straight up and the rest proceed clockwise in screen coordinates
//! (y grows downward). The radius scales linearly from the center
//! (value 0) to `max_radius` (value `max_scale`).

use std::f64::consts::{FRAC_PI_2, TAU};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const DEFAULT_MAX_SCALE: f64 = 150.0;
pub const DEFAULT_MAX_RADIUS: f64 = 140.0;
pub const DEFAULT_CENTER: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What to do with a stat above `max_scale`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Let the vertex land outside the nominal chart radius.
    #[default]
    Allow,
    /// Pin the vertex to `[0, max_radius]`.
    Clamp,
}

impl FromStr for OverflowPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "clamp" => Ok(Self::Clamp),
            other => Err(DomainError::parse(format!(
                "unknown overflow policy '{other}'"
            ))),
        }
    }
}

/// Chart scale and placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarConfig {
    /// Stat value that maps onto the outer ring
    pub max_scale: f64,
    pub max_radius: f64,
    pub center: Point,
    pub overflow: OverflowPolicy,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            max_radius: DEFAULT_MAX_RADIUS,
            center: Point::new(DEFAULT_CENTER, DEFAULT_CENTER),
            overflow: OverflowPolicy::Allow,
        }
    }
}

impl RadarConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            return Err(DomainError::validation(format!(
                "max scale must be positive, got {}",
                self.max_scale
            )));
        }
        if !(self.max_radius.is_finite() && self.max_radius >= 0.0) {
            return Err(DomainError::validation(format!(
                "max radius must be non-negative, got {}",
                self.max_radius
            )));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(DomainError::validation(format!(
                "chart center must be finite, got ({}, {})",
                self.center.x, self.center.y
            )));
        }
        Ok(())
    }

    /// Fraction of the outer ring a value reaches, after the overflow policy.
    fn ratio(&self, value: f64) -> f64 {
        let ratio = value / self.max_scale;
        match self.overflow {
            OverflowPolicy::Allow => ratio,
            OverflowPolicy::Clamp => ratio.clamp(0.0, 1.0),
        }
    }

    /// Vertex for stat `index` of `total`.
    pub fn point(&self, index: usize, total: usize, value: f64) -> Point {
        let angle = TAU * index as f64 / total as f64 - FRAC_PI_2;
        let radius = self.max_radius * self.ratio(value);
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Fill percentage for the matching stat bar.
    pub fn bar_percent(&self, value: f64) -> f64 {
        self.ratio(value) * 100.0
    }
}

/// Project stat values onto radar vertices, one per stat, in input order.
pub fn project_stats(values: &[f64], config: &RadarConfig) -> Vec<Point> {
    let total = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| config.point(i, total, *value))
        .collect()
}

/// SVG `points` attribute for a polygon: `"x,y x,y ..."`.
pub fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
