// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Linear query geometry: lines, rays and segments
//!
//! Each query reduces to `base + t * direction` plus the range of `t` it covers.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Allowed range of the line parameter `t`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const LINE: ParamRange = ParamRange {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };
    pub const RAY: ParamRange = ParamRange {
        min: 0.0,
        max: f64::INFINITY,
    };
    pub const SEGMENT: ParamRange = ParamRange { min: 0.0, max: 1.0 };

    /// Closed containment widened by `eps` on both ends
    pub fn contains(&self, t: f64, eps: f64) -> bool {
        t >= self.min - eps && t <= self.max + eps
    }
}

/// Infinite line `base + t * direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line3 {
    pub base: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Line3 {
    pub fn new(base: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { base, direction }
    }

    /// Line through two points
    pub fn through(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self::new(a, b - a)
    }

    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.base + self.direction * t
    }
}

/// Half-line starting at `origin`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray3 {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray3 {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Bounded segment from `p1` to `p2`, parametrized over `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment3 {
    pub p1: Point3<f64>,
    pub p2: Point3<f64>,
}

impl Segment3 {
    pub fn new(p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self { p1, p2 }
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.p2 - self.p1
    }

    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.p1 + self.direction() * t
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Closest point of the segment to `p`
    ///
    /// A zero-length segment collapses to `p1`.
    pub fn closest_point(&self, p: &Point3<f64>) -> Point3<f64> {
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return self.p1;
        }
        let t = ((p - self.p1).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.p1 + d * t
    }

    pub fn distance_to_point(&self, p: &Point3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_param_ranges() {
        assert!(ParamRange::LINE.contains(-1e12, 0.0));
        assert!(!ParamRange::RAY.contains(-0.5, 1e-10));
        assert!(ParamRange::RAY.contains(0.0, 0.0));
        assert!(ParamRange::SEGMENT.contains(1.0, 0.0));
        assert!(!ParamRange::SEGMENT.contains(1.5, 1e-10));
    }

    #[test]
    fn test_point_at() {
        let line = Line3::through(Point3::new(1.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0));
        assert_eq!(line.point_at(0.5), Point3::new(2.0, 0.0, 0.0));

        let ray = Ray3::new(Point3::origin(), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.point_at(1.5), Point3::new(0.0, 3.0, 0.0));

        let seg = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 4.0));
        assert_eq!(seg.point_at(0.25), Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(seg.length(), 4.0);
    }

    #[test]
    fn test_segment_distance() {
        let seg = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));

        // Interior projection
        assert_relative_eq!(seg.distance_to_point(&Point3::new(1.0, 3.0, 0.0)), 3.0);
        // Past the end clamps to p2
        assert_relative_eq!(seg.distance_to_point(&Point3::new(5.0, 4.0, 0.0)), 5.0);

        let degenerate = Segment3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(
            degenerate.distance_to_point(&Point3::new(1.0, 1.0, 3.0)),
            2.0
        );
    }
}
