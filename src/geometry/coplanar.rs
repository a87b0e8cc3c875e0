// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Overlap of a coplanar line, ray or segment with a triangle
//!
//! Separating-axis reasoning restricted to the triangle plane: the axis
//! perpendicular to the query rejects it outright, then each inward edge
//! normal clips the query's parameter range. An empty range on any axis means
//! the two do not meet.

use super::linear::ParamRange;
use super::tolerance::epsilon;
use super::triangle::Triangle3;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Part of a coplanar query that lies on the triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Query parameter where the chord starts
    pub t_enter: f64,
    /// Query parameter where the chord ends (`>= t_enter`)
    pub t_exit: f64,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Chord {
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Chord collapsed to a single point (vertex touch)
    pub fn is_point(&self) -> bool {
        self.length() <= epsilon()
    }
}

/// Projection interval `(min, max)` of the triangle's vertices onto `axis`
pub fn compute_interval(triangle: &Triangle3, axis: &Vector3<f64>) -> (f64, f64) {
    triangle
        .vertices()
        .iter()
        .map(|p| axis.dot(&p.coords))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        })
}

/// Overlap of `base + t * direction`, `t` in `range`, with a coplanar triangle
///
/// `normal` must be the triangle's unit normal and `direction` non-zero.
pub(crate) fn coplanar_overlap(
    triangle: &Triangle3,
    normal: &Vector3<f64>,
    base: &Point3<f64>,
    direction: &Vector3<f64>,
    range: ParamRange,
) -> Option<Chord> {
    let eps = epsilon();
    let dir_len = direction.norm();
    let dir_unit = direction / dir_len;

    // The whole query projects to one value on the in-plane perpendicular
    let across = normal.cross(&dir_unit);
    let (lo, hi) = compute_interval(triangle, &across);
    let offset = across.dot(&base.coords);
    if offset < lo - eps || offset > hi + eps {
        return None;
    }

    let mut t_min = range.min;
    let mut t_max = range.max;

    for edge in triangle.edges() {
        // Inward edge normal; `normal` already follows the vertex order
        let Some(inward) = normal.cross(&edge.direction()).try_normalize(eps) else {
            continue;
        };
        // Signed distance to the edge line at t: a + b * t
        let a = inward.dot(&(base - edge.p1));
        let b = inward.dot(direction);

        if b.abs() <= eps * dir_len {
            if a < -eps {
                return None;
            }
            continue;
        }

        let t = -a / b;
        if b > 0.0 {
            t_min = t_min.max(t);
        } else {
            t_max = t_max.min(t);
        }
    }

    if !t_min.is_finite() || !t_max.is_finite() {
        return None;
    }

    if t_min > t_max {
        // Grazing a vertex leaves an empty range by rounding alone
        if (t_min - t_max) * dir_len > eps {
            return None;
        }
        let mid = 0.5 * (t_min + t_max);
        t_min = mid;
        t_max = mid;
    }

    Some(Chord {
        t_enter: t_min,
        t_exit: t_max,
        start: base + direction * t_min,
        end: base + direction * t_max,
    })
}
