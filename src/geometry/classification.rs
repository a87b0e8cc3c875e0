// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point classification against a triangle
//! Determines if a coplanar point is inside, outside, or on the boundary

use super::robust_predicates::PlaneClassification;
use super::tolerance::epsilon;
use super::triangle::{footprint_contains, Triangle3};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Location of a point relative to a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointLocation {
    /// Coplanar and on an edge or vertex (within epsilon)
    On,
    /// Coplanar and strictly inside
    Inside,
    /// Coplanar but outside
    Outside,
    /// Not coplanar, or the triangle itself is degenerate
    Invalid,
}

impl Triangle3 {
    /// Classify `p` against this triangle
    pub fn point_location(&self, p: &Point3<f64>) -> PointLocation {
        let Some(plane) = self.plane() else {
            log::debug!("point location on degenerate triangle {:?}", self.vertices());
            return PointLocation::Invalid;
        };

        if plane.classify(p) != PlaneClassification::OnPlane {
            return PointLocation::Invalid;
        }

        match self.barycentric(p) {
            Some((u, v)) => classify_barycentric(u, v, epsilon()),
            None => PointLocation::Invalid,
        }
    }
}

/// Classify barycentric `(u, v)` with an `eps` band around each boundary line
fn classify_barycentric(u: f64, v: f64, eps: f64) -> PointLocation {
    if !footprint_contains(u, v, eps) {
        return PointLocation::Outside;
    }

    let w = u + v;
    if u.abs() <= eps || v.abs() <= eps || (w - 1.0).abs() <= eps {
        PointLocation::On
    } else {
        PointLocation::Inside
    }
}
