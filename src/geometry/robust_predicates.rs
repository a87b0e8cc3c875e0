// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plane and barycentric predicates shared by the triangle queries
//! Near-zero results are recomputed with compensated arithmetic

use super::tolerance::epsilon;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Plane `normal · x = d` with a unit normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    /// Plane through `point` with the given normal
    ///
    /// Returns `None` when the normal is too short to normalize.
    pub fn from_point_normal(point: &Point3<f64>, normal: &Vector3<f64>) -> Option<Self> {
        let unit = normal.try_normalize(epsilon())?;
        Some(Self {
            normal: unit,
            d: unit.dot(&point.coords),
        })
    }

    /// Signed distance; positive on the side the normal points to
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        point_plane_test(point, &self.normal, self.d)
    }

    pub fn classify(&self, point: &Point3<f64>) -> PlaneClassification {
        classify_point_plane(point, &self.normal, self.d)
    }

    /// Orthogonal projection of `point` onto the plane
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        point - self.normal * self.signed_distance(point)
    }
}

/// `(a * b) - (c * d)` with the rounding error of `c * d` compensated
fn two_product(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let cd = c * d;
    let err = c.mul_add(d, -cd);
    a.mul_add(b, -cd) - err
}

/// Kahan-compensated sum, largest magnitude first
fn compensated_sum(mut terms: [f64; 3]) -> f64 {
    terms.sort_by(|a, b| b.abs().total_cmp(&a.abs()));

    let mut sum = 0.0;
    let mut c = 0.0;
    for &term in &terms {
        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Cross product whose components go through [`two_product`]
pub fn robust_cross(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        two_product(u.y, v.z, u.z, v.y),
        two_product(u.z, v.x, u.x, v.z),
        two_product(u.x, v.y, u.y, v.x),
    )
}

/// Signed distance of `point` to the plane `plane_normal · x = plane_d`
pub fn point_plane_test(point: &Point3<f64>, plane_normal: &Vector3<f64>, plane_d: f64) -> f64 {
    let distance = plane_normal.dot(&point.coords) - plane_d;

    if distance.abs() < epsilon() {
        // Recompute near the plane where cancellation dominates
        let dot = compensated_sum([
            plane_normal.x * point.x,
            plane_normal.y * point.y,
            plane_normal.z * point.z,
        ]);
        dot - plane_d
    } else {
        distance
    }
}

/// Classify point relative to plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneClassification {
    Front,   // Point is on positive side
    Back,    // Point is on negative side
    OnPlane, // Point is coplanar (within epsilon)
}

/// Classify a point relative to a plane
pub fn classify_point_plane(
    point: &Point3<f64>,
    plane_normal: &Vector3<f64>,
    plane_d: f64,
) -> PlaneClassification {
    let eps = epsilon();
    let distance = point_plane_test(point, plane_normal, plane_d);

    if distance > eps {
        PlaneClassification::Front
    } else if distance < -eps {
        PlaneClassification::Back
    } else {
        PlaneClassification::OnPlane
    }
}

/// Barycentric coordinates `(u, v)` of `p` with respect to `a, b, c`,
/// such that the projection of `p` on the triangle plane equals
/// `a + u * (b - a) + v * (c - a)`.
///
/// Returns `None` for a degenerate triangle.
pub fn barycentric(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> Option<(f64, f64)> {
    let e0 = b - a;
    let e1 = c - a;
    let w = p - a;

    let d00 = e0.dot(&e0);
    let d01 = e0.dot(&e1);
    let d11 = e1.dot(&e1);
    let d20 = w.dot(&e0);
    let d21 = w.dot(&e1);

    let denom = two_product(d00, d11, d01, d01);
    // denom == |e0 x e1|^2
    if denom <= epsilon() * epsilon() {
        return None;
    }

    let u = two_product(d11, d20, d01, d21) / denom;
    let v = two_product(d00, d21, d01, d20) / denom;
    Some((u, v))
}
