// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle value type, metrics and rigid transforms
//!
//! The vertex order is significant: it fixes the orientation of
//! [`Triangle3::normal`] by the right-hand rule. Validity is not enforced at
//! construction; queries on a degenerate triangle report it through their
//! result codes.

use super::linear::Segment3;
use super::robust_predicates::{barycentric, robust_cross, Plane};
use super::tolerance::epsilon;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle in 3D space stored as an ordered vertex triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle3 {
    points: [Point3<f64>; 3],
}

impl Default for Triangle3 {
    fn default() -> Self {
        Self {
            points: [Point3::origin(); 3],
        }
    }
}

impl From<[Point3<f64>; 3]> for Triangle3 {
    fn from(points: [Point3<f64>; 3]) -> Self {
        Self { points }
    }
}

impl Triangle3 {
    pub fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    pub fn from_arrays(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> Self {
        Self::new(Point3::from(p0), Point3::from(p1), Point3::from(p2))
    }

    /// Vertices in their defining order
    pub fn vertices(&self) -> &[Point3<f64>; 3] {
        &self.points
    }

    /// Vertex `i`; panics if `i > 2`
    pub fn vertex(&self, i: usize) -> &Point3<f64> {
        &self.points[i]
    }

    /// Boundary edges `p0→p1`, `p1→p2`, `p2→p0`
    pub fn edges(&self) -> [Segment3; 3] {
        let [a, b, c] = self.points;
        [Segment3::new(a, b), Segment3::new(b, c), Segment3::new(c, a)]
    }

    pub fn edge_lengths(&self) -> [f64; 3] {
        self.edges().map(|e| e.length())
    }

    /// Edge cross product `(p1 - p0) × (p2 - p0)`
    fn edge_cross(&self) -> Vector3<f64> {
        let [a, b, c] = &self.points;
        robust_cross(&(b - a), &(c - a))
    }

    /// The three points are not collinear (within tolerance)
    pub fn is_valid(&self) -> bool {
        self.edge_cross().norm() > epsilon()
    }

    /// Normal by Newell's method
    ///
    /// Not normalized: the magnitude is twice the area. Swapping two vertices
    /// flips its direction.
    pub fn normal(&self) -> Vector3<f64> {
        let mut n = Vector3::zeros();
        for i in 0..3 {
            let cur = &self.points[i];
            let next = &self.points[(i + 1) % 3];
            n.x += (cur.y - next.y) * (cur.z + next.z);
            n.y += (cur.z - next.z) * (cur.x + next.x);
            n.z += (cur.x - next.x) * (cur.y + next.y);
        }
        n
    }

    /// Unit normal, `None` for a degenerate triangle
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        if !self.is_valid() {
            return None;
        }
        self.normal().try_normalize(epsilon())
    }

    /// Supporting plane, `None` for a degenerate triangle
    pub fn plane(&self) -> Option<Plane> {
        if !self.is_valid() {
            return None;
        }
        Plane::from_point_normal(&self.points[0], &self.normal())
    }

    pub fn area(&self) -> f64 {
        self.edge_cross().norm() * 0.5
    }

    pub fn perimeter(&self) -> f64 {
        self.edge_lengths().iter().sum()
    }

    pub fn centroid(&self) -> Point3<f64> {
        let [a, b, c] = &self.points;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Barycentric `(u, v)` of the projection of `p`, `None` when degenerate
    pub fn barycentric(&self, p: &Point3<f64>) -> Option<(f64, f64)> {
        let [a, b, c] = &self.points;
        barycentric(p, a, b, c)
    }

    /// Distance from `p` to the closest point of the triangle
    pub fn to_point_distance(&self, p: &Point3<f64>) -> f64 {
        if let Some(plane) = self.plane() {
            let projected = plane.project(p);
            if let Some((u, v)) = self.barycentric(&projected) {
                if footprint_contains(u, v, epsilon()) {
                    return plane.signed_distance(p).abs();
                }
            }
        } else {
            log::debug!("distance query on degenerate triangle {:?}", self.points);
        }

        // Nearest point lies on the boundary
        self.edges()
            .iter()
            .map(|edge| edge.distance_to_point(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// Rotate about the global x axis; y turns towards z
    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate(&Rotation3::from_axis_angle(&Vector3::x_axis(), angle));
    }

    /// Rotate about the global y axis; z turns towards x
    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate(&Rotation3::from_axis_angle(&Vector3::y_axis(), angle));
    }

    /// Rotate about the global z axis; x turns towards y
    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate(&Rotation3::from_axis_angle(&Vector3::z_axis(), angle));
    }

    fn rotate(&mut self, rotation: &Rotation3<f64>) {
        for p in &mut self.points {
            *p = rotation * *p;
        }
    }

    pub fn translate(&mut self, offset: &Vector3<f64>) {
        let translation = Translation3::from(*offset);
        for p in &mut self.points {
            *p = translation.transform_point(p);
        }
    }

    /// Apply a homogeneous transform to every vertex
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for p in &mut self.points {
            *p = matrix.transform_point(p);
        }
    }
}

/// `u >= 0, v >= 0, u + v <= 1`, each widened by `eps`
pub(crate) fn footprint_contains(u: f64, v: f64, eps: f64) -> bool {
    u >= -eps && v >= -eps && u + v <= 1.0 + eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn unit_right() -> Triangle3 {
        Triangle3::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    #[test]
    fn test_default_is_degenerate() {
        let tri = Triangle3::default();
        assert!(!tri.is_valid());
        assert_eq!(tri.area(), 0.0);
        assert!(tri.plane().is_none());
        assert!(tri.unit_normal().is_none());
    }

    #[test]
    fn test_newell_normal() {
        let tri = unit_right();
        assert_relative_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(tri.unit_normal().unwrap(), Vector3::new(0.0, 0.0, 1.0));

        let scaled = Triangle3::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
        assert_relative_eq!(scaled.normal().norm(), 2.0 * scaled.area());
    }

    #[test]
    fn test_area_and_perimeter() {
        let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
        assert_relative_eq!(tri.area(), 6.0);
        assert_relative_eq!(tri.perimeter(), 12.0);
        assert_eq!(tri.edge_lengths(), [3.0, 5.0, 4.0]);
    }

    #[test]
    fn test_collinear_is_invalid() {
        let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert!(!tri.is_valid());
        assert!(tri.area() < 1e-12);
    }

    #[test]
    fn test_centroid() {
        let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 3.0]);
        assert_relative_eq!(tri.centroid(), Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_point_distance_inside_footprint() {
        let tri = unit_right();
        assert_relative_eq!(tri.to_point_distance(&Point3::new(0.25, 0.25, 2.0)), 2.0);
        assert_relative_eq!(tri.to_point_distance(&Point3::new(0.25, 0.25, -3.0)), 3.0);
        assert_relative_eq!(tri.to_point_distance(&Point3::new(0.25, 0.25, 0.0)), 0.0);
    }

    #[test]
    fn test_point_distance_outside_footprint() {
        let tri = unit_right();
        // Nearest feature is the vertex (1, 0, 0)
        assert_relative_eq!(tri.to_point_distance(&Point3::new(2.0, 0.0, 0.0)), 1.0);
        // Nearest feature is the edge along x, lifted off plane
        assert_relative_eq!(
            tri.to_point_distance(&Point3::new(0.5, -3.0, 4.0)),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_point_distance_degenerate_uses_edges() {
        let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert_relative_eq!(tri.to_point_distance(&Point3::new(1.0, 2.0, 0.0)), 2.0);
    }

    #[test]
    fn test_rotations_follow_axis_convention() {
        let mut tri = Triangle3::from_arrays([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]);

        tri.rotate_x(FRAC_PI_2);
        // y -> z, z -> -y, x fixed
        assert_relative_eq!(*tri.vertex(0), Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(*tri.vertex(1), Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(*tri.vertex(2), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        let mut tri = Triangle3::from_arrays([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        tri.rotate_y(FRAC_PI_2);
        assert_relative_eq!(*tri.vertex(0), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        tri.rotate_z(FRAC_PI_2);
        assert_relative_eq!(*tri.vertex(0), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_is_about_origin() {
        let mut tri = Triangle3::from_arrays([5.0, 0.0, 0.0], [6.0, 0.0, 0.0], [5.0, 1.0, 0.0]);
        tri.rotate_z(PI);
        assert_relative_eq!(*tri.vertex(0), Point3::new(-5.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_translate_and_transform() {
        let mut tri = unit_right();
        tri.translate(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(*tri.vertex(0), Point3::new(1.0, 2.0, 3.0));

        tri.transform(&Matrix4::new_translation(&Vector3::new(-1.0, -2.0, -3.0)));
        assert_eq!(tri, unit_right());

        tri.transform(&Matrix4::new_scaling(2.0));
        assert_relative_eq!(tri.area(), 2.0);
    }
}
