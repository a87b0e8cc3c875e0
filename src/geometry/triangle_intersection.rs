// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line, ray and segment hit tests against a triangle
//! All three share one parametric plane solver and differ only in the
//! range of the line parameter they accept

use super::coplanar::{coplanar_overlap, Chord};
use super::linear::{Line3, ParamRange, Ray3, Segment3};
use super::robust_predicates::PlaneClassification;
use super::tolerance::epsilon;
use super::triangle::{footprint_contains, Triangle3};
use crate::error::{GeometryError, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Outcome code of a hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitType {
    /// Query lies in the triangle's plane
    Overlapping,
    /// Query is parallel to the plane but not in it
    Parallel,
    /// Query crosses the plane outside its range or outside the triangle
    Disjoint,
    /// Query crosses the triangle
    Intersecting,
}

/// Hit test result together with the geometry it found
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hit {
    /// Coplanar query; the chord is the part lying on the triangle, if any
    Overlapping(Option<Chord>),
    Parallel,
    Disjoint,
    /// Crossing point, boundary included
    Intersecting(Point3<f64>),
}

impl Hit {
    pub fn kind(&self) -> HitType {
        match self {
            Hit::Overlapping(_) => HitType::Overlapping,
            Hit::Parallel => HitType::Parallel,
            Hit::Disjoint => HitType::Disjoint,
            Hit::Intersecting(_) => HitType::Intersecting,
        }
    }

    pub fn point(&self) -> Option<Point3<f64>> {
        match self {
            Hit::Intersecting(p) => Some(*p),
            _ => None,
        }
    }

    pub fn chord(&self) -> Option<&Chord> {
        match self {
            Hit::Overlapping(chord) => chord.as_ref(),
            _ => None,
        }
    }

    pub fn is_intersecting(&self) -> bool {
        matches!(self, Hit::Intersecting(_))
    }
}

/// Where `base + t * direction` meets the triangle's plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LinearIntersection {
    /// Parallel to the plane and off it
    Parallel,
    /// Contained in the plane with the given unit normal
    Overlapping { normal: Vector3<f64> },
    /// Single crossing at `t`, barycentric `(u, v)`
    Crossing { u: f64, v: f64, t: f64 },
}

impl Triangle3 {
    /// Solve for the plane crossing of `base + t * direction`
    ///
    /// `direction` need not be unit length. The result says nothing about
    /// containment; callers filter `(u, v, t)` themselves.
    pub(crate) fn linear_intersect(
        &self,
        base: &Point3<f64>,
        direction: &Vector3<f64>,
    ) -> Result<LinearIntersection> {
        let eps = epsilon();
        let dir_len = direction.norm();
        if dir_len <= eps {
            return Err(GeometryError::DegenerateDirection);
        }

        let Some(plane) = self.plane() else {
            log::debug!("hit test on degenerate triangle {:?}", self.vertices());
            return Err(GeometryError::DegenerateTriangle);
        };

        let denom = plane.normal.dot(direction);
        if (denom / dir_len).abs() <= eps {
            return Ok(match plane.classify(base) {
                PlaneClassification::OnPlane => LinearIntersection::Overlapping {
                    normal: plane.normal,
                },
                _ => LinearIntersection::Parallel,
            });
        }

        let t = -plane.signed_distance(base) / denom;
        let crossing = base + direction * t;
        let (u, v) = self
            .barycentric(&crossing)
            .ok_or(GeometryError::DegenerateTriangle)?;

        Ok(LinearIntersection::Crossing { u, v, t })
    }

    fn hit_test(
        &self,
        base: &Point3<f64>,
        direction: &Vector3<f64>,
        range: ParamRange,
    ) -> Result<Hit> {
        let eps = epsilon();
        let solved = self.linear_intersect(base, direction)?;
        log::trace!("linear intersection {:?} for range {:?}", solved, range);

        let hit = match solved {
            LinearIntersection::Parallel => Hit::Parallel,
            LinearIntersection::Overlapping { normal } => {
                Hit::Overlapping(coplanar_overlap(self, &normal, base, direction, range))
            }
            LinearIntersection::Crossing { u, v, t } => {
                if !range.contains(t, eps) || !footprint_contains(u, v, eps) {
                    Hit::Disjoint
                } else {
                    Hit::Intersecting(base + direction * t)
                }
            }
        };
        Ok(hit)
    }

    /// Hit test against an infinite line
    pub fn line_hit_test(&self, line: &Line3) -> Result<Hit> {
        self.hit_test(&line.base, &line.direction, ParamRange::LINE)
    }

    /// Hit test against a ray; only `t >= 0` counts
    pub fn ray_hit_test(&self, ray: &Ray3) -> Result<Hit> {
        self.hit_test(&ray.origin, &ray.direction, ParamRange::RAY)
    }

    /// Hit test against a segment; only `0 <= t <= 1` counts
    pub fn segment_hit_test(&self, segment: &Segment3) -> Result<Hit> {
        self.hit_test(&segment.p1, &segment.direction(), ParamRange::SEGMENT)
    }
}
