// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - triangle primitive and its queries

mod classification;
mod coplanar;
mod linear;
mod robust_predicates;
mod triangle;
mod triangle_intersection;
pub mod tolerance;

pub use classification::PointLocation;
pub use coplanar::{compute_interval, Chord};
pub use linear::{Line3, ParamRange, Ray3, Segment3};
pub use robust_predicates::{
    barycentric, classify_point_plane, point_plane_test, Plane, PlaneClassification,
};
pub use triangle::Triangle3;
pub use triangle_intersection::{Hit, HitType};
