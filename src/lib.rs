// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyframe triangle primitive
//!
//! A degenerate-aware 3D triangle: validity, area, perimeter, point distance,
//! point classification and line/ray/segment hit tests.
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use tri3d::{HitType, Ray3, Triangle3};
//!
//! let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
//! let ray = Ray3::new(Point3::new(0.2, 0.2, -1.0), Vector3::z());
//! let hit = tri.ray_hit_test(&ray).unwrap();
//! assert_eq!(hit.kind(), HitType::Intersecting);
//! ```

pub mod config;
pub mod error;
pub mod geometry;

pub use config::GeometryConfig;
pub use error::{GeometryError, Result};
pub use geometry::{
    Chord, Hit, HitType, Line3, ParamRange, Plane, PointLocation, Ray3, Segment3, Triangle3,
};
