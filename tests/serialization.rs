// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Result and value types serialize through serde

use anyhow::Result;
use nalgebra::{Point3, Vector3};
use tri3d::{Hit, HitType, Line3, PointLocation, Triangle3};

#[test]
fn test_overlap_report_to_json() -> Result<()> {
    let tri = Triangle3::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let line = Line3::new(Point3::new(0.5, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    let hit = tri.line_hit_test(&line)?;

    let json = serde_json::to_string(&hit)?;
    assert!(json.starts_with("{\"Overlapping\""));

    let back: Hit = serde_json::from_str(&json)?;
    assert_eq!(back.kind(), HitType::Overlapping);
    assert_eq!(back.chord(), hit.chord());
    Ok(())
}

#[test]
fn test_triangle_and_codes_to_json() -> Result<()> {
    let tri = Triangle3::from_arrays([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]);
    let back: Triangle3 = serde_json::from_str(&serde_json::to_string(&tri)?)?;
    assert_eq!(back, tri);

    assert_eq!(serde_json::to_string(&PointLocation::On)?, "\"On\"");
    assert_eq!(serde_json::to_string(&Hit::Disjoint)?, "\"Disjoint\"");
    Ok(())
}
