// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for triangle queries

/// Errors raised by queries that cannot produce a meaningful result code
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("triangle is degenerate (collinear or duplicate vertices)")]
    DegenerateTriangle,

    #[error("query direction has zero length")]
    DegenerateDirection,

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
