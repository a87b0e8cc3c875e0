// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Process-wide numeric tolerance
//!
//! A single epsilon drives collinearity, coplanarity and boundary
//! classification.

use crate::error::{GeometryError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// Epsilon used when nothing else has been configured
pub const DEFAULT_EPSILON: f64 = 1e-10;

// Bit pattern of DEFAULT_EPSILON.
static EPSILON_BITS: AtomicU64 = AtomicU64::new(0x3DDB_7CDF_D9D7_BDBB);

/// Current tolerance
#[inline]
pub fn epsilon() -> f64 {
    f64::from_bits(EPSILON_BITS.load(Ordering::Relaxed))
}

/// Replace the process-wide tolerance
pub fn set_epsilon(eps: f64) -> Result<()> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(GeometryError::InvalidTolerance(eps));
    }
    let previous = f64::from_bits(EPSILON_BITS.swap(eps.to_bits(), Ordering::Relaxed));
    log::debug!("tolerance changed from {:e} to {:e}", previous, eps);
    Ok(())
}

/// Restore [`DEFAULT_EPSILON`]
pub fn reset_epsilon() {
    EPSILON_BITS.store(DEFAULT_EPSILON.to_bits(), Ordering::Relaxed);
}

/// `|value| <= epsilon()`
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() <= epsilon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bits_match_constant() {
        assert_eq!(f64::from_bits(0x3DDB_7CDF_D9D7_BDBB), DEFAULT_EPSILON);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        assert_eq!(
            set_epsilon(0.0),
            Err(GeometryError::InvalidTolerance(0.0))
        );
        assert!(set_epsilon(-1e-6).is_err());
        assert!(set_epsilon(f64::NAN).is_err());
        assert!(set_epsilon(f64::INFINITY).is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(-DEFAULT_EPSILON / 2.0));
        assert!(!is_zero(1e-3));
    }
}
