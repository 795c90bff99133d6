//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the estimator deals with.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## US Customary Units
//!
//! - Length: feet (ft)
//! - Volume: cubic feet (ft³), cubic yards (yd³)
//! - Time: minutes (equipment cycles)
//!
//! ## Example
//!
//! ```rust
//! use pond_core::units::{CubicFeet, CubicYards, Feet};
//!
//! let volume = CubicFeet::from_dimensions(Feet(30.0), Feet(9.0), Feet(1.0));
//! let yards: CubicYards = volume.into();
//! assert_eq!(yards.0, 10.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Cubic feet in one cubic yard (3 ft × 3 ft × 3 ft)
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

/// Minutes in one hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards (the unit bucket and truck capacities are rated in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

impl CubicFeet {
    /// Volume of a rectangular excavation
    pub fn from_dimensions(length: Feet, width: Feet, depth: Feet) -> Self {
        CubicFeet(length.0 * width.0 * depth.0)
    }
}

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_CUBIC_YARD)
    }
}

impl From<CubicYards> for CubicFeet {
    fn from(cy: CubicYards) -> Self {
        CubicFeet(cy.0 * CUBIC_FEET_PER_CUBIC_YARD)
    }
}

// ============================================================================
// Time Units
// ============================================================================

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl Minutes {
    /// How many repetitions of this duration fit in one hour
    pub fn cycles_per_hour(self) -> f64 {
        MINUTES_PER_HOUR / self.0
    }
}

impl Mul<f64> for CubicYards {
    type Output = CubicYards;
    fn mul(self, rhs: f64) -> CubicYards {
        CubicYards(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_feet_to_yards() {
        let cf = CubicFeet(54.0);
        let cy: CubicYards = cf.into();
        assert!((cy.0 - 2.0).abs() < 1e-12);

        let back: CubicFeet = cy.into();
        assert!((back.0 - 54.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_pond_volume() {
        // 40 x 25 x 5 ft = 5000 ft³ = 185.19 yd³
        let cf = CubicFeet::from_dimensions(Feet(40.0), Feet(25.0), Feet(5.0));
        assert_eq!(cf.0, 5000.0);
        let cy: CubicYards = cf.into();
        assert!((cy.0 - 185.185).abs() < 0.001);
    }

    #[test]
    fn test_cycles_per_hour() {
        assert_eq!(Minutes(2.0).cycles_per_hour(), 30.0);
        assert_eq!(Minutes(15.0).cycles_per_hour(), 4.0);
    }

    #[test]
    fn test_volume_arithmetic() {
        assert_eq!((CubicYards(2.0) * 0.5).0, 1.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");
    }
}
