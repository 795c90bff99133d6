//! # Timeline Calculations
//!
//! Converts equipment specs into an hours/days estimate, names the limiting
//! resource, and rates confidence in the result.
//!
//! - [`production`] - Per-unit and fleet production rates, pond volume
//! - [`timeline`] - Single-equipment and fleet timeline estimates
//!
//! ## Model
//!
//! Excavation and hauling run in series, so the job moves exactly as fast as
//! the slower of the two. There is no queueing or overlap model.
//!
//! ```text
//! effective_rate = min(excavation_rate, hauling_rate)
//! total_hours    = pond_volume / effective_rate
//! days           = ceil(total_hours / work_hours_per_day)
//! ```

pub mod production;
pub mod timeline;

use serde::{Deserialize, Serialize};

pub use production::{
    calculate_excavator_fleet_productivity, calculate_excavator_rate,
    calculate_truck_fleet_productivity, calculate_truck_rate, pond_volume,
};
pub use timeline::{calculate_timeline, estimate, perform_calculation};

/// Field efficiency of an excavator (positioning, breaks, operator variability)
pub const EXCAVATOR_EFFICIENCY: f64 = 0.85;

/// Field efficiency of a truck (loading, queuing, coordination delays)
pub const TRUCK_EFFICIENCY: f64 = 0.80;

/// Rates closer than this (yd³/hr) count as balanced
pub const BALANCED_THRESHOLD_YD3_HR: f64 = 5.0;

/// Rate gaps wider than this (yd³/hr) lower confidence to Low
pub const LOW_CONFIDENCE_THRESHOLD_YD3_HR: f64 = 20.0;

/// Which stage limits production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bottleneck {
    /// Trucks wait on the excavators
    ExcavationLimited,
    /// Excavators wait on the trucks
    HaulingLimited,
    /// Rates within [`BALANCED_THRESHOLD_YD3_HR`] of each other
    Balanced,
}

impl Bottleneck {
    /// Classify a pair of rates. Exactly one variant applies to any pair.
    pub fn classify(excavation_rate: f64, hauling_rate: f64) -> Self {
        if (excavation_rate - hauling_rate).abs() < BALANCED_THRESHOLD_YD3_HR {
            Bottleneck::Balanced
        } else if excavation_rate < hauling_rate {
            Bottleneck::ExcavationLimited
        } else {
            Bottleneck::HaulingLimited
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Bottleneck::ExcavationLimited => "Excavation limited",
            Bottleneck::HaulingLimited => "Hauling limited",
            Bottleneck::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Qualitative confidence in an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from a timeline calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "timeline_in_days": 2,
///   "total_hours": 8.68,
///   "excavation_rate": 63.75,
///   "hauling_rate": 38.4,
///   "effective_rate": 38.4,
///   "bottleneck": "HaulingLimited",
///   "confidence": "Low",
///   "assumptions": ["Excavator efficiency: 85% ...", "..."],
///   "warnings": ["Hauling is the bottleneck: ..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Whole working days, rounded up (never less than 1)
    pub timeline_in_days: u32,

    /// Equipment hours to move the full volume
    pub total_hours: f64,

    /// Excavation production (yd³/hr)
    pub excavation_rate: f64,

    /// Hauling production (yd³/hr)
    pub hauling_rate: f64,

    /// Slower of the two rates (yd³/hr)
    pub effective_rate: f64,

    pub bottleneck: Bottleneck,

    pub confidence: ConfidenceLevel,

    /// Explanatory notes, in display order
    pub assumptions: Vec<String>,

    /// Advisory notes, empty when balanced
    pub warnings: Vec<String>,
}

impl CalculationResult {
    /// One-line summary, e.g. `"2 days (8.7 hours) - Hauling limited, Low confidence"`
    pub fn summary(&self) -> String {
        format!(
            "{} day{} ({:.1} hours) - {}, {} confidence",
            self.timeline_in_days,
            if self.timeline_in_days == 1 { "" } else { "s" },
            self.total_hours,
            self.bottleneck,
            self.confidence
        )
    }
}
