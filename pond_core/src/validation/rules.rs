//! Validation ranges, one per field category.

use serde::{Deserialize, Serialize};

use super::fields::FieldCategory;

/// Inclusive `{min, max}` bounds for a field category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRange {
    pub min: f64,
    pub max: f64,
}

impl ValidationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        ValidationRange { min, max }
    }

    /// Check `min <= value <= max`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The `validation` section of the injected configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "excavatorCapacity": { "min": 0.5, "max": 15.0 },
///   "cycleTime": { "min": 0.5, "max": 10.0 },
///   "truckCapacity": { "min": 5.0, "max": 30.0 },
///   "roundTripTime": { "min": 5.0, "max": 60.0 },
///   "workHours": { "min": 1.0, "max": 24.0 },
///   "pondDimensions": { "min": 1.0, "max": 1000.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    pub excavator_capacity: ValidationRange,
    pub cycle_time: ValidationRange,
    pub truck_capacity: ValidationRange,
    pub round_trip_time: ValidationRange,
    pub work_hours: ValidationRange,
    pub pond_dimensions: ValidationRange,
}

impl ValidationRules {
    /// Range for a field category
    pub fn range_for(&self, category: FieldCategory) -> ValidationRange {
        match category {
            FieldCategory::ExcavatorCapacity => self.excavator_capacity,
            FieldCategory::CycleTime => self.cycle_time,
            FieldCategory::TruckCapacity => self.truck_capacity,
            FieldCategory::RoundTripTime => self.round_trip_time,
            FieldCategory::WorkHours => self.work_hours,
            FieldCategory::PondDimension => self.pond_dimensions,
        }
    }

    /// Every category with its range, for consistency checks
    pub fn ranges(&self) -> [(FieldCategory, ValidationRange); 6] {
        [
            (FieldCategory::ExcavatorCapacity, self.excavator_capacity),
            (FieldCategory::CycleTime, self.cycle_time),
            (FieldCategory::TruckCapacity, self.truck_capacity),
            (FieldCategory::RoundTripTime, self.round_trip_time),
            (FieldCategory::WorkHours, self.work_hours),
            (FieldCategory::PondDimension, self.pond_dimensions),
        ]
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules {
            excavator_capacity: ValidationRange::new(0.5, 15.0),
            cycle_time: ValidationRange::new(0.5, 10.0),
            truck_capacity: ValidationRange::new(5.0, 30.0),
            round_trip_time: ValidationRange::new(5.0, 60.0),
            work_hours: ValidationRange::new(1.0, 24.0),
            pond_dimensions: ValidationRange::new(1.0, 1000.0),
        }
    }
}
