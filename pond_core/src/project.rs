//! # Project Inputs
//!
//! `ProjectInputs` is the flat set of scalars the single-equipment flow works
//! with: one excavator, one truck, the work day, and the pond dimensions.
//! It is rebuilt from form state on every recalculation and never stored.
//!
//! ## Example
//!
//! ```rust
//! use pond_core::config::Defaults;
//! use pond_core::project::ProjectInputs;
//! use pond_core::validation::InputField;
//!
//! let inputs = ProjectInputs::from_defaults(&Defaults::default())
//!     .with_value(InputField::PondDepth, 6.0);
//!
//! assert_eq!(inputs.pond_depth_ft, 6.0);
//! assert!((inputs.pond_volume_yd3() - 222.22).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::pond_volume;
use crate::config::{Defaults, ExcavatorDefaults, TruckDefaults};
use crate::validation::InputField;

/// Input parameters for the single-equipment estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "excavator_capacity_yd3": 2.5,
///   "excavator_cycle_min": 2.0,
///   "truck_capacity_yd3": 12.0,
///   "truck_round_trip_min": 15.0,
///   "work_hours_per_day": 8.0,
///   "pond_length_ft": 40.0,
///   "pond_width_ft": 25.0,
///   "pond_depth_ft": 5.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Excavator bucket capacity (yd³)
    pub excavator_capacity_yd3: f64,

    /// Excavator dig-dump cycle time (minutes)
    pub excavator_cycle_min: f64,

    /// Truck load capacity (yd³)
    pub truck_capacity_yd3: f64,

    /// Truck round-trip time (minutes)
    pub truck_round_trip_min: f64,

    /// Productive equipment hours per day
    pub work_hours_per_day: f64,

    pub pond_length_ft: f64,
    pub pond_width_ft: f64,
    pub pond_depth_ft: f64,
}

impl ProjectInputs {
    /// Build inputs from the configured defaults, using the first default
    /// excavator and truck.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        let excavator = defaults.excavators.first().cloned().unwrap_or_default();
        let truck = defaults.trucks.first().cloned().unwrap_or_default();
        Self::from_parts(&excavator, &truck, defaults)
    }

    fn from_parts(excavator: &ExcavatorDefaults, truck: &TruckDefaults, defaults: &Defaults) -> Self {
        let project = &defaults.project;
        ProjectInputs {
            excavator_capacity_yd3: excavator.bucket_capacity,
            excavator_cycle_min: excavator.cycle_time,
            truck_capacity_yd3: truck.capacity,
            truck_round_trip_min: truck.round_trip_time,
            work_hours_per_day: project.work_hours_per_day,
            pond_length_ft: project.pond_length,
            pond_width_ft: project.pond_width,
            pond_depth_ft: project.pond_depth,
        }
    }

    /// Value of a single field
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::ExcavatorCapacity => self.excavator_capacity_yd3,
            InputField::CycleTime => self.excavator_cycle_min,
            InputField::TruckCapacity => self.truck_capacity_yd3,
            InputField::RoundTripTime => self.truck_round_trip_min,
            InputField::WorkHours => self.work_hours_per_day,
            InputField::PondLength => self.pond_length_ft,
            InputField::PondWidth => self.pond_width_ft,
            InputField::PondDepth => self.pond_depth_ft,
        }
    }

    /// Copy of these inputs with one field replaced
    pub fn with_value(mut self, field: InputField, value: f64) -> Self {
        let slot = match field {
            InputField::ExcavatorCapacity => &mut self.excavator_capacity_yd3,
            InputField::CycleTime => &mut self.excavator_cycle_min,
            InputField::TruckCapacity => &mut self.truck_capacity_yd3,
            InputField::RoundTripTime => &mut self.truck_round_trip_min,
            InputField::WorkHours => &mut self.work_hours_per_day,
            InputField::PondLength => &mut self.pond_length_ft,
            InputField::PondWidth => &mut self.pond_width_ft,
            InputField::PondDepth => &mut self.pond_depth_ft,
        };
        *slot = value;
        self
    }

    /// Pond volume in cubic yards
    pub fn pond_volume_yd3(&self) -> f64 {
        pond_volume(self.pond_length_ft, self.pond_width_ft, self.pond_depth_ft)
    }
}

impl Default for ProjectInputs {
    fn default() -> Self {
        ProjectInputs::from_defaults(&Defaults::default())
    }
}
