//! # Production Rates
//!
//! Hourly production of single units and whole fleets, plus pond volume.
//!
//! ```text
//! excavator rate = (60 / cycle_min)      × bucket_yd3   × 0.85
//! truck rate     = (60 / round_trip_min) × capacity_yd3 × 0.80
//! pond volume    = length × width × depth / 27
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pond_core::calculations::production::{calculate_excavator_rate, calculate_truck_rate};
//!
//! let dig = calculate_excavator_rate(2.5, 2.0);
//! let haul = calculate_truck_rate(12.0, 15.0);
//! assert!((dig - 63.75).abs() < 1e-9);
//! assert!((haul - 38.4).abs() < 1e-9);
//! ```

use crate::equipment::{Equipment, Excavator, Truck};
use crate::units::{CubicFeet, CubicYards, Feet, Minutes};

use super::{EXCAVATOR_EFFICIENCY, TRUCK_EFFICIENCY};

/// Excavator production in yd³/hr at field efficiency.
pub fn calculate_excavator_rate(bucket_capacity_yd3: f64, cycle_time_min: f64) -> f64 {
    let per_hour = CubicYards(bucket_capacity_yd3) * Minutes(cycle_time_min).cycles_per_hour();
    (per_hour * EXCAVATOR_EFFICIENCY).0
}

/// Truck hauling in yd³/hr at field efficiency.
pub fn calculate_truck_rate(capacity_yd3: f64, round_trip_min: f64) -> f64 {
    let per_hour = CubicYards(capacity_yd3) * Minutes(round_trip_min).cycles_per_hour();
    (per_hour * TRUCK_EFFICIENCY).0
}

fn fleet_productivity<E: Equipment>(units: &[E]) -> f64 {
    units
        .iter()
        .filter(|u| u.is_active())
        .map(|u| u.hourly_rate())
        .sum()
}

/// Combined production of all active excavators (0.0 if none are active)
pub fn calculate_excavator_fleet_productivity(excavators: &[Excavator]) -> f64 {
    fleet_productivity(excavators)
}

/// Combined hauling of all active trucks (0.0 if none are active)
pub fn calculate_truck_fleet_productivity(trucks: &[Truck]) -> f64 {
    fleet_productivity(trucks)
}

/// Volume of a rectangular pond in cubic yards, from dimensions in feet.
pub fn pond_volume(length_ft: f64, width_ft: f64, depth_ft: f64) -> f64 {
    let cubic_feet = CubicFeet::from_dimensions(Feet(length_ft), Feet(width_ft), Feet(depth_ft));
    CubicYards::from(cubic_feet).0
}
