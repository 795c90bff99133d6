//! # Equipment and Fleets
//!
//! Excavators dig, trucks haul. A [`Fleet`] holds both and is an immutable
//! value: every add, remove, or edit returns a new `Fleet` and leaves the
//! original untouched.
//!
//! ## Fleet Invariants
//!
//! Violations are silent no-ops (the returned fleet equals the original):
//!
//! - the last remaining unit of a type cannot be removed
//! - a fleet cannot grow past [`FleetLimits`]
//! - an id that is already present cannot be added again
//! - removing or editing an unknown id changes nothing
//!
//! Inactive units stay in the fleet but are left out of production totals.
//!
//! ## Example
//!
//! ```rust
//! use pond_core::config::{Defaults, FleetLimits};
//! use pond_core::equipment::{Excavator, Fleet};
//!
//! let fleet = Fleet::from_defaults(&Defaults::default());
//! let bigger = fleet.add_excavator(Excavator::new("Excavator 2", 3.0, 2.5), &FleetLimits::default());
//! assert_eq!(fleet.excavators.len(), 1);
//! assert_eq!(bigger.excavators.len(), 2);
//!
//! // The only truck cannot be removed
//! let truck_id = bigger.trucks[0].id;
//! assert_eq!(bigger.remove_truck(truck_id), bigger);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculations::{
    calculate_excavator_rate, calculate_truck_rate, perform_calculation, CalculationResult,
};
use crate::config::{Defaults, ExcavatorDefaults, FleetLimits, TruckDefaults};
use crate::errors::CalcResult;
use crate::validation::{validate_excavator_fleet, validate_truck_fleet, FleetIssue, InputField, ValidationRules};

/// Common interface over excavators and trucks.
pub trait Equipment: Clone {
    /// Lowercase type name used in log output
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn is_active(&self) -> bool;

    /// Production rate at field efficiency (yd³/hr)
    fn hourly_rate(&self) -> f64;

    /// The two validated spec fields and their current values
    fn spec_fields(&self) -> [(InputField, f64); 2];
}

/// A digging unit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "6f1c2f7e-2b8a-4a51-9d43-1f0f6f0c9a10",
///   "name": "Excavator 1",
///   "bucket_capacity_yd3": 2.5,
///   "cycle_time_min": 2.0,
///   "is_active": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excavator {
    /// Unique within the fleet
    pub id: Uuid,

    pub name: String,

    /// Bucket capacity (yd³)
    pub bucket_capacity_yd3: f64,

    /// Dig-swing-dump-return cycle (minutes)
    pub cycle_time_min: f64,

    /// Inactive units are excluded from fleet production
    pub is_active: bool,
}

impl Excavator {
    /// Create an active excavator with a fresh id
    pub fn new(name: impl Into<String>, bucket_capacity_yd3: f64, cycle_time_min: f64) -> Self {
        Excavator {
            id: Uuid::new_v4(),
            name: name.into(),
            bucket_capacity_yd3,
            cycle_time_min,
            is_active: true,
        }
    }

    pub fn from_defaults(defaults: &ExcavatorDefaults) -> Self {
        Excavator::new(defaults.name.clone(), defaults.bucket_capacity, defaults.cycle_time)
    }
}

impl Equipment for Excavator {
    const KIND: &'static str = "excavator";

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn hourly_rate(&self) -> f64 {
        calculate_excavator_rate(self.bucket_capacity_yd3, self.cycle_time_min)
    }

    fn spec_fields(&self) -> [(InputField, f64); 2] {
        [
            (InputField::ExcavatorCapacity, self.bucket_capacity_yd3),
            (InputField::CycleTime, self.cycle_time_min),
        ]
    }
}

/// A hauling unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Unique within the fleet
    pub id: Uuid,

    pub name: String,

    /// Load capacity (yd³)
    pub capacity_yd3: f64,

    /// Load-haul-dump-return trip (minutes)
    pub round_trip_min: f64,

    /// Inactive units are excluded from fleet production
    pub is_active: bool,
}

impl Truck {
    /// Create an active truck with a fresh id
    pub fn new(name: impl Into<String>, capacity_yd3: f64, round_trip_min: f64) -> Self {
        Truck {
            id: Uuid::new_v4(),
            name: name.into(),
            capacity_yd3,
            round_trip_min,
            is_active: true,
        }
    }

    pub fn from_defaults(defaults: &TruckDefaults) -> Self {
        Truck::new(defaults.name.clone(), defaults.capacity, defaults.round_trip_time)
    }
}

impl Equipment for Truck {
    const KIND: &'static str = "truck";

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn hourly_rate(&self) -> f64 {
        calculate_truck_rate(self.capacity_yd3, self.round_trip_min)
    }

    fn spec_fields(&self) -> [(InputField, f64); 2] {
        [
            (InputField::TruckCapacity, self.capacity_yd3),
            (InputField::RoundTripTime, self.round_trip_min),
        ]
    }
}

/// Number of active units in a collection
pub fn active_count<E: Equipment>(units: &[E]) -> usize {
    units.iter().filter(|u| u.is_active()).count()
}

fn with_added<E: Equipment>(units: &[E], unit: E, max: usize) -> Vec<E> {
    if units.len() >= max {
        debug!(kind = E::KIND, max, "Fleet limit reached, add ignored");
        return units.to_vec();
    }
    if units.iter().any(|u| u.id() == unit.id()) {
        debug!(kind = E::KIND, id = %unit.id(), "Duplicate equipment id, add ignored");
        return units.to_vec();
    }
    let mut next = units.to_vec();
    next.push(unit);
    next
}

fn with_removed<E: Equipment>(units: &[E], id: Uuid) -> Vec<E> {
    if units.len() <= 1 {
        debug!(kind = E::KIND, "Last unit of its type, remove ignored");
        return units.to_vec();
    }
    units.iter().filter(|u| u.id() != id).cloned().collect()
}

fn with_updated<E: Equipment>(units: &[E], id: Uuid, edit: impl FnOnce(&mut E)) -> Vec<E> {
    let mut next = units.to_vec();
    if let Some(unit) = next.iter_mut().find(|u| u.id() == id) {
        edit(unit);
    }
    next
}

/// Excavators and trucks assigned to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub excavators: Vec<Excavator>,
    pub trucks: Vec<Truck>,
}

impl Fleet {
    pub fn new(excavators: Vec<Excavator>, trucks: Vec<Truck>) -> Self {
        Fleet { excavators, trucks }
    }

    /// One unit per configured default
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Fleet {
            excavators: defaults.excavators.iter().map(Excavator::from_defaults).collect(),
            trucks: defaults.trucks.iter().map(Truck::from_defaults).collect(),
        }
    }

    pub fn add_excavator(&self, excavator: Excavator, limits: &FleetLimits) -> Fleet {
        Fleet {
            excavators: with_added(&self.excavators, excavator, limits.max_excavators),
            trucks: self.trucks.clone(),
        }
    }

    pub fn add_truck(&self, truck: Truck, limits: &FleetLimits) -> Fleet {
        Fleet {
            excavators: self.excavators.clone(),
            trucks: with_added(&self.trucks, truck, limits.max_trucks),
        }
    }

    /// Add an excavator built from the first configured default, named
    /// after its position in the fleet ("Excavator 2", ...).
    pub fn add_default_excavator(&self, defaults: &Defaults, limits: &FleetLimits) -> Fleet {
        let template = defaults.excavators.first().cloned().unwrap_or_default();
        let name = format!("Excavator {}", self.excavators.len() + 1);
        self.add_excavator(
            Excavator::new(name, template.bucket_capacity, template.cycle_time),
            limits,
        )
    }

    /// Add a truck built from the first configured default, named after its
    /// position in the fleet ("Truck 2", ...).
    pub fn add_default_truck(&self, defaults: &Defaults, limits: &FleetLimits) -> Fleet {
        let template = defaults.trucks.first().cloned().unwrap_or_default();
        let name = format!("Truck {}", self.trucks.len() + 1);
        self.add_truck(
            Truck::new(name, template.capacity, template.round_trip_time),
            limits,
        )
    }

    pub fn remove_excavator(&self, id: Uuid) -> Fleet {
        Fleet {
            excavators: with_removed(&self.excavators, id),
            trucks: self.trucks.clone(),
        }
    }

    pub fn remove_truck(&self, id: Uuid) -> Fleet {
        Fleet {
            excavators: self.excavators.clone(),
            trucks: with_removed(&self.trucks, id),
        }
    }

    /// Edit one excavator by id. The id itself cannot be changed.
    pub fn update_excavator(&self, id: Uuid, edit: impl FnOnce(&mut Excavator)) -> Fleet {
        Fleet {
            excavators: with_updated(&self.excavators, id, |unit| {
                edit(unit);
                unit.id = id;
            }),
            trucks: self.trucks.clone(),
        }
    }

    /// Edit one truck by id. The id itself cannot be changed.
    pub fn update_truck(&self, id: Uuid, edit: impl FnOnce(&mut Truck)) -> Fleet {
        Fleet {
            excavators: self.excavators.clone(),
            trucks: with_updated(&self.trucks, id, |unit| {
                edit(unit);
                unit.id = id;
            }),
        }
    }

    pub fn active_excavator_count(&self) -> usize {
        active_count(&self.excavators)
    }

    pub fn active_truck_count(&self) -> usize {
        active_count(&self.trucks)
    }

    /// Every spec violation across both equipment types
    pub fn validate(&self, rules: &ValidationRules) -> Vec<FleetIssue> {
        let mut issues = validate_excavator_fleet(rules, &self.excavators);
        issues.extend(validate_truck_fleet(rules, &self.trucks));
        issues
    }

    /// Timeline estimate for this fleet
    pub fn calculate(&self, pond_volume_yd3: f64, work_hours_per_day: f64) -> CalcResult<CalculationResult> {
        perform_calculation(&self.excavators, &self.trucks, pond_volume_yd3, work_hours_per_day)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::from_defaults(&Defaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> FleetLimits {
        FleetLimits {
            max_excavators: 2,
            max_trucks: 3,
        }
    }

    #[test]
    fn test_from_defaults() {
        let fleet = Fleet::default();
        assert_eq!(fleet.excavators.len(), 1);
        assert_eq!(fleet.trucks.len(), 1);
        assert_eq!(fleet.excavators[0].name, "Excavator 1");
        assert_eq!(fleet.trucks[0].capacity_yd3, 12.0);
        assert!(fleet.excavators[0].is_active);
    }

    #[test]
    fn test_add_respects_limit() {
        let fleet = Fleet::default();
        let two = fleet.add_excavator(Excavator::new("E2", 2.0, 2.0), &limits());
        assert_eq!(two.excavators.len(), 2);

        let three = two.add_excavator(Excavator::new("E3", 2.0, 2.0), &limits());
        assert_eq!(three, two);
    }

    #[test]
    fn test_add_duplicate_id_ignored() {
        let fleet = Fleet::default();
        let copy = fleet.excavators[0].clone();
        assert_eq!(fleet.add_excavator(copy, &limits()), fleet);
    }

    #[test]
    fn test_add_default_units_are_numbered() {
        let defaults = Defaults::default();
        let fleet = Fleet::default()
            .add_default_truck(&defaults, &limits())
            .add_default_truck(&defaults, &limits());
        let names: Vec<&str> = fleet.trucks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Truck 1", "Truck 2", "Truck 3"]);
        assert_eq!(fleet.trucks[2].round_trip_min, 15.0);
    }

    #[test]
    fn test_remove_last_unit_is_noop() {
        let fleet = Fleet::default();
        let id = fleet.excavators[0].id;
        assert_eq!(fleet.remove_excavator(id), fleet);

        let truck_id = fleet.trucks[0].id;
        assert_eq!(fleet.remove_truck(truck_id), fleet);
    }

    #[test]
    fn test_remove_by_id() {
        let fleet = Fleet::default().add_truck(Truck::new("T2", 14.0, 20.0), &limits());
        let first = fleet.trucks[0].id;
        let smaller = fleet.remove_truck(first);
        assert_eq!(smaller.trucks.len(), 1);
        assert_eq!(smaller.trucks[0].name, "T2");
        // Original untouched
        assert_eq!(fleet.trucks.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let fleet = Fleet::default().add_truck(Truck::new("T2", 14.0, 20.0), &limits());
        assert_eq!(fleet.remove_truck(Uuid::new_v4()), fleet);
    }

    #[test]
    fn test_update_by_id() {
        let fleet = Fleet::default();
        let id = fleet.excavators[0].id;
        let edited = fleet.update_excavator(id, |ex| {
            ex.bucket_capacity_yd3 = 3.5;
            ex.is_active = false;
            ex.id = Uuid::new_v4();
        });
        assert_eq!(edited.excavators[0].id, id);
        assert_eq!(edited.excavators[0].bucket_capacity_yd3, 3.5);
        assert!(!edited.excavators[0].is_active);
        assert_eq!(fleet.excavators[0].bucket_capacity_yd3, 2.5);
    }

    #[test]
    fn test_inactive_units_kept_but_not_counted() {
        let fleet = Fleet::default().add_truck(Truck::new("T2", 14.0, 20.0), &limits());
        let id = fleet.trucks[1].id;
        let parked = fleet.update_truck(id, |t| t.is_active = false);
        assert_eq!(parked.trucks.len(), 2);
        assert_eq!(parked.active_truck_count(), 1);
    }

    #[test]
    fn test_hourly_rates() {
        let ex = Excavator::new("E", 2.5, 2.0);
        assert!((ex.hourly_rate() - 63.75).abs() < 1e-9);
        let truck = Truck::new("T", 12.0, 15.0);
        assert!((truck.hourly_rate() - 38.4).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let fleet = Fleet::default();
        let json = serde_json::to_string(&fleet).unwrap();
        let roundtrip: Fleet = serde_json::from_str(&json).unwrap();
        assert_eq!(fleet, roundtrip);
    }
}
