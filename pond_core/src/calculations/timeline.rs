//! # Timeline Estimates
//!
//! Two entry points share one algorithm:
//!
//! - [`calculate_timeline`] - one excavator, one truck (simplified flow)
//! - [`perform_calculation`] - a fleet of each (full flow)
//!
//! Both are pure: no I/O, inputs untouched, identical inputs give identical
//! results.
//!
//! ## Example
//!
//! ```rust
//! use pond_core::calculations::{calculate_timeline, Bottleneck, ConfidenceLevel};
//!
//! let result = calculate_timeline(2.5, 2.0, 12.0, 15.0, 333.33, 8.0)?;
//! assert_eq!(result.timeline_in_days, 2);
//! assert_eq!(result.bottleneck, Bottleneck::HaulingLimited);
//! assert_eq!(result.confidence, ConfidenceLevel::Low);
//! # Ok::<(), pond_core::errors::CalculationError>(())
//! ```

use tracing::debug;

use crate::equipment::{active_count, Excavator, Truck};
use crate::errors::{CalcResult, CalculationError, EstimateError};
use crate::project::ProjectInputs;
use crate::validation::{validate_all_inputs, ValidationRules};

use super::production::{
    calculate_excavator_fleet_productivity, calculate_excavator_rate,
    calculate_truck_fleet_productivity, calculate_truck_rate,
};
use super::{
    Bottleneck, CalculationResult, ConfidenceLevel, EXCAVATOR_EFFICIENCY,
    LOW_CONFIDENCE_THRESHOLD_YD3_HR, TRUCK_EFFICIENCY,
};

/// Active unit counts, present only on the fleet path
#[derive(Debug, Clone, Copy)]
struct FleetCounts {
    excavators: usize,
    trucks: usize,
}

/// Estimate with a single excavator and a single truck.
///
/// # Arguments
///
/// * `excavator_capacity_yd3` / `excavator_cycle_min` - the excavator
/// * `truck_capacity_yd3` / `truck_round_trip_min` - the truck
/// * `pond_volume_yd3` - volume to move
/// * `work_hours_per_day` - productive hours per day
///
/// # Returns
///
/// * `Ok(CalculationResult)` - the estimate
/// * `Err(InvalidConfiguration)` - volume or work hours not positive, the
///   equipment specs do not yield a positive finite rate, or the day count
///   does not fit in a `u32`
pub fn calculate_timeline(
    excavator_capacity_yd3: f64,
    excavator_cycle_min: f64,
    truck_capacity_yd3: f64,
    truck_round_trip_min: f64,
    pond_volume_yd3: f64,
    work_hours_per_day: f64,
) -> CalcResult<CalculationResult> {
    let excavation_rate = calculate_excavator_rate(excavator_capacity_yd3, excavator_cycle_min);
    let hauling_rate = calculate_truck_rate(truck_capacity_yd3, truck_round_trip_min);
    build_result(excavation_rate, hauling_rate, pond_volume_yd3, work_hours_per_day, None)
}

/// Estimate with a fleet of excavators and trucks.
///
/// Only active units contribute. Balanced fleets rate High confidence only
/// with at least two active units of each type.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - the estimate
/// * `Err(InsufficientEquipment)` - no active excavator or no active truck
/// * `Err(InvalidConfiguration)` - volume or work hours not positive, the
///   equipment specs do not yield a positive finite rate, or the day count
///   does not fit in a `u32`
pub fn perform_calculation(
    excavators: &[Excavator],
    trucks: &[Truck],
    pond_volume_yd3: f64,
    work_hours_per_day: f64,
) -> CalcResult<CalculationResult> {
    let counts = FleetCounts {
        excavators: active_count(excavators),
        trucks: active_count(trucks),
    };
    if counts.excavators == 0 || counts.trucks == 0 {
        debug!(
            active_excavators = counts.excavators,
            active_trucks = counts.trucks,
            "Fleet has no active units of one type"
        );
        return Err(CalculationError::InsufficientEquipment {
            active_excavators: counts.excavators,
            active_trucks: counts.trucks,
        });
    }

    let excavation_rate = calculate_excavator_fleet_productivity(excavators);
    let hauling_rate = calculate_truck_fleet_productivity(trucks);
    build_result(
        excavation_rate,
        hauling_rate,
        pond_volume_yd3,
        work_hours_per_day,
        Some(counts),
    )
}

/// Validate single-equipment inputs and estimate in one step.
///
/// Validation is fail-fast, so at most one field error is reported.
pub fn estimate(rules: &ValidationRules, inputs: &ProjectInputs) -> Result<CalculationResult, EstimateError> {
    let inputs = validate_all_inputs(rules, inputs)?;
    let result = calculate_timeline(
        inputs.excavator_capacity_yd3,
        inputs.excavator_cycle_min,
        inputs.truck_capacity_yd3,
        inputs.truck_round_trip_min,
        inputs.pond_volume_yd3(),
        inputs.work_hours_per_day,
    )?;
    Ok(result)
}

fn build_result(
    excavation_rate: f64,
    hauling_rate: f64,
    pond_volume_yd3: f64,
    work_hours_per_day: f64,
    fleet: Option<FleetCounts>,
) -> CalcResult<CalculationResult> {
    if !(pond_volume_yd3 > 0.0) {
        return Err(CalculationError::invalid_configuration(format!(
            "Pond volume must be greater than zero (got {})",
            pond_volume_yd3
        )));
    }
    if !(work_hours_per_day > 0.0) {
        return Err(CalculationError::invalid_configuration(format!(
            "Work hours per day must be greater than zero (got {})",
            work_hours_per_day
        )));
    }
    if !(excavation_rate.is_finite() && hauling_rate.is_finite()) {
        return Err(CalculationError::invalid_configuration(
            "Cycle and round-trip times must be greater than zero",
        ));
    }

    let effective_rate = excavation_rate.min(hauling_rate);
    if !(effective_rate > 0.0) {
        return Err(CalculationError::invalid_configuration(
            "Bucket and truck capacities must be greater than zero",
        ));
    }

    let total_hours = pond_volume_yd3 / effective_rate;
    let days_exact = total_hours / work_hours_per_day;
    if !total_hours.is_finite() || !(days_exact <= u32::MAX as f64) {
        return Err(CalculationError::invalid_configuration(
            "Estimated duration is too large to represent; check equipment specs and pond volume",
        ));
    }
    let timeline_in_days = (days_exact.ceil() as u32).max(1);

    let bottleneck = Bottleneck::classify(excavation_rate, hauling_rate);
    let confidence = assess_confidence(bottleneck, excavation_rate, hauling_rate, fleet);

    debug!(
        excavation_rate,
        hauling_rate,
        total_hours,
        timeline_in_days,
        bottleneck = %bottleneck,
        confidence = %confidence,
        "Timeline calculated"
    );

    Ok(CalculationResult {
        timeline_in_days,
        total_hours,
        excavation_rate,
        hauling_rate,
        effective_rate,
        bottleneck,
        confidence,
        assumptions: assumptions(fleet),
        warnings: warnings(bottleneck, excavation_rate, hauling_rate),
    })
}

fn assess_confidence(
    bottleneck: Bottleneck,
    excavation_rate: f64,
    hauling_rate: f64,
    fleet: Option<FleetCounts>,
) -> ConfidenceLevel {
    match (bottleneck, fleet) {
        (Bottleneck::Balanced, None) => ConfidenceLevel::High,
        (Bottleneck::Balanced, Some(counts)) => {
            if counts.excavators >= 2 && counts.trucks >= 2 {
                ConfidenceLevel::High
            } else {
                ConfidenceLevel::Medium
            }
        }
        _ => {
            if (excavation_rate - hauling_rate).abs() > LOW_CONFIDENCE_THRESHOLD_YD3_HR {
                ConfidenceLevel::Low
            } else {
                ConfidenceLevel::Medium
            }
        }
    }
}

fn assumptions(fleet: Option<FleetCounts>) -> Vec<String> {
    let mut notes = vec![
        format!(
            "Excavator efficiency: {:.0}% of theoretical output (positioning, breaks, operator variability)",
            EXCAVATOR_EFFICIENCY * 100.0
        ),
        format!(
            "Truck efficiency: {:.0}% of theoretical output (loading, queuing, coordination delays)",
            TRUCK_EFFICIENCY * 100.0
        ),
        "No weather delays".to_string(),
        "Continuous operation during work hours".to_string(),
    ];
    if let Some(counts) = fleet {
        notes.push(format!("Active excavators: {}", counts.excavators));
        notes.push(format!("Active trucks: {}", counts.trucks));
    }
    notes
}

fn warnings(bottleneck: Bottleneck, excavation_rate: f64, hauling_rate: f64) -> Vec<String> {
    match bottleneck {
        Bottleneck::Balanced => Vec::new(),
        Bottleneck::HaulingLimited => vec![format!(
            "Hauling is the bottleneck: trucks move {:.1} yd³/hr while excavation could supply {:.1} yd³/hr. \
             Add trucks or shorten round trips to finish sooner.",
            hauling_rate, excavation_rate
        )],
        Bottleneck::ExcavationLimited => vec![format!(
            "Excavation is the bottleneck: excavators dig {:.1} yd³/hr while trucks could haul {:.1} yd³/hr. \
             Add excavators or use a larger bucket to finish sooner.",
            excavation_rate, hauling_rate
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet_of(excavators: usize, trucks: usize) -> (Vec<Excavator>, Vec<Truck>) {
        (
            (0..excavators)
                .map(|i| Excavator::new(format!("E{}", i + 1), 2.5, 2.0))
                .collect(),
            (0..trucks)
                .map(|i| Truck::new(format!("T{}", i + 1), 12.0, 15.0))
                .collect(),
        )
    }

    #[test]
    fn test_single_equipment_scenario() {
        let result = calculate_timeline(2.5, 2.0, 12.0, 15.0, 333.33, 8.0).unwrap();

        assert!((result.excavation_rate - 63.75).abs() < 1e-9);
        assert!((result.hauling_rate - 38.4).abs() < 1e-9);
        assert!((result.effective_rate - 38.4).abs() < 1e-9);
        assert!((result.total_hours - 8.68).abs() < 0.01);
        assert_eq!(result.timeline_in_days, 2);
        assert_eq!(result.bottleneck, Bottleneck::HaulingLimited);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Hauling is the bottleneck"));
    }

    #[test]
    fn test_tiny_project_is_one_day() {
        let (excavators, trucks) = fleet_of(1, 1);
        let result = perform_calculation(&excavators, &trucks, 10.0, 8.0).unwrap();
        assert_eq!(result.timeline_in_days, 1);
    }

    #[test]
    fn test_no_active_excavators() {
        let (mut excavators, trucks) = fleet_of(1, 1);
        excavators[0].is_active = false;
        let err = perform_calculation(&excavators, &trucks, 185.0, 8.0).unwrap_err();
        assert_eq!(
            err,
            CalculationError::InsufficientEquipment {
                active_excavators: 0,
                active_trucks: 1
            }
        );
    }

    #[test]
    fn test_empty_truck_list() {
        let (excavators, _) = fleet_of(1, 0);
        let err = perform_calculation(&excavators, &[], 185.0, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_EQUIPMENT");
    }

    #[test]
    fn test_invalid_configuration() {
        let (excavators, trucks) = fleet_of(1, 1);
        for (volume, hours) in [(0.0, 8.0), (-5.0, 8.0), (185.0, 0.0), (185.0, -1.0), (f64::NAN, 8.0)] {
            let err = perform_calculation(&excavators, &trucks, volume, hours).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

            let err = calculate_timeline(2.5, 2.0, 12.0, 15.0, volume, hours).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        }
    }

    #[test]
    fn test_insufficient_equipment_checked_before_configuration() {
        let (excavators, _) = fleet_of(1, 0);
        let err = perform_calculation(&excavators, &[], 0.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_EQUIPMENT");
    }

    #[test]
    fn test_degenerate_equipment_specs() {
        // Zero cycle time would mean infinite production
        let err = calculate_timeline(2.5, 0.0, 12.0, 15.0, 185.0, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        // Zero capacity means nothing ever moves
        let err = calculate_timeline(2.5, 2.0, 0.0, 15.0, 185.0, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_unrepresentable_duration() {
        // Rate is tiny but positive, so total hours overflow to infinity
        let err = calculate_timeline(1e-300, 1.0, 12.0, 15.0, 1e300, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        // Finite hours, but more days than fit in the result
        let err = calculate_timeline(2.5, 2.0, 12.0, 15.0, 2e12, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let excavators = vec![Excavator::new("E1", 1e-300, 1.0)];
        let (_, trucks) = fleet_of(0, 1);
        let err = perform_calculation(&excavators, &trucks, 1e300, 8.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let (excavators, trucks) = fleet_of(2, 3);
        let first = perform_calculation(&excavators, &trucks, 740.74, 8.0).unwrap();
        let second = perform_calculation(&excavators, &trucks, 740.74, 8.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_hours.to_bits(), second.total_hours.to_bits());
    }

    #[test]
    fn test_volume_monotonicity() {
        let (excavators, trucks) = fleet_of(1, 2);
        let mut previous = 0;
        for volume in [1.0, 50.0, 185.19, 400.0, 1000.0, 25_000.0] {
            let days = perform_calculation(&excavators, &trucks, volume, 8.0)
                .unwrap()
                .timeline_in_days;
            assert!(days >= previous);
            assert!(days >= 1);
            previous = days;
        }
    }

    #[test]
    fn test_adding_trucks_shortens_hauling_limited_job() {
        // One excavator digs 63.75 yd³/hr; each truck hauls 38.4 yd³/hr
        let (excavators, one_truck) = fleet_of(1, 1);
        let (_, two_trucks) = fleet_of(1, 2);
        let (_, three_trucks) = fleet_of(1, 3);

        let slow = perform_calculation(&excavators, &one_truck, 5000.0, 8.0).unwrap();
        let faster = perform_calculation(&excavators, &two_trucks, 5000.0, 8.0).unwrap();
        let shifted = perform_calculation(&excavators, &three_trucks, 5000.0, 8.0).unwrap();

        assert_eq!(slow.bottleneck, Bottleneck::HaulingLimited);
        assert!(faster.timeline_in_days < slow.timeline_in_days);
        assert_eq!(faster.bottleneck, Bottleneck::ExcavationLimited);
        // Excavation now limits, so a third truck changes nothing
        assert_eq!(shifted.timeline_in_days, faster.timeline_in_days);
    }

    #[test]
    fn test_adding_excavators_shortens_excavation_limited_job() {
        // Each excavator digs 12.75 yd³/hr; the truck hauls 144 yd³/hr
        let trucks = vec![Truck::new("T1", 30.0, 10.0)];
        let one = vec![Excavator::new("E1", 1.0, 4.0)];
        let two = vec![Excavator::new("E1", 1.0, 4.0), Excavator::new("E2", 1.0, 4.0)];

        let slow = perform_calculation(&one, &trucks, 1275.0, 8.0).unwrap();
        let faster = perform_calculation(&two, &trucks, 1275.0, 8.0).unwrap();

        assert_eq!(slow.bottleneck, Bottleneck::ExcavationLimited);
        assert_eq!(faster.bottleneck, Bottleneck::ExcavationLimited);
        assert_eq!(slow.timeline_in_days, 13);
        assert_eq!(faster.timeline_in_days, 7);
        assert!(faster.timeline_in_days < slow.timeline_in_days);
    }

    #[test]
    fn test_inactive_units_do_not_count() {
        let (excavators, mut trucks) = fleet_of(1, 2);
        trucks[1].is_active = false;
        let result = perform_calculation(&excavators, &trucks, 185.0, 8.0).unwrap();
        assert!((result.hauling_rate - 38.4).abs() < 1e-9);
        assert!(result.assumptions.contains(&"Active trucks: 1".to_string()));
    }

    #[test]
    fn test_balanced_confidence_depends_on_fleet_size() {
        // 2.5 yd³ / 2 min at 85% = 63.75; 13.28 yd³ / 10 min at 80% = 63.744
        let ex = Excavator::new("E", 2.5, 2.0);
        let truck = Truck::new("T", 13.28, 10.0);

        let single = calculate_timeline(2.5, 2.0, 13.28, 10.0, 185.0, 8.0).unwrap();
        assert_eq!(single.bottleneck, Bottleneck::Balanced);
        assert_eq!(single.confidence, ConfidenceLevel::High);
        assert!(single.warnings.is_empty());

        let small = perform_calculation(&[ex.clone()], &[truck.clone()], 185.0, 8.0).unwrap();
        assert_eq!(small.bottleneck, Bottleneck::Balanced);
        assert_eq!(small.confidence, ConfidenceLevel::Medium);

        let ex2 = Excavator::new("E2", 2.5, 2.0);
        let truck2 = Truck::new("T2", 13.28, 10.0);
        let large = perform_calculation(&[ex, ex2], &[truck, truck2], 185.0, 8.0).unwrap();
        assert_eq!(large.bottleneck, Bottleneck::Balanced);
        assert_eq!(large.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_medium_confidence_for_moderate_gap() {
        // 63.75 vs 12 yd³ / 12 min at 80% = 48.0 -> gap 15.75
        let result = calculate_timeline(2.5, 2.0, 12.0, 12.0, 185.0, 8.0).unwrap();
        assert_eq!(result.bottleneck, Bottleneck::HaulingLimited);
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_excavation_limited_warning() {
        let result = calculate_timeline(1.0, 4.0, 30.0, 10.0, 185.0, 8.0).unwrap();
        assert_eq!(result.bottleneck, Bottleneck::ExcavationLimited);
        assert!(result.warnings[0].starts_with("Excavation is the bottleneck"));
    }

    #[test]
    fn test_assumptions() {
        let single = calculate_timeline(2.5, 2.0, 12.0, 15.0, 185.0, 8.0).unwrap();
        assert_eq!(single.assumptions.len(), 4);
        assert!(single.assumptions[0].contains("85%"));
        assert!(single.assumptions[1].contains("80%"));
        assert!(single.assumptions.iter().any(|a| a == "No weather delays"));

        let (excavators, trucks) = fleet_of(2, 3);
        let fleet = perform_calculation(&excavators, &trucks, 185.0, 8.0).unwrap();
        assert_eq!(fleet.assumptions.len(), 6);
        assert_eq!(fleet.assumptions[4], "Active excavators: 2");
        assert_eq!(fleet.assumptions[5], "Active trucks: 3");
    }

    #[test]
    fn test_estimate_pipeline() {
        let rules = ValidationRules::default();
        let result = estimate(&rules, &ProjectInputs::default()).unwrap();
        // 185.19 yd³ at 38.4 yd³/hr = 4.82 hours -> 1 day
        assert_eq!(result.timeline_in_days, 1);

        let bad = ProjectInputs::default().with_value(crate::validation::InputField::CycleTime, 0.0);
        let err = estimate(&rules, &bad).unwrap_err();
        assert!(matches!(err, EstimateError::Validation(_)));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate_timeline(2.5, 2.0, 12.0, 15.0, 333.33, 8.0).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"bottleneck\": \"HaulingLimited\""));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.timeline_in_days, 2);
        assert_eq!(roundtrip.confidence, ConfidenceLevel::Low);
    }
}
