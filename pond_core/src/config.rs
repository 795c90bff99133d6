//! # Estimator Configuration
//!
//! The configuration object injected into every validation and fleet call:
//! validation ranges, equipment and project defaults, and fleet size limits.
//! Nothing in the core reads configuration from a global; callers build a
//! [`Config`] (usually via [`Config::default`] or [`Config::load_from_file`])
//! and pass the pieces they need.
//!
//! ## File Format
//!
//! JSON with camelCase keys. Every section is optional; missing sections
//! fall back to the built-in reference values.
//!
//! ```json
//! {
//!   "validation": {
//!     "truckCapacity": { "min": 5.0, "max": 30.0 },
//!     ...
//!   },
//!   "defaults": {
//!     "excavators": [{ "bucketCapacity": 2.5, "cycleTime": 2.0, "name": "Excavator 1" }],
//!     "trucks": [{ "capacity": 12.0, "roundTripTime": 15.0, "name": "Truck 1" }],
//!     "project": { "workHoursPerDay": 8.0, "pondLength": 40.0, "pondWidth": 25.0, "pondDepth": 5.0 }
//!   },
//!   "fleetLimits": { "maxExcavators": 10, "maxTrucks": 20 }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pond_core::config::Config;
//!
//! let config = Config::from_json_str(r#"{ "fleetLimits": { "maxExcavators": 4, "maxTrucks": 8 } }"#)?;
//! assert_eq!(config.fleet_limits.max_excavators, 4);
//! assert_eq!(config.validation.cycle_time.max, 10.0);
//! # Ok::<(), pond_core::errors::ValidationError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{ValidationError, ValidationResult};
use crate::validation::ValidationRules;

/// Root configuration object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Accepted range per field category
    pub validation: ValidationRules,

    /// Initial fleet and project values
    pub defaults: Defaults,

    /// Maximum fleet sizes
    pub fleet_limits: FleetLimits,
}

impl Config {
    /// Parse and check a JSON configuration document.
    pub fn from_json_str(json: &str) -> ValidationResult<Self> {
        let config: Config = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Rejected estimator configuration");
            ValidationError::configuration(format!("Invalid configuration JSON: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and check a JSON configuration file.
    pub fn load_from_file(path: &Path) -> ValidationResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::configuration(format!(
                "Cannot read configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), "Loaded estimator configuration");
        Ok(config)
    }

    /// Check internal consistency.
    ///
    /// Every range must satisfy `0 < min <= max`, there must be at least one
    /// default excavator and truck, and both fleet limits must be at least 1.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut problems = Vec::new();

        for (category, range) in self.validation.ranges() {
            if !(range.min > 0.0 && range.min <= range.max) {
                problems.push(format!(
                    "{:?} range [{}, {}] must satisfy 0 < min <= max",
                    category, range.min, range.max
                ));
            }
        }
        if self.defaults.excavators.is_empty() {
            problems.push("at least one default excavator is required".to_string());
        }
        if self.defaults.trucks.is_empty() {
            problems.push("at least one default truck is required".to_string());
        }
        if self.fleet_limits.max_excavators == 0 || self.fleet_limits.max_trucks == 0 {
            problems.push("fleet limits must allow at least one unit of each type".to_string());
        }
        if self.defaults.excavators.len() > self.fleet_limits.max_excavators
            || self.defaults.trucks.len() > self.fleet_limits.max_trucks
        {
            problems.push("default fleet exceeds fleet limits".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            warn!(problems = problems.len(), "Estimator configuration failed validation");
            Err(ValidationError::configuration(problems.join("; ")))
        }
    }
}

/// Initial values for new fleets and projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    pub excavators: Vec<ExcavatorDefaults>,
    pub trucks: Vec<TruckDefaults>,
    pub project: ProjectDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            excavators: vec![ExcavatorDefaults::default()],
            trucks: vec![TruckDefaults::default()],
            project: ProjectDefaults::default(),
        }
    }
}

/// Default excavator specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcavatorDefaults {
    /// Bucket capacity (yd³)
    pub bucket_capacity: f64,
    /// Dig-dump cycle (minutes)
    pub cycle_time: f64,
    pub name: String,
}

impl Default for ExcavatorDefaults {
    fn default() -> Self {
        ExcavatorDefaults {
            bucket_capacity: 2.5,
            cycle_time: 2.0,
            name: "Excavator 1".to_string(),
        }
    }
}

/// Default truck specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckDefaults {
    /// Load capacity (yd³)
    pub capacity: f64,
    /// Load-haul-dump-return trip (minutes)
    pub round_trip_time: f64,
    pub name: String,
}

impl Default for TruckDefaults {
    fn default() -> Self {
        TruckDefaults {
            capacity: 12.0,
            round_trip_time: 15.0,
            name: "Truck 1".to_string(),
        }
    }
}

/// Default project parameters (feet and hours)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefaults {
    pub work_hours_per_day: f64,
    pub pond_length: f64,
    pub pond_width: f64,
    pub pond_depth: f64,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        ProjectDefaults {
            work_hours_per_day: 8.0,
            pond_length: 40.0,
            pond_width: 25.0,
            pond_depth: 5.0,
        }
    }
}

/// Fleet size ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetLimits {
    pub max_excavators: usize,
    pub max_trucks: usize,
}

impl Default for FleetLimits {
    fn default() -> Self {
        FleetLimits {
            max_excavators: 10,
            max_trucks: 20,
        }
    }
}
