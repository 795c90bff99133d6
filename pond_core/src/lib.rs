//! # pond_core - Pond Excavation Timeline Engine
//!
//! `pond_core` turns equipment specs (excavator buckets and cycle times,
//! truck capacities and round trips) and pond dimensions into an estimate of
//! how many working days an excavation will take.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Injected config**: Ranges and defaults are always passed in, never read from a global
//! - **Rich Errors**: Structured error types carrying field-specific guidance
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use pond_core::calculations::estimate;
//! use pond_core::config::Config;
//! use pond_core::project::ProjectInputs;
//!
//! let config = Config::default();
//! let inputs = ProjectInputs::from_defaults(&config.defaults);
//!
//! let result = estimate(&config.validation, &inputs).unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Range, format, precision, and edge-case checks
//! - [`calculations`] - Production rates, bottleneck, timeline, confidence
//! - [`equipment`] - Excavators, trucks, and immutable fleet operations
//! - [`project`] - Single-equipment project inputs
//! - [`config`] - Injected ranges, defaults, and fleet limits
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equipment;
pub mod errors;
pub mod project;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Bottleneck, CalculationResult, ConfidenceLevel};
pub use config::{Config, Defaults, FleetLimits};
pub use equipment::{Excavator, Fleet, Truck};
pub use errors::{CalcResult, CalculationError, EstimateError, UnknownField, ValidationError, ValidationResult};
pub use project::ProjectInputs;
pub use validation::{InputField, ValidationRange, ValidationRules};
