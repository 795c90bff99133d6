//! Caller-side state: the last good estimate survives failed recalculations.

use pond_core::calculations::estimate;
use pond_core::{CalculationResult, EstimateError, ProjectInputs, ValidationRules};
use serde::Serialize;

/// What the display should show after a recalculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Newest successful result, if any calculation has ever succeeded
    pub result: Option<CalculationResult>,

    /// `result` is from an earlier calculation than `error`
    pub stale: bool,

    /// Why the latest recalculation failed
    pub error: Option<EstimateError>,
}

#[derive(Debug, Default)]
pub struct Session {
    last_good: Option<CalculationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run validation and calculation, keeping the previous result on failure.
    pub fn recalculate(&mut self, rules: &ValidationRules, inputs: &ProjectInputs) -> DisplayState {
        match estimate(rules, inputs) {
            Ok(result) => {
                self.last_good = Some(result.clone());
                DisplayState {
                    result: Some(result),
                    stale: false,
                    error: None,
                }
            }
            Err(error) => {
                tracing::debug!(code = error.error_code(), "Recalculation failed, keeping last result");
                DisplayState {
                    stale: self.last_good.is_some(),
                    result: self.last_good.clone(),
                    error: Some(error),
                }
            }
        }
    }
}
