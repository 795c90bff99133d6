//! Input fields and the canned guidance attached to their errors.
//!
//! Eight input fields map onto six range categories: the three pond
//! dimensions share one range and one set of guidance text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownField;

/// A numeric input the estimator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    ExcavatorCapacity,
    CycleTime,
    TruckCapacity,
    RoundTripTime,
    WorkHours,
    PondLength,
    PondWidth,
    PondDepth,
}

impl InputField {
    /// All fields, in the order single-equipment validation checks them
    pub const ALL: [InputField; 8] = [
        InputField::ExcavatorCapacity,
        InputField::CycleTime,
        InputField::TruckCapacity,
        InputField::RoundTripTime,
        InputField::WorkHours,
        InputField::PondLength,
        InputField::PondWidth,
        InputField::PondDepth,
    ];

    /// Human-readable name, used as the `field` of validation errors
    pub fn display_name(&self) -> &'static str {
        match self {
            InputField::ExcavatorCapacity => "Excavator Capacity",
            InputField::CycleTime => "Cycle Time",
            InputField::TruckCapacity => "Truck Capacity",
            InputField::RoundTripTime => "Round Trip Time",
            InputField::WorkHours => "Work Hours",
            InputField::PondLength => "Pond Length",
            InputField::PondWidth => "Pond Width",
            InputField::PondDepth => "Pond Depth",
        }
    }

    /// Range category this field is checked against
    pub fn category(&self) -> FieldCategory {
        match self {
            InputField::ExcavatorCapacity => FieldCategory::ExcavatorCapacity,
            InputField::CycleTime => FieldCategory::CycleTime,
            InputField::TruckCapacity => FieldCategory::TruckCapacity,
            InputField::RoundTripTime => FieldCategory::RoundTripTime,
            InputField::WorkHours => FieldCategory::WorkHours,
            InputField::PondLength | InputField::PondWidth | InputField::PondDepth => {
                FieldCategory::PondDimension
            }
        }
    }

    pub(crate) fn invalid_format_guidance(&self) -> String {
        format!(
            "Enter a numeric value for {}, for example {}.",
            self.display_name(),
            self.category().example()
        )
    }

    pub(crate) fn precision_guidance(&self, max_decimals: u32) -> String {
        format!(
            "Round {} to at most {} decimal places, for example {}.",
            self.display_name(),
            max_decimals,
            self.category().example()
        )
    }

    pub(crate) fn negative_guidance(&self) -> String {
        format!("{} must be a positive number.", self.display_name())
    }

    pub(crate) fn zero_guidance(&self) -> String {
        format!(
            "Enter a value greater than zero for {}.",
            self.display_name()
        )
    }

    pub(crate) fn non_finite_guidance(&self) -> String {
        format!(
            "Enter a regular number for {}, such as {}.",
            self.display_name(),
            self.category().example()
        )
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for InputField {
    type Err = UnknownField;

    /// Parse a display name ("Excavator Capacity") or a camelCase key
    /// ("excavatorCapacity"), ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        InputField::ALL
            .into_iter()
            .find(|field| {
                let name: String = field
                    .display_name()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                name == key
            })
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A group of fields sharing one validation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldCategory {
    ExcavatorCapacity,
    CycleTime,
    TruckCapacity,
    RoundTripTime,
    WorkHours,
    PondDimension,
}

impl FieldCategory {
    /// Guidance shown when the field is empty or not positive
    pub fn required_guidance(&self) -> &'static str {
        match self {
            FieldCategory::ExcavatorCapacity => {
                "Enter the excavator bucket capacity in cubic yards. Mini excavators carry \
                 0.5-1 yd³, standard excavators 1-3 yd³, and large excavators 3-8 yd³."
            }
            FieldCategory::CycleTime => {
                "Enter the excavator cycle time in minutes (dig, swing, dump, return). \
                 Typical cycles take 0.5-3 minutes depending on soil and operator."
            }
            FieldCategory::TruckCapacity => {
                "Enter the truck capacity in cubic yards. Standard dump trucks haul \
                 10-14 yd³; articulated haulers carry 20-30 yd³."
            }
            FieldCategory::RoundTripTime => {
                "Enter the truck round-trip time in minutes (load, haul, dump, return). \
                 On-site hauls take 5-20 minutes; off-site disposal 20-60 minutes."
            }
            FieldCategory::WorkHours => {
                "Enter the productive work hours per day. Most crews run equipment \
                 8-10 hours a day."
            }
            FieldCategory::PondDimension => {
                "Enter the pond dimension in feet. Farm ponds are commonly 50-200 feet \
                 across and 6-15 feet deep."
            }
        }
    }

    /// Guidance shown when the value falls outside the configured range
    pub fn range_guidance(&self) -> &'static str {
        match self {
            FieldCategory::ExcavatorCapacity => {
                "Bucket capacities run from about 0.5 yd³ (mini excavator) to 15 yd³ \
                 (mass excavation). Check the bucket rating plate or spec sheet."
            }
            FieldCategory::CycleTime => {
                "Cycle times run from about 0.5 minutes in loose soil to 10 minutes in \
                 hard digging. Time several full cycles on site for an average."
            }
            FieldCategory::TruckCapacity => {
                "Truck capacities run from about 5 yd³ (small dump truck) to 30 yd³ \
                 (articulated hauler). Use the heaped capacity from the spec sheet."
            }
            FieldCategory::RoundTripTime => {
                "Round trips take 5-60 minutes depending on haul distance and traffic. \
                 Time a few loaded trips for an average."
            }
            FieldCategory::WorkHours => {
                "Enter hours of actual equipment operation per day. Standard shifts are \
                 8-10 hours; extended shifts rarely exceed 12."
            }
            FieldCategory::PondDimension => {
                "Residential ponds are often 20-100 feet across; large farm ponds can \
                 reach several hundred feet. Measure in feet, not yards or meters."
            }
        }
    }

    /// Sample value used inside guidance text
    pub fn example(&self) -> &'static str {
        match self {
            FieldCategory::ExcavatorCapacity => "2.5",
            FieldCategory::CycleTime => "2.0",
            FieldCategory::TruckCapacity => "12",
            FieldCategory::RoundTripTime => "15",
            FieldCategory::WorkHours => "8",
            FieldCategory::PondDimension => "40",
        }
    }
}
