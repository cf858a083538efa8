//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised by the input layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A measurement was zero, negative, or not a number.
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Notes exceeded the input cap.
    #[error("notes must be at most {max} characters, got {len}")]
    NotesTooLong { len: usize, max: usize },

    /// A tag value outside the offered option set.
    #[error("unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },

    /// Invalid fluid unit string.
    #[error("invalid fluid unit: {value} (expected oz or mL)")]
    InvalidUnit { value: String },
}

/// Unit a fluid intake amount was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FluidUnit {
    #[serde(rename = "oz")]
    Oz,
    #[default]
    #[serde(rename = "mL")]
    Ml,
}

impl FluidUnit {
    /// String representation used in CSV and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oz => "oz",
            Self::Ml => "mL",
        }
    }
}

impl fmt::Display for FluidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FluidUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oz" => Ok(Self::Oz),
            "ml" => Ok(Self::Ml),
            _ => Err(ValidationError::InvalidUnit {
                value: s.to_string(),
            }),
        }
    }
}

/// Qualitative direction of fluid intake over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Colors offered by the entry form.
pub const COLOR_OPTIONS: &[&str] = &[
    "Light Yellow",
    "Clear",
    "Dark Yellow",
    "Amber or Honey",
    "Orange",
    "Pink or Red",
    "Blue or Green",
    "Brown or Cola-colored",
    "Cloudy or Murky",
    "Foamy or Bubbly",
];

/// Urgency ratings offered by the entry form.
pub const URGENCY_OPTIONS: &[&str] = &[
    "Normal",
    "Hour < 60 min",
    "Hold < 15 min",
    "Hold < 5 minutes",
    "Had drips",
    "Couldn't hold it",
];

/// Concerns offered by the entry form.
pub const CONCERN_OPTIONS: &[&str] = &[
    "Straining",
    "Dribbling",
    "Frequent urges",
    "Incomplete emptying",
    "Waking just to pee",
    "Pain",
    "Burning",
    "Blood",
];

/// Fluid types offered by the entry form.
pub const FLUID_TYPE_OPTIONS: &[&str] = &[
    "Water", "Juice", "Tea", "Soda", "Coffee", "Alcohol", "Other",
];

/// Fluid type whose label is replaced by the custom type in statistics.
pub const OTHER_FLUID_TYPE: &str = "Other";

/// A preset drink size selectable instead of a custom amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonSize {
    pub label: &'static str,
    pub oz: f64,
    pub ml: f64,
}

impl CommonSize {
    /// Amount of this size expressed in `unit`.
    #[must_use]
    pub const fn amount(&self, unit: FluidUnit) -> f64 {
        match unit {
            FluidUnit::Oz => self.oz,
            FluidUnit::Ml => self.ml,
        }
    }
}

pub const COMMON_SIZES: &[CommonSize] = &[
    CommonSize {
        label: "Small (8 oz / 240 mL)",
        oz: 8.0,
        ml: 240.0,
    },
    CommonSize {
        label: "Medium (12 oz / 355 mL)",
        oz: 12.0,
        ml: 355.0,
    },
    CommonSize {
        label: "Large (16 oz / 475 mL)",
        oz: 16.0,
        ml: 475.0,
    },
    CommonSize {
        label: "Extra Large (20 oz / 590 mL)",
        oz: 20.0,
        ml: 590.0,
    },
    CommonSize {
        label: "750 mL (25.4 oz)",
        oz: 25.4,
        ml: 750.0,
    },
    CommonSize {
        label: "1000 mL (33.8 oz)",
        oz: 33.8,
        ml: 1000.0,
    },
];

/// Checks that `value` is one of `options`.
///
/// Stored and imported tags are open strings; only the input layer calls this.
pub fn validate_option(
    field: &'static str,
    value: &str,
    options: &[&str],
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if options.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::UnknownOption {
            field,
            value: value.to_string(),
        })
    }
}

/// Checks that a measurement is a finite, strictly positive number.
pub fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}
