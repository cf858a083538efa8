//! Flow entries - one recorded measurement each.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    COLOR_OPTIONS, CONCERN_OPTIONS, FLUID_TYPE_OPTIONS, FluidUnit, OTHER_FLUID_TYPE,
    URGENCY_OPTIONS, ValidationError, validate_option, validate_positive,
};

/// Milliliters per US fluid ounce.
pub const ML_PER_OZ: f64 = 29.5735;

/// Input-layer cap on note length, in characters.
pub const NOTES_MAX_CHARS: usize = 256;

/// A single logged flow measurement.
///
/// `flow_rate` is computed once from `volume / duration` when the entry is
/// created and is never re-derived, so imported entries keep whatever rate the
/// source file carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEntry {
    /// When the measurement was taken. Doubles as the deletion key.
    pub timestamp: DateTime<Utc>,
    /// Voided volume in mL.
    #[serde(with = "nan_as_null")]
    pub volume: f64,
    /// Duration in seconds.
    #[serde(with = "nan_as_null")]
    pub duration: f64,
    /// Flow rate in mL/s.
    #[serde(with = "nan_as_null")]
    pub flow_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_intake: Option<FluidIntake>,
}

impl FlowEntry {
    /// Creates an entry with only the base measurements populated.
    pub fn new(timestamp: DateTime<Utc>, volume: f64, duration: f64) -> Self {
        Self::with_rate(timestamp, volume, duration, volume / duration)
    }

    /// Creates an entry carrying an explicit flow rate, as read from a file.
    pub const fn with_rate(
        timestamp: DateTime<Utc>,
        volume: f64,
        duration: f64,
        flow_rate: f64,
    ) -> Self {
        Self {
            timestamp,
            volume,
            duration,
            flow_rate,
            color: None,
            urgency: None,
            concerns: None,
            notes: None,
            fluid_intake: None,
        }
    }

    /// Fluid intake normalized to mL, if present.
    pub fn fluid_intake_ml(&self) -> Option<f64> {
        self.fluid_intake.as_ref().map(FluidIntake::amount_ml)
    }
}

/// A beverage note attached to an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidIntake {
    #[serde(rename = "type")]
    pub fluid_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(with = "nan_as_null")]
    pub amount: f64,
    #[serde(default)]
    pub unit: FluidUnit,
}

impl FluidIntake {
    /// Amount converted to mL.
    pub fn amount_ml(&self) -> f64 {
        match self.unit {
            FluidUnit::Oz => self.amount * ML_PER_OZ,
            FluidUnit::Ml => self.amount,
        }
    }

    /// Label used when counting fluid types.
    ///
    /// `Other` is replaced by the custom type when one was given.
    pub fn label(&self) -> &str {
        match self.custom_type.as_deref() {
            Some(custom) if self.fluid_type == OTHER_FLUID_TYPE && !custom.is_empty() => custom,
            _ => &self.fluid_type,
        }
    }
}

/// Unvalidated entry as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub volume: f64,
    pub duration: f64,
    pub color: Option<String>,
    pub urgency: Option<String>,
    pub concerns: Vec<String>,
    pub notes: Option<String>,
    pub fluid_intake: Option<FluidIntake>,
}

impl EntryDraft {
    /// Validates the draft and stamps it with `timestamp`.
    ///
    /// Tags must come from the offered option sets and notes are capped at
    /// [`NOTES_MAX_CHARS`]. Empty strings count as absent.
    pub fn build(self, timestamp: DateTime<Utc>) -> Result<FlowEntry, ValidationError> {
        validate_positive("volume", self.volume)?;
        validate_positive("duration", self.duration)?;

        let color = non_empty(self.color);
        if let Some(color) = &color {
            validate_option("color", color, COLOR_OPTIONS)?;
        }
        let urgency = non_empty(self.urgency);
        if let Some(urgency) = &urgency {
            validate_option("urgency", urgency, URGENCY_OPTIONS)?;
        }
        for concern in &self.concerns {
            validate_option("concern", concern, CONCERN_OPTIONS)?;
        }
        let notes = non_empty(self.notes);
        if let Some(notes) = &notes {
            let len = notes.chars().count();
            if len > NOTES_MAX_CHARS {
                return Err(ValidationError::NotesTooLong {
                    len,
                    max: NOTES_MAX_CHARS,
                });
            }
        }
        let fluid_intake = match self.fluid_intake {
            Some(mut intake) => {
                validate_option("fluid type", &intake.fluid_type, FLUID_TYPE_OPTIONS)?;
                validate_positive("fluid amount", intake.amount)?;
                if intake.fluid_type != OTHER_FLUID_TYPE {
                    intake.custom_type = None;
                }
                Some(intake)
            }
            None => None,
        };

        let mut entry = FlowEntry::new(timestamp, self.volume, self.duration);
        entry.color = color;
        entry.urgency = urgency;
        entry.concerns = (!self.concerns.is_empty()).then_some(self.concerns);
        entry.notes = notes;
        entry.fluid_intake = fluid_intake;
        Ok(entry)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads `null` back as NaN so unparseable numbers survive a save/load cycle.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
