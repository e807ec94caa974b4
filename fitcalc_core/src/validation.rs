//! # Input Validation
//!
//! Range checks for raw form input. The presentation layer hands the core a
//! [`RawInput`] (field name → raw string); every numeric field is parsed and
//! bounds-checked against the static [`FIELDS`] table before a value can reach
//! the formula engine.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::validation::{validate, ValidationError};
//!
//! assert_eq!(validate("42", 15.0, 100.0), Ok(42.0));
//! assert_eq!(
//!     validate("5", 15.0, 100.0),
//!     Err(ValidationError::BelowMinimum { value: 5.0, min: 15.0 })
//! );
//! assert!(matches!(validate("abc", 50.0, 272.0), Err(ValidationError::NotANumber { .. })));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Single-value validation
// ============================================================================

/// Why a single raw value failed validation.
///
/// Carries no field name; attach one with [`ValidationError::for_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotANumber { value: String },
    BelowMinimum { value: f64, min: f64 },
    AboveMaximum { value: f64, max: f64 },
}

impl ValidationError {
    /// Attach the failing field's name, producing the boundary error type
    pub fn for_field(self, field: impl Into<String>) -> CalcError {
        let field = field.into();
        match self {
            ValidationError::NotANumber { value } => CalcError::NotANumber { field, value },
            ValidationError::BelowMinimum { value, min } => {
                CalcError::BelowMinimum { field, value, min }
            }
            ValidationError::AboveMaximum { value, max } => {
                CalcError::AboveMaximum { field, value, max }
            }
        }
    }
}

/// Parse `raw` as a decimal number and check it lies in `[min, max]` inclusive.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected as
/// `NotANumber` even though Rust's float parser accepts their spellings.
pub fn validate(raw: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(ValidationError::NotANumber {
                value: raw.to_string(),
            })
        }
    };

    if value < min {
        return Err(ValidationError::BelowMinimum { value, min });
    }
    if value > max {
        return Err(ValidationError::AboveMaximum { value, max });
    }
    Ok(value)
}

// ============================================================================
// Field table
// ============================================================================

/// Bounds and display metadata for one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Form field name (key in [`RawInput`])
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Unit symbol shown next to the control
    pub unit: &'static str,
    /// Inclusive minimum
    pub min: f64,
    /// Inclusive maximum
    pub max: f64,
    /// Whether fractional values are rejected
    pub integer: bool,
}

impl FieldSpec {
    const fn real(name: &'static str, label: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self { name, label, unit, min, max, integer: false }
    }

    const fn whole(name: &'static str, label: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self { name, label, unit, min, max, integer: true }
    }

    /// Validate a raw value against this field's bounds
    pub fn parse(&self, raw: &str) -> CalcResult<f64> {
        let value = validate(raw, self.min, self.max).map_err(|e| e.for_field(self.name))?;
        if self.integer && value.fract() != 0.0 {
            return Err(CalcError::not_a_number(self.name, raw));
        }
        Ok(value)
    }
}

pub const AGE: &str = "age";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";
pub const WAIST: &str = "waist";
pub const HIP: &str = "hip";
pub const NECK: &str = "neck";
pub const BODY_FAT: &str = "body_fat";
pub const LIFTED: &str = "lifted";
pub const REPS: &str = "reps";
pub const CREATININE: &str = "creatinine";
pub const SYSTOLIC: &str = "systolic";
pub const DIASTOLIC: &str = "diastolic";
pub const RESTING_HR: &str = "resting_hr";
pub const MAX_HR: &str = "max_hr";
pub const DISTANCE: &str = "distance";
pub const WALK_TIME: &str = "walk_time";
pub const WALK_HR: &str = "walk_hr";
pub const SEX: &str = "sex";
pub const ACTIVITY: &str = "activity";
pub const FORMULA: &str = "formula";

/// Every numeric field the calculators accept.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec::whole(AGE, "Age", "years", 15.0, 100.0),
    FieldSpec::real(HEIGHT, "Height", "cm", 50.0, 272.0),
    FieldSpec::real(WEIGHT, "Weight", "kg", 2.0, 635.0),
    FieldSpec::real(WAIST, "Waist circumference", "cm", 30.0, 250.0),
    FieldSpec::real(HIP, "Hip circumference", "cm", 30.0, 250.0),
    FieldSpec::real(NECK, "Neck circumference", "cm", 15.0, 80.0),
    FieldSpec::real(BODY_FAT, "Body fat", "%", 2.0, 70.0),
    FieldSpec::real(LIFTED, "Weight lifted", "kg", 1.0, 1000.0),
    FieldSpec::whole(REPS, "Repetitions", "reps", 1.0, 30.0),
    FieldSpec::real(CREATININE, "Serum creatinine", "mg/dL", 0.1, 20.0),
    FieldSpec::whole(SYSTOLIC, "Systolic pressure", "mmHg", 50.0, 300.0),
    FieldSpec::whole(DIASTOLIC, "Diastolic pressure", "mmHg", 30.0, 200.0),
    FieldSpec::whole(RESTING_HR, "Resting heart rate", "bpm", 25.0, 150.0),
    FieldSpec::whole(MAX_HR, "Maximum heart rate", "bpm", 80.0, 230.0),
    FieldSpec::real(DISTANCE, "12-minute run distance", "m", 1000.0, 6000.0),
    FieldSpec::real(WALK_TIME, "1-mile walk time", "min", 5.0, 60.0),
    FieldSpec::whole(WALK_HR, "Heart rate after walk", "bpm", 40.0, 230.0),
];

/// Look up the spec for a numeric field
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

// ============================================================================
// Enumerated fields
// ============================================================================

/// An enumerated form field (select box) with a fixed set of spellings.
pub trait Choice: Sized + Copy + 'static {
    /// Form field name
    const FIELD: &'static str;
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Stable key used in forms and JSON
    fn key(&self) -> &'static str;

    /// Parse a raw form value (case-insensitive)
    fn parse_choice(raw: &str) -> CalcResult<Self> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
                CalcError::invalid_choice(Self::FIELD, raw, &expected)
            })
    }
}

// ============================================================================
// Raw form input
// ============================================================================

/// Raw form submission: field name → unparsed string.
///
/// Blank values are treated as absent, matching how an untouched form
/// control submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: BTreeMap<String, String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (builder pattern)
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Raw value of a field, `None` when absent or blank
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Names of all non-blank fields
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, _)| k.as_str())
    }

    /// Parse and bounds-check a numeric field if present.
    ///
    /// A name missing from [`FIELDS`] is reported as `MissingField`, since
    /// no form control can supply it.
    pub fn number(&self, field: &str) -> CalcResult<Option<f64>> {
        let spec = field_spec(field).ok_or_else(|| CalcError::missing_field(field))?;
        self.get(field).map(|raw| spec.parse(raw)).transpose()
    }

    /// Parse an enumerated field if present
    pub fn choice<C: Choice>(&self) -> CalcResult<Option<C>> {
        self.get(C::FIELD).map(C::parse_choice).transpose()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawInput::new();
        for (k, v) in iter {
            raw.insert(k, v);
        }
        raw
    }
}
