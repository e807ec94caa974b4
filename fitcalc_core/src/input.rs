//! # Biometric Input
//!
//! The single validated input type shared by every calculator. Each field is
//! optional at the type level because calculators need different subsets;
//! formulas pull what they need through the `require_*` accessors, which
//! fail with [`CalcError::MissingField`] instead of guessing a default.
//!
//! Values are bounds-checked against [`crate::validation::FIELDS`] when the
//! input is built, so an out-of-range number never reaches a formula.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::input::{BiometricInput, Sex};
//!
//! let input = BiometricInput::builder()
//!     .sex(Sex::Male)
//!     .age(30)
//!     .height_cm(180.0)
//!     .weight_kg(80.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(input.require_height_cm().unwrap(), 180.0);
//! assert!(input.require_waist_cm().is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{self as v, field_spec, Choice, RawInput};

// ============================================================================
// Enumerations
// ============================================================================

/// Biological sex, as used by sex-specific published formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Choice for Sex {
    const FIELD: &'static str = v::SEX;
    const ALL: &'static [Self] = &[Sex::Male, Sex::Female];

    fn key(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Physical activity level for TDEE
///
/// Multipliers are the conventional Mifflin-St Jeor / Harris-Benedict
/// activity factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::VeryActive => "Extra active",
        }
    }
}

impl Choice for ActivityLevel {
    const FIELD: &'static str = v::ACTIVITY;
    const ALL: &'static [Self] = &[
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

// ============================================================================
// BiometricInput
// ============================================================================

/// Validated, immutable calculator input.
///
/// Construct through [`BiometricInput::builder`] or
/// [`BiometricInput::from_raw`]; both reject out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BiometricInputBuilder")]
pub struct BiometricInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    waist_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hip_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    neck_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_fat_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lifted_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creatinine_mg_dl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    systolic_mmhg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diastolic_mmhg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resting_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_distance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    walk_time_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    walk_hr_bpm: Option<f64>,
}

fn require<T: Copy>(value: Option<T>, field: &str) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

impl BiometricInput {
    /// Start building an input
    pub fn builder() -> BiometricInputBuilder {
        BiometricInputBuilder::default()
    }

    /// Parse and validate every recognized field of a raw form submission.
    ///
    /// Unrecognized fields are ignored; the `formula` field is read by the
    /// calculator layer, not here.
    pub fn from_raw(raw: &RawInput) -> CalcResult<Self> {
        let whole = |field: &str| -> CalcResult<Option<u32>> {
            Ok(raw.number(field)?.map(|n| n as u32))
        };

        BiometricInputBuilder {
            sex: raw.choice::<Sex>()?,
            age: whole(v::AGE)?,
            height_cm: raw.number(v::HEIGHT)?,
            weight_kg: raw.number(v::WEIGHT)?,
            activity: raw.choice::<ActivityLevel>()?,
            waist_cm: raw.number(v::WAIST)?,
            hip_cm: raw.number(v::HIP)?,
            neck_cm: raw.number(v::NECK)?,
            body_fat_pct: raw.number(v::BODY_FAT)?,
            lifted_kg: raw.number(v::LIFTED)?,
            reps: whole(v::REPS)?,
            creatinine_mg_dl: raw.number(v::CREATININE)?,
            systolic_mmhg: raw.number(v::SYSTOLIC)?,
            diastolic_mmhg: raw.number(v::DIASTOLIC)?,
            resting_hr_bpm: raw.number(v::RESTING_HR)?,
            max_hr_bpm: raw.number(v::MAX_HR)?,
            run_distance_m: raw.number(v::DISTANCE)?,
            walk_time_min: raw.number(v::WALK_TIME)?,
            walk_hr_bpm: raw.number(v::WALK_HR)?,
        }
        .build()
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn activity(&self) -> Option<ActivityLevel> {
        self.activity
    }

    pub fn resting_hr_bpm(&self) -> Option<f64> {
        self.resting_hr_bpm
    }

    pub fn require_sex(&self) -> CalcResult<Sex> {
        require(self.sex, v::SEX)
    }

    pub fn require_age(&self) -> CalcResult<u32> {
        require(self.age, v::AGE)
    }

    pub fn require_height_cm(&self) -> CalcResult<f64> {
        require(self.height_cm, v::HEIGHT)
    }

    pub fn require_weight_kg(&self) -> CalcResult<f64> {
        require(self.weight_kg, v::WEIGHT)
    }

    pub fn require_activity(&self) -> CalcResult<ActivityLevel> {
        require(self.activity, v::ACTIVITY)
    }

    pub fn require_waist_cm(&self) -> CalcResult<f64> {
        require(self.waist_cm, v::WAIST)
    }

    pub fn require_hip_cm(&self) -> CalcResult<f64> {
        require(self.hip_cm, v::HIP)
    }

    pub fn require_neck_cm(&self) -> CalcResult<f64> {
        require(self.neck_cm, v::NECK)
    }

    pub fn require_body_fat_pct(&self) -> CalcResult<f64> {
        require(self.body_fat_pct, v::BODY_FAT)
    }

    pub fn require_lifted_kg(&self) -> CalcResult<f64> {
        require(self.lifted_kg, v::LIFTED)
    }

    pub fn require_reps(&self) -> CalcResult<u32> {
        require(self.reps, v::REPS)
    }

    pub fn require_creatinine_mg_dl(&self) -> CalcResult<f64> {
        require(self.creatinine_mg_dl, v::CREATININE)
    }

    pub fn require_systolic_mmhg(&self) -> CalcResult<f64> {
        require(self.systolic_mmhg, v::SYSTOLIC)
    }

    pub fn require_diastolic_mmhg(&self) -> CalcResult<f64> {
        require(self.diastolic_mmhg, v::DIASTOLIC)
    }

    pub fn require_resting_hr_bpm(&self) -> CalcResult<f64> {
        require(self.resting_hr_bpm, v::RESTING_HR)
    }

    pub fn require_max_hr_bpm(&self) -> CalcResult<f64> {
        require(self.max_hr_bpm, v::MAX_HR)
    }

    pub fn require_run_distance_m(&self) -> CalcResult<f64> {
        require(self.run_distance_m, v::DISTANCE)
    }

    pub fn require_walk_time_min(&self) -> CalcResult<f64> {
        require(self.walk_time_min, v::WALK_TIME)
    }

    pub fn require_walk_hr_bpm(&self) -> CalcResult<f64> {
        require(self.walk_hr_bpm, v::WALK_HR)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`BiometricInput`]. Also the deserialization shape, so JSON
/// input goes through the same bounds checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiometricInputBuilder {
    sex: Option<Sex>,
    age: Option<u32>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    activity: Option<ActivityLevel>,
    waist_cm: Option<f64>,
    hip_cm: Option<f64>,
    neck_cm: Option<f64>,
    body_fat_pct: Option<f64>,
    lifted_kg: Option<f64>,
    reps: Option<u32>,
    creatinine_mg_dl: Option<f64>,
    systolic_mmhg: Option<f64>,
    diastolic_mmhg: Option<f64>,
    resting_hr_bpm: Option<f64>,
    max_hr_bpm: Option<f64>,
    run_distance_m: Option<f64>,
    walk_time_min: Option<f64>,
    walk_hr_bpm: Option<f64>,
}

macro_rules! setter {
    ($name:ident: $ty:ty) => {
        pub fn $name(mut self, value: $ty) -> Self {
            self.$name = Some(value);
            self
        }
    };
}

impl BiometricInputBuilder {
    setter!(sex: Sex);
    setter!(age: u32);
    setter!(height_cm: f64);
    setter!(weight_kg: f64);
    setter!(activity: ActivityLevel);
    setter!(waist_cm: f64);
    setter!(hip_cm: f64);
    setter!(neck_cm: f64);
    setter!(body_fat_pct: f64);
    setter!(lifted_kg: f64);
    setter!(reps: u32);
    setter!(creatinine_mg_dl: f64);
    setter!(systolic_mmhg: f64);
    setter!(diastolic_mmhg: f64);
    setter!(resting_hr_bpm: f64);
    setter!(max_hr_bpm: f64);
    setter!(run_distance_m: f64);
    setter!(walk_time_min: f64);
    setter!(walk_hr_bpm: f64);

    /// Bounds-check every present value and freeze the input
    pub fn build(self) -> CalcResult<BiometricInput> {
        let checks: [(&str, Option<f64>); 17] = [
            (v::AGE, self.age.map(f64::from)),
            (v::HEIGHT, self.height_cm),
            (v::WEIGHT, self.weight_kg),
            (v::WAIST, self.waist_cm),
            (v::HIP, self.hip_cm),
            (v::NECK, self.neck_cm),
            (v::BODY_FAT, self.body_fat_pct),
            (v::LIFTED, self.lifted_kg),
            (v::REPS, self.reps.map(f64::from)),
            (v::CREATININE, self.creatinine_mg_dl),
            (v::SYSTOLIC, self.systolic_mmhg),
            (v::DIASTOLIC, self.diastolic_mmhg),
            (v::RESTING_HR, self.resting_hr_bpm),
            (v::MAX_HR, self.max_hr_bpm),
            (v::DISTANCE, self.run_distance_m),
            (v::WALK_TIME, self.walk_time_min),
            (v::WALK_HR, self.walk_hr_bpm),
        ];
        for (field, value) in checks {
            if let Some(value) = value {
                check_bounds(field, value)?;
            }
        }

        Ok(BiometricInput {
            sex: self.sex,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity: self.activity,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
            neck_cm: self.neck_cm,
            body_fat_pct: self.body_fat_pct,
            lifted_kg: self.lifted_kg,
            reps: self.reps,
            creatinine_mg_dl: self.creatinine_mg_dl,
            systolic_mmhg: self.systolic_mmhg,
            diastolic_mmhg: self.diastolic_mmhg,
            resting_hr_bpm: self.resting_hr_bpm,
            max_hr_bpm: self.max_hr_bpm,
            run_distance_m: self.run_distance_m,
            walk_time_min: self.walk_time_min,
            walk_hr_bpm: self.walk_hr_bpm,
        })
    }
}

impl TryFrom<BiometricInputBuilder> for BiometricInput {
    type Error = CalcError;

    fn try_from(builder: BiometricInputBuilder) -> CalcResult<Self> {
        builder.build()
    }
}

fn check_bounds(field: &str, value: f64) -> CalcResult<()> {
    let Some(spec) = field_spec(field) else {
        return Ok(());
    };
    if !value.is_finite() {
        return Err(CalcError::not_a_number(field, value.to_string()));
    }
    if value < spec.min {
        return Err(CalcError::BelowMinimum {
            field: field.to_string(),
            value,
            min: spec.min,
        });
    }
    if value > spec.max {
        return Err(CalcError::AboveMaximum {
            field: field.to_string(),
            value,
            max: spec.max,
        });
    }
    if spec.integer && value.fract() != 0.0 {
        return Err(CalcError::not_a_number(field, value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_parses_known_fields() {
        let raw = RawInput::new()
            .with("sex", "Female")
            .with("age", "42")
            .with("height", "165")
            .with("weight", "61.5")
            .with("activity", "very_active")
            .with("unrelated", "ignored");

        let input = BiometricInput::from_raw(&raw).unwrap();
        assert_eq!(input.sex(), Some(Sex::Female));
        assert_eq!(input.age(), Some(42));
        assert_eq!(input.weight_kg(), Some(61.5));
        assert_eq!(input.activity(), Some(ActivityLevel::VeryActive));
    }

    #[test]
    fn test_from_raw_names_failing_field() {
        let raw = RawInput::new().with("height", "abc");
        let err = BiometricInput::from_raw(&raw).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
        assert_eq!(err.field(), Some("height"));

        let raw = RawInput::new().with("sex", "other");
        let err = BiometricInput::from_raw(&raw).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CHOICE");
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        let err = BiometricInput::builder().age(5).build().unwrap_err();
        assert!(matches!(err, CalcError::BelowMinimum { ref field, .. } if field == "age"));

        let err = BiometricInput::builder().height_cm(400.0).build().unwrap_err();
        assert!(matches!(err, CalcError::AboveMaximum { .. }));

        let err = BiometricInput::builder().weight_kg(f64::NAN).build().unwrap_err();
        assert!(matches!(err, CalcError::NotANumber { .. }));
    }

    #[test]
    fn test_builder_rejects_fractional_whole_fields() {
        let err = BiometricInput::builder().systolic_mmhg(180.5).build().unwrap_err();
        assert_eq!(err, CalcError::not_a_number("systolic", "180.5"));

        let err = BiometricInput::builder().resting_hr_bpm(61.2).build().unwrap_err();
        assert_eq!(err.field(), Some("resting_hr"));

        let bad: Result<BiometricInput, _> = serde_json::from_str(r#"{"systolic_mmhg": 180.5}"#);
        assert!(bad.is_err());

        let ok = BiometricInput::builder().systolic_mmhg(180.0).build().unwrap();
        assert_eq!(ok.require_systolic_mmhg().unwrap(), 180.0);
    }

    #[test]
    fn test_require_reports_missing_field() {
        let input = BiometricInput::builder().build().unwrap();
        assert_eq!(input.require_neck_cm().unwrap_err(), CalcError::missing_field("neck"));
        assert_eq!(input.require_sex().unwrap_err(), CalcError::missing_field("sex"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BiometricInput = serde_json::from_str(r#"{"height_cm": 180.0}"#).unwrap();
        assert_eq!(ok.height_cm(), Some(180.0));

        let bad: Result<BiometricInput, _> = serde_json::from_str(r#"{"age": 3}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let input = BiometricInput::builder().height_cm(180.0).build().unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"height_cm":180.0}"#);
    }

    #[test]
    fn test_activity_factors() {
        assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
        assert_eq!(ActivityLevel::Moderate.factor(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.factor(), 1.9);
    }
}
