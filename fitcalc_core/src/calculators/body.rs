//! Body composition calculators: BMI, body fat, ABSI, BRI, WHtR, WHR,
//! ideal weight and lean body mass.

use super::{finish, formula_variants, CalculatorKind};
use crate::classification::{body_fat_metric, whr_metric};
use crate::errors::{CalcError, CalcResult};
use crate::formulas::anthropometry as f;
use crate::formulas::Formula;
use crate::input::{BiometricInput, Sex};
use crate::result::{CalculatorResult, Computed, Metric};
use crate::units::{Centimeters, Inches, Meters, Unit};

/// WHO "Normal weight" band, used for the healthy weight range
const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 25.0;

formula_variants! {
    /// Body fat estimation method
    BodyFatMethod default Navy {
        /// US Navy circumference method
        Navy => "navy",
        /// Deurenberg BMI-based estimate
        Bmi => "bmi",
    }
}

formula_variants! {
    /// Ideal body weight formula
    IdealWeightFormula default Devine {
        Devine => "devine",
        Robinson => "robinson",
        Miller => "miller",
        Hamwi => "hamwi",
    }
}

formula_variants! {
    /// Lean body mass formula
    LbmFormula default Boer {
        Boer => "boer",
        James => "james",
        Hume => "hume",
    }
}

impl BodyFatMethod {
    pub fn formula(&self) -> Formula {
        match self {
            BodyFatMethod::Navy => Formula::NavyBodyFat,
            BodyFatMethod::Bmi => Formula::DeurenbergBodyFat,
        }
    }
}

impl IdealWeightFormula {
    pub fn formula(&self) -> Formula {
        match self {
            IdealWeightFormula::Devine => Formula::Devine,
            IdealWeightFormula::Robinson => Formula::Robinson,
            IdealWeightFormula::Miller => Formula::Miller,
            IdealWeightFormula::Hamwi => Formula::Hamwi,
        }
    }
}

impl LbmFormula {
    pub fn formula(&self) -> Formula {
        match self {
            LbmFormula::Boer => Formula::BoerLbm,
            LbmFormula::James => Formula::JamesLbm,
            LbmFormula::Hume => Formula::HumeLbm,
        }
    }
}

fn meters(cm: f64) -> f64 {
    Meters::from(Centimeters(cm)).0
}

pub fn bmi(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let weight = input.require_weight_kg()?;
    let height_m = meters(input.require_height_cm()?);

    let value = f::bmi(weight, height_m);
    let computed = Computed::new(
        CalculatorKind::Bmi,
        Formula::Bmi,
        Metric::new("bmi", "BMI", value, Unit::KgPerM2),
    )
    .with_secondary(Metric::new(
        "healthy_weight_min_kg",
        "Healthy weight from",
        HEALTHY_BMI_MIN * height_m * height_m,
        Unit::Kilograms,
    ))
    .with_secondary(Metric::new(
        "healthy_weight_max_kg",
        "Healthy weight to",
        HEALTHY_BMI_MAX * height_m * height_m,
        Unit::Kilograms,
    ));

    finish(input, computed, Some("bmi"))
}

pub fn body_fat(input: &BiometricInput, method: BodyFatMethod) -> CalcResult<CalculatorResult> {
    let sex = input.require_sex()?;
    let height = input.require_height_cm()?;

    let value = match method {
        BodyFatMethod::Navy => {
            let waist = input.require_waist_cm()?;
            let neck = input.require_neck_cm()?;
            match sex {
                Sex::Male => f::navy_body_fat_male(waist, neck, height)
                    .ok_or_else(|| CalcError::out_of_range("body-fat", waist - neck))?,
                Sex::Female => {
                    let hip = input.require_hip_cm()?;
                    f::navy_body_fat_female(waist, hip, neck, height)
                        .ok_or_else(|| CalcError::out_of_range("body-fat", waist + hip - neck))?
                }
            }
        }
        BodyFatMethod::Bmi => {
            let weight = input.require_weight_kg()?;
            let age = input.require_age()?;
            f::deurenberg_body_fat(f::bmi(weight, meters(height)), f64::from(age), sex)
        }
    };

    let mut computed = Computed::new(
        CalculatorKind::BodyFat,
        method.formula(),
        Metric::new("body_fat_pct", "Body fat", value, Unit::Percent),
    );
    if let Some(weight) = input.weight_kg() {
        let fat_mass = weight * value / 100.0;
        computed = computed
            .with_secondary(Metric::new("fat_mass_kg", "Fat mass", fat_mass, Unit::Kilograms))
            .with_secondary(Metric::new("lean_mass_kg", "Lean mass", weight - fat_mass, Unit::Kilograms));
    }

    finish(input, computed, Some(&body_fat_metric(sex)))
}

pub fn absi(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let waist_m = meters(input.require_waist_cm()?);
    let height_m = meters(input.require_height_cm()?);
    let weight = input.require_weight_kg()?;

    let bmi = f::bmi(weight, height_m);
    let computed = Computed::new(
        CalculatorKind::Absi,
        Formula::Absi,
        Metric::new("absi", "ABSI", f::absi(waist_m, bmi, height_m), Unit::Ratio),
    )
    .with_secondary(Metric::new("bmi", "BMI", bmi, Unit::KgPerM2));

    finish(input, computed, None)
}

pub fn bri(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let waist_m = meters(input.require_waist_cm()?);
    let height_m = meters(input.require_height_cm()?);

    let value = f::bri(waist_m, height_m)
        .ok_or_else(|| CalcError::out_of_range("bri", waist_m / height_m))?;
    let computed = Computed::new(
        CalculatorKind::Bri,
        Formula::Bri,
        Metric::new("bri", "BRI", value, Unit::Ratio),
    );

    finish(input, computed, None)
}

pub fn whtr(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let waist = input.require_waist_cm()?;
    let height = input.require_height_cm()?;

    let computed = Computed::new(
        CalculatorKind::Whtr,
        Formula::WaistToHeight,
        Metric::new("whtr", "Waist-to-height ratio", f::waist_to_height(waist, height), Unit::Ratio),
    );

    finish(input, computed, Some("whtr"))
}

pub fn whr(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let sex = input.require_sex()?;
    let waist = input.require_waist_cm()?;
    let hip = input.require_hip_cm()?;

    let computed = Computed::new(
        CalculatorKind::Whr,
        Formula::WaistToHip,
        Metric::new("whr", "Waist-to-hip ratio", f::waist_to_hip(waist, hip), Unit::Ratio),
    );

    finish(input, computed, Some(&whr_metric(sex)))
}

pub fn ideal_weight(input: &BiometricInput, formula: IdealWeightFormula) -> CalcResult<CalculatorResult> {
    let sex = input.require_sex()?;
    let height_in = Inches::from(Centimeters(input.require_height_cm()?)).0;

    let value = match formula {
        IdealWeightFormula::Devine => f::devine(sex, height_in),
        IdealWeightFormula::Robinson => f::robinson(sex, height_in),
        IdealWeightFormula::Miller => f::miller(sex, height_in),
        IdealWeightFormula::Hamwi => f::hamwi(sex, height_in),
    };

    let mut computed = Computed::new(
        CalculatorKind::IdealWeight,
        formula.formula(),
        Metric::new("ideal_weight_kg", "Ideal weight", value, Unit::Kilograms),
    );
    if let Some(weight) = input.weight_kg() {
        computed = computed.with_secondary(Metric::new(
            "difference_kg",
            "Current minus ideal",
            weight - value,
            Unit::Kilograms,
        ));
    }

    finish(input, computed, None)
}

pub fn lean_body_mass(input: &BiometricInput, formula: LbmFormula) -> CalcResult<CalculatorResult> {
    let sex = input.require_sex()?;
    let weight = input.require_weight_kg()?;
    let height = input.require_height_cm()?;

    let value = match formula {
        LbmFormula::Boer => f::boer_lbm(sex, weight, height),
        LbmFormula::James => f::james_lbm(sex, weight, height),
        LbmFormula::Hume => f::hume_lbm(sex, weight, height),
    };

    let computed = Computed::new(
        CalculatorKind::LeanBodyMass,
        formula.formula(),
        Metric::new("lean_body_mass_kg", "Lean body mass", value, Unit::Kilograms),
    )
    .with_secondary(Metric::new(
        "body_fat_pct",
        "Implied body fat",
        (1.0 - value / weight) * 100.0,
        Unit::Percent,
    ));

    finish(input, computed, None)
}
