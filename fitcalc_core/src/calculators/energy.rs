//! Energy calculators: BMR and TDEE.

use super::{finish, formula_variants, CalculatorKind};
use crate::errors::CalcResult;
use crate::formulas::energy as f;
use crate::formulas::Formula;
use crate::input::BiometricInput;
use crate::result::{CalculatorResult, Computed, Metric};
use crate::units::Unit;

/// Daily deficit/surplus for the cut and bulk targets (kcal)
pub const CALORIE_ADJUSTMENT: f64 = 500.0;

/// Default macronutrient split (protein, carbohydrate, fat)
pub const MACRO_SPLIT: (f64, f64, f64) = (0.30, 0.40, 0.30);

formula_variants! {
    /// BMR estimator, shared by the BMR and TDEE calculators
    BmrFormula default MifflinStJeor {
        MifflinStJeor => "mifflin-st-jeor",
        /// Revised Roza–Shizgal 1984 coefficients
        HarrisBenedict => "harris-benedict",
        /// Lean-mass based; needs body fat instead of sex/age/height
        KatchMcArdle => "katch-mcardle",
    }
}

impl BmrFormula {
    pub fn formula(&self) -> Formula {
        match self {
            BmrFormula::MifflinStJeor => Formula::MifflinStJeor,
            BmrFormula::HarrisBenedict => Formula::HarrisBenedict,
            BmrFormula::KatchMcArdle => Formula::KatchMcArdle,
        }
    }
}

fn basal_rate(input: &BiometricInput, formula: BmrFormula) -> CalcResult<f64> {
    let weight = input.require_weight_kg()?;
    Ok(match formula {
        BmrFormula::MifflinStJeor | BmrFormula::HarrisBenedict => {
            let sex = input.require_sex()?;
            let age = f64::from(input.require_age()?);
            let height = input.require_height_cm()?;
            if formula == BmrFormula::MifflinStJeor {
                f::mifflin_st_jeor(sex, weight, height, age)
            } else {
                f::harris_benedict(sex, weight, height, age)
            }
        }
        BmrFormula::KatchMcArdle => f::katch_mcardle(weight, input.require_body_fat_pct()?),
    })
}

pub fn bmr(input: &BiometricInput, formula: BmrFormula) -> CalcResult<CalculatorResult> {
    let value = basal_rate(input, formula)?;
    let computed = Computed::new(
        CalculatorKind::Bmr,
        formula.formula(),
        Metric::new("bmr_kcal", "Basal metabolic rate", value, Unit::KcalPerDay),
    );
    finish(input, computed, None)
}

pub fn tdee(input: &BiometricInput, formula: BmrFormula) -> CalcResult<CalculatorResult> {
    let basal = basal_rate(input, formula)?;
    let activity = input.require_activity()?;
    let value = f::tdee(basal, activity.factor());

    let (protein, carbs, fat) = f::macro_grams(value, MACRO_SPLIT.0, MACRO_SPLIT.1, MACRO_SPLIT.2);
    let computed = Computed::new(
        CalculatorKind::Tdee,
        formula.formula(),
        Metric::new("tdee_kcal", "Total daily energy expenditure", value, Unit::KcalPerDay),
    )
    .with_secondary(Metric::new("bmr_kcal", "Basal metabolic rate", basal, Unit::KcalPerDay))
    .with_secondary(Metric::new("cut_kcal", "Weight loss target", value - CALORIE_ADJUSTMENT, Unit::KcalPerDay))
    .with_secondary(Metric::new("bulk_kcal", "Weight gain target", value + CALORIE_ADJUSTMENT, Unit::KcalPerDay))
    .with_secondary(Metric::new("protein_g", "Protein", protein, Unit::GramsPerDay))
    .with_secondary(Metric::new("carbs_g", "Carbohydrate", carbs, Unit::GramsPerDay))
    .with_secondary(Metric::new("fat_g", "Fat", fat, Unit::GramsPerDay));

    finish(input, computed, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::input::{ActivityLevel, Sex};

    fn input() -> BiometricInput {
        BiometricInput::builder()
            .sex(Sex::Male)
            .age(30)
            .height_cm(180.0)
            .weight_kg(80.0)
            .activity(ActivityLevel::Moderate)
            .build()
            .unwrap()
    }

    #[test]
    fn test_tdee_scenario() {
        let result = tdee(&input(), BmrFormula::default()).unwrap();
        assert!((result.value() - 2759.0).abs() < 1e-9);
        assert_eq!(result.display_value(0), "2759 kcal/day");
        assert_eq!(result.formula, Formula::MifflinStJeor);
        assert!(result.classification.is_none());

        let cut = result.secondary("cut_kcal").unwrap().value;
        let bulk = result.secondary("bulk_kcal").unwrap().value;
        assert!((cut - 2259.0).abs() < 1e-9);
        assert!((bulk - 3259.0).abs() < 1e-9);
    }

    #[test]
    fn test_macros_add_back_up() {
        let result = tdee(&input(), BmrFormula::default()).unwrap();
        let kcal = result.secondary("protein_g").unwrap().value * 4.0
            + result.secondary("carbs_g").unwrap().value * 4.0
            + result.secondary("fat_g").unwrap().value * 9.0;
        assert!((kcal - result.value()).abs() < 1e-6);
    }

    #[test]
    fn test_tdee_requires_activity() {
        let input = BiometricInput::builder()
            .sex(Sex::Male)
            .age(30)
            .height_cm(180.0)
            .weight_kg(80.0)
            .build()
            .unwrap();
        assert_eq!(
            tdee(&input, BmrFormula::default()).unwrap_err(),
            CalcError::missing_field("activity")
        );
        assert!(bmr(&input, BmrFormula::default()).is_ok());
    }

    #[test]
    fn test_katch_mcardle_needs_body_fat_only() {
        let input = BiometricInput::builder().weight_kg(80.0).build().unwrap();
        assert_eq!(
            bmr(&input, BmrFormula::KatchMcArdle).unwrap_err(),
            CalcError::missing_field("body_fat")
        );
        let input = BiometricInput::builder()
            .weight_kg(80.0)
            .body_fat_pct(20.0)
            .build()
            .unwrap();
        let result = bmr(&input, BmrFormula::KatchMcArdle).unwrap();
        assert!((result.value() - 1752.4).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict_variant() {
        let result = bmr(&input(), BmrFormula::HarrisBenedict).unwrap();
        assert_eq!(result.formula, Formula::HarrisBenedict);
        assert!(result.value() > 1800.0 && result.value() < 1900.0);
    }
}
