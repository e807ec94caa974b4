//! # Calculator Catalog
//!
//! Static metadata for every calculator: slug, title, one-line summary,
//! category and the form fields it reads. Presentation layers render their
//! index pages and forms from this table.

use serde::Serialize;

use crate::calculators::CalculatorKind;
use crate::formulas::FormulaCategory;
use crate::validation as v;

/// Catalog entry for one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorInfo {
    pub kind: CalculatorKind,
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: FormulaCategory,
    /// Every form field the calculator can read, across all its variants
    pub fields: &'static [&'static str],
}

pub static CATALOG: &[CalculatorInfo] = &[
    CalculatorInfo {
        kind: CalculatorKind::Bmi,
        slug: "bmi",
        title: "BMI Calculator",
        summary: "Body mass index with WHO weight category and healthy weight range.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::HEIGHT, v::WEIGHT],
    },
    CalculatorInfo {
        kind: CalculatorKind::Bmr,
        slug: "bmr",
        title: "BMR Calculator",
        summary: "Basal metabolic rate: calories burned at complete rest.",
        category: FormulaCategory::Energy,
        fields: &[v::SEX, v::AGE, v::HEIGHT, v::WEIGHT, v::BODY_FAT, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::Tdee,
        slug: "tdee",
        title: "TDEE Calculator",
        summary: "Total daily energy expenditure with cut, bulk and macro targets.",
        category: FormulaCategory::Energy,
        fields: &[v::SEX, v::AGE, v::HEIGHT, v::WEIGHT, v::ACTIVITY, v::BODY_FAT, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::BodyFat,
        slug: "body-fat",
        title: "Body Fat Calculator",
        summary: "Body fat percentage from tape measurements or BMI.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::SEX, v::AGE, v::HEIGHT, v::WEIGHT, v::WAIST, v::NECK, v::HIP, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::Absi,
        slug: "absi",
        title: "ABSI Calculator",
        summary: "A Body Shape Index: waist circumference adjusted for height and BMI.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::HEIGHT, v::WEIGHT, v::WAIST],
    },
    CalculatorInfo {
        kind: CalculatorKind::Bri,
        slug: "bri",
        title: "Body Roundness Index",
        summary: "Body roundness from waist circumference and height.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::HEIGHT, v::WAIST],
    },
    CalculatorInfo {
        kind: CalculatorKind::Whtr,
        slug: "whtr",
        title: "Waist-to-Height Ratio",
        summary: "Waist circumference divided by height, with central-obesity risk band.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::HEIGHT, v::WAIST],
    },
    CalculatorInfo {
        kind: CalculatorKind::Whr,
        slug: "whr",
        title: "Waist-to-Hip Ratio",
        summary: "Waist divided by hip circumference, with WHO health risk band.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::SEX, v::WAIST, v::HIP],
    },
    CalculatorInfo {
        kind: CalculatorKind::IdealWeight,
        slug: "ideal-weight",
        title: "Ideal Weight Calculator",
        summary: "Ideal body weight from height using the classic clinical formulas.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::SEX, v::HEIGHT, v::WEIGHT, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::LeanBodyMass,
        slug: "lean-body-mass",
        title: "Lean Body Mass Calculator",
        summary: "Fat-free mass estimated from sex, height and weight.",
        category: FormulaCategory::BodyComposition,
        fields: &[v::SEX, v::HEIGHT, v::WEIGHT, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::OneRepMax,
        slug: "one-rep-max",
        title: "One Rep Max Calculator",
        summary: "Estimated one-repetition maximum and training loads from a submaximal set.",
        category: FormulaCategory::Strength,
        fields: &[v::LIFTED, v::REPS, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::MaxHeartRate,
        slug: "max-heart-rate",
        title: "Max Heart Rate Calculator",
        summary: "Age-predicted maximum heart rate and five training zones.",
        category: FormulaCategory::Cardio,
        fields: &[v::AGE, v::RESTING_HR, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::Vo2max,
        slug: "vo2max",
        title: "VO2max Calculator",
        summary: "Aerobic capacity from heart rate, a 12-minute run or a one-mile walk.",
        category: FormulaCategory::Cardio,
        fields: &[
            v::SEX,
            v::AGE,
            v::WEIGHT,
            v::MAX_HR,
            v::RESTING_HR,
            v::DISTANCE,
            v::WALK_TIME,
            v::WALK_HR,
            v::FORMULA,
        ],
    },
    CalculatorInfo {
        kind: CalculatorKind::Egfr,
        slug: "egfr",
        title: "eGFR Calculator",
        summary: "Estimated glomerular filtration rate with KDIGO stage.",
        category: FormulaCategory::Clinical,
        fields: &[v::SEX, v::AGE, v::CREATININE, v::WEIGHT, v::FORMULA],
    },
    CalculatorInfo {
        kind: CalculatorKind::BloodPressure,
        slug: "blood-pressure",
        title: "Blood Pressure Category",
        summary: "ACC/AHA blood pressure category with mean arterial and pulse pressure.",
        category: FormulaCategory::Clinical,
        fields: &[v::SYSTOLIC, v::DIASTOLIC],
    },
];

/// Look up a catalog entry by slug
pub fn find_by_slug(slug: &str) -> Option<&'static CalculatorInfo> {
    CATALOG.iter().find(|info| info.slug == slug)
}

/// Look up the catalog entry for a calculator
pub fn info(kind: CalculatorKind) -> Option<&'static CalculatorInfo> {
    CATALOG.iter().find(|info| info.kind == kind)
}

/// Catalog entries in one category
pub fn in_category(category: FormulaCategory) -> impl Iterator<Item = &'static CalculatorInfo> {
    CATALOG.iter().filter(move |info| info.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field_spec;

    #[test]
    fn test_every_calculator_listed_once() {
        assert_eq!(CATALOG.len(), CalculatorKind::ALL.len());
        for kind in CalculatorKind::ALL {
            assert_eq!(CATALOG.iter().filter(|i| i.kind == *kind).count(), 1);
            assert_eq!(info(*kind).unwrap().slug, kind.slug());
        }
    }

    #[test]
    fn test_find_by_slug() {
        assert_eq!(find_by_slug("tdee").unwrap().kind, CalculatorKind::Tdee);
        assert!(find_by_slug("nonsense").is_none());
    }

    #[test]
    fn test_fields_are_known() {
        let enumerated = [v::SEX, v::ACTIVITY, v::FORMULA];
        for info in CATALOG {
            for field in info.fields {
                assert!(
                    enumerated.contains(field) || field_spec(field).is_some(),
                    "{} lists unknown field {}",
                    info.slug,
                    field
                );
            }
            // Only calculators with variants take a formula field
            let has_variants = !info.kind.variant_keys().is_empty();
            assert_eq!(info.fields.contains(&v::FORMULA), has_variants, "{}", info.slug);
        }
    }

    #[test]
    fn test_every_category_populated() {
        for category in FormulaCategory::all() {
            assert!(in_category(category).count() > 0);
        }
    }
}
