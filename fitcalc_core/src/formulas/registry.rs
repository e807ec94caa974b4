//! # Formula Registry
//!
//! Central registry of every formula the calculators can apply. Each formula
//! carries its published source, a plain-text rendering and variable list so
//! results can cite exactly which equation produced them.
//!
//! ## Usage
//!
//! ```rust
//! use fitcalc_core::formulas::registry::Formula;
//!
//! let meta = Formula::Epley.metadata();
//! assert_eq!(meta.formula_plain, "1RM = w * (1 + r/30)");
//! println!("{}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Published source of a formula or band table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Reference {
    /// Peer-reviewed paper
    Journal {
        authors: &'static str,
        year: u16,
        journal: &'static str,
    },
    /// Guideline or standard from a professional body
    Guideline {
        body: &'static str,
        year: u16,
        title: &'static str,
    },
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Journal { authors, year, journal } => {
                format!("{} ({}), {}", authors, year, journal)
            }
            Reference::Guideline { body, year, title } => {
                format!("{} {}: {}", body, year, title)
            }
        }
    }

    /// Year of publication
    pub fn year(&self) -> u16 {
        match self {
            Reference::Journal { year, .. } | Reference::Guideline { year, .. } => *year,
        }
    }
}

const fn paper(authors: &'static str, year: u16, journal: &'static str) -> Reference {
    Reference::Journal { authors, year, journal }
}

const fn guideline(body: &'static str, year: u16, title: &'static str) -> Reference {
    Reference::Guideline { body, year, title }
}

// ============================================================================
// Categories
// ============================================================================

/// Grouping used for the formula reference and the calculator catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaCategory {
    BodyComposition,
    Energy,
    Strength,
    Cardio,
    Clinical,
}

impl FormulaCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::BodyComposition => "Body Composition",
            FormulaCategory::Energy => "Energy & Nutrition",
            FormulaCategory::Strength => "Strength",
            FormulaCategory::Cardio => "Cardio Fitness",
            FormulaCategory::Clinical => "Clinical",
        }
    }

    /// Every category, in reference-document order
    pub fn all() -> [FormulaCategory; 5] {
        [
            FormulaCategory::BodyComposition,
            FormulaCategory::Energy,
            FormulaCategory::Strength,
            FormulaCategory::Cardio,
            FormulaCategory::Clinical,
        ]
    }
}

// ============================================================================
// Variables and metadata
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

const W: Variable = Variable::new("w", "Body mass", "kg");
const H: Variable = Variable::new("h", "Height", "cm");
const H_M: Variable = Variable::new("h_m", "Height", "m");
const A: Variable = Variable::new("a", "Age", "years");
const S: Variable = Variable::new("s", "Sex indicator (male = 1, female = 0)", "");
const WC: Variable = Variable::new("WC", "Waist circumference", "cm");
const HC: Variable = Variable::new("HC", "Hip circumference", "cm");
const NC: Variable = Variable::new("NC", "Neck circumference", "cm");
const LIFT: Variable = Variable::new("w", "Load lifted", "kg");
const REPS: Variable = Variable::new("r", "Repetitions completed", "");
const SCR: Variable = Variable::new("Scr", "Serum creatinine", "mg/dL");
const HR_MAX: Variable = Variable::new("HRmax", "Maximum heart rate", "bpm");
const HR_REST: Variable = Variable::new("HRrest", "Resting heart rate", "bpm");
const IN: Variable = Variable::new("in", "Height", "inches");

/// Complete metadata for one formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the formula estimates
    pub description: &'static str,
    /// Formula in plain text
    pub formula_plain: &'static str,
    /// Published source
    pub reference: Reference,
    pub variables: Vec<Variable>,
    pub category: FormulaCategory,
    /// Source module of the implementation
    pub source_module: &'static str,
    /// Function implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula enum
// ============================================================================

/// Every formula applied by a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    // Body composition
    Bmi,
    Absi,
    Bri,
    WaistToHeight,
    WaistToHip,
    NavyBodyFat,
    DeurenbergBodyFat,
    Devine,
    Robinson,
    Miller,
    Hamwi,
    BoerLbm,
    JamesLbm,
    HumeLbm,
    // Energy
    MifflinStJeor,
    HarrisBenedict,
    KatchMcArdle,
    // Strength
    Epley,
    Brzycki,
    Lombardi,
    OConner,
    Lander,
    Mayhew,
    Wathan,
    // Cardio
    MaxHrFox,
    MaxHrTanaka,
    MaxHrGellish,
    Vo2maxUth,
    Vo2maxCooper,
    Vo2maxRockport,
    // Clinical
    CkdEpi2021,
    CockcroftGault,
    BloodPressureAha,
}

#[allow(clippy::too_many_arguments)]
fn meta(
    name: &'static str,
    description: &'static str,
    formula_plain: &'static str,
    reference: Reference,
    variables: Vec<Variable>,
    category: FormulaCategory,
    source_module: &'static str,
    source_function: &'static str,
) -> FormulaMetadata {
    FormulaMetadata {
        name,
        description,
        formula_plain,
        reference,
        variables,
        category,
        source_module,
        source_function,
    }
}

const ANTHRO: &str = "formulas/anthropometry.rs";
const ENERGY: &str = "formulas/energy.rs";
const STRENGTH: &str = "formulas/strength.rs";
const CARDIO: &str = "formulas/cardio.rs";
const RENAL: &str = "formulas/renal.rs";

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        use FormulaCategory::*;

        match self {
            // Body composition
            Formula::Bmi => meta(
                "Body Mass Index",
                "Body mass relative to height squared",
                "BMI = w / h_m^2",
                guideline("WHO", 2000, "Obesity: preventing and managing the global epidemic (TRS 894)"),
                vec![W, H_M],
                BodyComposition,
                ANTHRO,
                "bmi",
            ),
            Formula::Absi => meta(
                "A Body Shape Index",
                "Waist circumference adjusted for BMI and height",
                "ABSI = WC_m / (BMI^(2/3) * h_m^(1/2))",
                paper("Krakauer NY, Krakauer JC", 2012, "PLoS ONE 7(7):e39504"),
                vec![Variable::new("WC_m", "Waist circumference", "m"), H_M],
                BodyComposition,
                ANTHRO,
                "absi",
            ),
            Formula::Bri => meta(
                "Body Roundness Index",
                "Body eccentricity from waist and height, modelling the body as an ellipse",
                "BRI = 364.2 - 365.5 * sqrt(1 - (WC/(2*pi))^2 / (0.5*h)^2)",
                paper("Thomas DM et al.", 2013, "Obesity 21(11):2264-2271"),
                vec![WC, H],
                BodyComposition,
                ANTHRO,
                "bri",
            ),
            Formula::WaistToHeight => meta(
                "Waist-to-Height Ratio",
                "Central adiposity relative to height",
                "WHtR = WC / h",
                paper("Ashwell M, Hsieh SD", 2005, "Int J Food Sci Nutr 56(5):303-307"),
                vec![WC, H],
                BodyComposition,
                ANTHRO,
                "waist_to_height",
            ),
            Formula::WaistToHip => meta(
                "Waist-to-Hip Ratio",
                "Central adiposity relative to hip circumference",
                "WHR = WC / HC",
                guideline("WHO", 2008, "Waist circumference and waist-hip ratio: report of a WHO expert consultation"),
                vec![WC, HC],
                BodyComposition,
                ANTHRO,
                "waist_to_hip",
            ),
            Formula::NavyBodyFat => meta(
                "US Navy Body Fat",
                "Body fat percentage from circumference measurements",
                "male: BF% = 495 / (1.0324 - 0.19077*log10(WC - NC) + 0.15456*log10(h)) - 450; \
                 female: BF% = 495 / (1.29579 - 0.35004*log10(WC + HC - NC) + 0.22100*log10(h)) - 450",
                paper("Hodgdon JA, Beckett MB", 1984, "Naval Health Research Center Report 84-11"),
                vec![WC, HC, NC, H],
                BodyComposition,
                ANTHRO,
                "navy_body_fat_male",
            ),
            Formula::DeurenbergBodyFat => meta(
                "BMI-Based Body Fat",
                "Adult body fat percentage from BMI, age and sex",
                "BF% = 1.20*BMI + 0.23*a - 10.8*s - 5.4",
                paper("Deurenberg P, Weststrate JA, Seidell JC", 1991, "Br J Nutr 65(2):105-114"),
                vec![Variable::new("BMI", "Body mass index", "kg/m²"), A, S],
                BodyComposition,
                ANTHRO,
                "deurenberg_body_fat",
            ),
            Formula::Devine => meta(
                "Devine Ideal Weight",
                "Ideal body weight from height",
                "male: 50 + 2.3*(in - 60); female: 45.5 + 2.3*(in - 60)",
                paper("Devine BJ", 1974, "Drug Intell Clin Pharm 8:650-655"),
                vec![IN],
                BodyComposition,
                ANTHRO,
                "devine",
            ),
            Formula::Robinson => meta(
                "Robinson Ideal Weight",
                "Ideal body weight from height",
                "male: 52 + 1.9*(in - 60); female: 49 + 1.7*(in - 60)",
                paper("Robinson JD et al.", 1983, "Am J Hosp Pharm 40(6):1016-1019"),
                vec![IN],
                BodyComposition,
                ANTHRO,
                "robinson",
            ),
            Formula::Miller => meta(
                "Miller Ideal Weight",
                "Ideal body weight from height",
                "male: 56.2 + 1.41*(in - 60); female: 53.1 + 1.36*(in - 60)",
                paper("Miller DR et al.", 1983, "Am J Hosp Pharm 40(10):1622"),
                vec![IN],
                BodyComposition,
                ANTHRO,
                "miller",
            ),
            Formula::Hamwi => meta(
                "Hamwi Ideal Weight",
                "Ideal body weight from height",
                "male: 48 + 2.7*(in - 60); female: 45.5 + 2.2*(in - 60)",
                paper("Hamwi GJ", 1964, "Diabetes Mellitus: Diagnosis and Treatment 1:73-78"),
                vec![IN],
                BodyComposition,
                ANTHRO,
                "hamwi",
            ),
            Formula::BoerLbm => meta(
                "Boer Lean Body Mass",
                "Fat-free mass from weight and height",
                "male: 0.407*w + 0.267*h - 19.2; female: 0.252*w + 0.473*h - 48.3",
                paper("Boer P", 1984, "Am J Physiol 247(4):F632-F636"),
                vec![W, H],
                BodyComposition,
                ANTHRO,
                "boer_lbm",
            ),
            Formula::JamesLbm => meta(
                "James Lean Body Mass",
                "Fat-free mass from weight and height",
                "male: 1.1*w - 128*(w/h)^2; female: 1.07*w - 148*(w/h)^2",
                paper("James WPT", 1976, "Research on Obesity, HMSO London"),
                vec![W, H],
                BodyComposition,
                ANTHRO,
                "james_lbm",
            ),
            Formula::HumeLbm => meta(
                "Hume Lean Body Mass",
                "Fat-free mass from weight and height",
                "male: 0.32810*w + 0.33929*h - 29.5336; female: 0.29569*w + 0.41813*h - 43.2933",
                paper("Hume R", 1966, "J Clin Pathol 19(4):389-391"),
                vec![W, H],
                BodyComposition,
                ANTHRO,
                "hume_lbm",
            ),

            // Energy
            Formula::MifflinStJeor => meta(
                "Mifflin-St Jeor BMR",
                "Resting energy expenditure",
                "BMR = 10*w + 6.25*h - 5*a + (5 if male else -161)",
                paper("Mifflin MD, St Jeor ST et al.", 1990, "Am J Clin Nutr 51(2):241-247"),
                vec![W, H, A],
                Energy,
                ENERGY,
                "mifflin_st_jeor",
            ),
            Formula::HarrisBenedict => meta(
                "Revised Harris-Benedict BMR",
                "Resting energy expenditure",
                "male: 88.362 + 13.397*w + 4.799*h - 5.677*a; female: 447.593 + 9.247*w + 3.098*h - 4.330*a",
                paper("Roza AM, Shizgal HM", 1984, "Am J Clin Nutr 40(1):168-182"),
                vec![W, H, A],
                Energy,
                ENERGY,
                "harris_benedict",
            ),
            Formula::KatchMcArdle => meta(
                "Katch-McArdle BMR",
                "Resting energy expenditure from lean body mass",
                "BMR = 370 + 21.6 * w * (1 - bf/100)",
                paper("McArdle WD, Katch FI, Katch VL", 1996, "Exercise Physiology, 4th ed."),
                vec![W, Variable::new("bf", "Body fat", "%")],
                Energy,
                ENERGY,
                "katch_mcardle",
            ),

            // Strength
            Formula::Epley => meta(
                "Epley 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = w * (1 + r/30)",
                paper("Epley B", 1985, "Poundage Chart, Boyd Epley Workout"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "epley",
            ),
            Formula::Brzycki => meta(
                "Brzycki 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = w * 36 / (37 - r)",
                paper("Brzycki M", 1993, "JOPERD 64(1):88-90"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "brzycki",
            ),
            Formula::Lombardi => meta(
                "Lombardi 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = w * r^0.10",
                paper("Lombardi VP", 1989, "Beginning Weight Training, W.C. Brown"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "lombardi",
            ),
            Formula::OConner => meta(
                "O'Conner 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = w * (1 + 0.025*r)",
                paper("O'Conner B, Simmons J, O'Shea P", 1989, "Weight Training Today, West Publishing"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "oconner",
            ),
            Formula::Lander => meta(
                "Lander 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = 100*w / (101.3 - 2.67123*r)",
                paper("Lander J", 1985, "NSCA Journal 6(6):60-61"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "lander",
            ),
            Formula::Mayhew => meta(
                "Mayhew 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = 100*w / (52.2 + 41.9*e^(-0.055*r))",
                paper("Mayhew JL et al.", 1992, "J Appl Sport Sci Res 6(4):200-206"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "mayhew",
            ),
            Formula::Wathan => meta(
                "Wathan 1RM",
                "One-repetition maximum from a submaximal set",
                "1RM = 100*w / (48.8 + 53.8*e^(-0.075*r))",
                paper("Wathan D", 1994, "Essentials of Strength Training and Conditioning, Human Kinetics"),
                vec![LIFT, REPS],
                Strength,
                STRENGTH,
                "wathan",
            ),

            // Cardio
            Formula::MaxHrFox => meta(
                "Fox Maximum Heart Rate",
                "Age-predicted maximum heart rate",
                "HRmax = 220 - a",
                paper("Fox SM, Naughton JP, Haskell WL", 1971, "Ann Clin Res 3:404-432"),
                vec![A],
                Cardio,
                CARDIO,
                "max_hr_fox",
            ),
            Formula::MaxHrTanaka => meta(
                "Tanaka Maximum Heart Rate",
                "Age-predicted maximum heart rate",
                "HRmax = 208 - 0.7*a",
                paper("Tanaka H, Monahan KD, Seals DR", 2001, "J Am Coll Cardiol 37(1):153-156"),
                vec![A],
                Cardio,
                CARDIO,
                "max_hr_tanaka",
            ),
            Formula::MaxHrGellish => meta(
                "Gellish Maximum Heart Rate",
                "Age-predicted maximum heart rate",
                "HRmax = 207 - 0.7*a",
                paper("Gellish RL et al.", 2007, "Med Sci Sports Exerc 39(5):822-829"),
                vec![A],
                Cardio,
                CARDIO,
                "max_hr_gellish",
            ),
            Formula::Vo2maxUth => meta(
                "Uth-Sørensen VO2max",
                "Aerobic capacity from the heart-rate ratio",
                "VO2max = 15.3 * HRmax / HRrest",
                paper("Uth N, Sørensen H et al.", 2004, "Eur J Appl Physiol 91(1):111-115"),
                vec![HR_MAX, HR_REST],
                Cardio,
                CARDIO,
                "vo2max_uth",
            ),
            Formula::Vo2maxCooper => meta(
                "Cooper 12-Minute Run",
                "Aerobic capacity from distance covered in 12 minutes",
                "VO2max = (d - 504.9) / 44.73",
                paper("Cooper KH", 1968, "JAMA 203(3):201-204"),
                vec![Variable::new("d", "Distance covered", "m")],
                Cardio,
                CARDIO,
                "vo2max_cooper",
            ),
            Formula::Vo2maxRockport => meta(
                "Rockport Walk Test",
                "Aerobic capacity from a timed one-mile walk",
                "VO2max = 132.853 - 0.0769*w_lb - 0.3877*a + 6.315*s - 3.2649*t - 0.1565*HR",
                paper("Kline GM et al.", 1987, "Med Sci Sports Exerc 19(3):253-259"),
                vec![
                    Variable::new("w_lb", "Body mass", "lb"),
                    A,
                    S,
                    Variable::new("t", "Walk time", "min"),
                    Variable::new("HR", "Heart rate at finish", "bpm"),
                ],
                Cardio,
                CARDIO,
                "vo2max_rockport",
            ),

            // Clinical
            Formula::CkdEpi2021 => meta(
                "CKD-EPI 2021 eGFR",
                "Estimated glomerular filtration rate, race-free refit",
                "eGFR = 142 * min(Scr/k,1)^alpha * max(Scr/k,1)^-1.200 * 0.9938^a * (1.012 if female)",
                paper("Inker LA et al.", 2021, "N Engl J Med 385:1737-1749"),
                vec![
                    SCR,
                    A,
                    Variable::new("k", "0.7 (female), 0.9 (male)", ""),
                    Variable::new("alpha", "-0.241 (female), -0.302 (male)", ""),
                ],
                Clinical,
                RENAL,
                "ckd_epi_2021",
            ),
            Formula::CockcroftGault => meta(
                "Cockcroft-Gault Creatinine Clearance",
                "Creatinine clearance from age, weight and serum creatinine",
                "CrCl = (140 - a) * w / (72 * Scr) * (0.85 if female)",
                paper("Cockcroft DW, Gault MH", 1976, "Nephron 16(1):31-41"),
                vec![A, W, SCR],
                Clinical,
                RENAL,
                "cockcroft_gault",
            ),
            Formula::BloodPressureAha => meta(
                "AHA Blood Pressure Category",
                "Higher of the systolic and diastolic categories",
                "category = max(band(SBP), band(DBP))",
                guideline("ACC/AHA", 2017, "Guideline for High Blood Pressure in Adults"),
                vec![
                    Variable::new("SBP", "Systolic pressure", "mmHg"),
                    Variable::new("DBP", "Diastolic pressure", "mmHg"),
                ],
                Clinical,
                "calculators/clinical.rs",
                "blood_pressure",
            ),
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::Bmi,
    Formula::Absi,
    Formula::Bri,
    Formula::WaistToHeight,
    Formula::WaistToHip,
    Formula::NavyBodyFat,
    Formula::DeurenbergBodyFat,
    Formula::Devine,
    Formula::Robinson,
    Formula::Miller,
    Formula::Hamwi,
    Formula::BoerLbm,
    Formula::JamesLbm,
    Formula::HumeLbm,
    Formula::MifflinStJeor,
    Formula::HarrisBenedict,
    Formula::KatchMcArdle,
    Formula::Epley,
    Formula::Brzycki,
    Formula::Lombardi,
    Formula::OConner,
    Formula::Lander,
    Formula::Mayhew,
    Formula::Wathan,
    Formula::MaxHrFox,
    Formula::MaxHrTanaka,
    Formula::MaxHrGellish,
    Formula::Vo2maxUth,
    Formula::Vo2maxCooper,
    Formula::Vo2maxRockport,
    Formula::CkdEpi2021,
    Formula::CockcroftGault,
    Formula::BloodPressureAha,
];

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the formula reference document (FORMULAS.md).
///
/// ```rust
/// use fitcalc_core::formulas::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("Fitcalc Formula Reference"));
/// assert!(markdown.contains("Mifflin-St Jeor BMR"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Fitcalc Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula used by the Fitcalc calculators, with its published source.
Values are computed in double precision; rounding happens only for display.

---

"#,
    );

    let mut categories = 0;
    for category in FormulaCategory::all() {
        let formulas = Formula::in_category(category);
        if formulas.is_empty() {
            continue;
        }
        categories += 1;

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 33);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "{:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "{:?} has no formula", formula);
            assert!(!meta.source_function.is_empty(), "{:?} has no source", formula);
            assert!(meta.reference.year() >= 1957);
        }
    }

    #[test]
    fn test_every_formula_is_categorized_once() {
        let total: usize = FormulaCategory::all()
            .iter()
            .map(|c| Formula::in_category(*c).len())
            .sum();
        assert_eq!(total, ALL_FORMULAS.len());
    }

    #[test]
    fn test_citation() {
        let citation = Formula::MifflinStJeor.metadata().reference.citation();
        assert_eq!(citation, "Mifflin MD, St Jeor ST et al. (1990), Am J Clin Nutr 51(2):241-247");

        let citation = Formula::Bmi.metadata().reference.citation();
        assert!(citation.starts_with("WHO 2000: "));
    }

    #[test]
    fn test_formula_serializes_snake_case() {
        let json = serde_json::to_string(&Formula::CkdEpi2021).unwrap();
        assert_eq!(json, "\"ckd_epi2021\"");
        let json = serde_json::to_string(&Formula::MifflinStJeor).unwrap();
        assert_eq!(json, "\"mifflin_st_jeor\"");
    }

    #[test]
    fn test_generate_markdown() {
        let md = generate_formulas_markdown();
        assert!(md.contains("## Body Composition"));
        assert!(md.contains("### Epley 1RM"));
        assert!(md.contains("`1RM = w * (1 + r/30)`"));
        assert!(md.contains("**Total Formulas:** 33"));
        assert!(md.contains("**Categories:** 5"));
    }
}
