//! # Band Tables
//!
//! Static classification data, one table per metric key. Every table is
//! ordered, contiguous and half-open (`[lower, upper)`); the first band starts
//! at zero and the last band is open-ended.
//!
//! Changing a published standard means replacing its table here, never the
//! lookup algorithm.

use super::{BandSpec, BandTable};

/// Upper bound of a standard's top category
const OPEN: f64 = f64::INFINITY;

const fn band(lower: f64, upper: f64, level: u8, label: &'static str) -> BandSpec {
    BandSpec { lower, upper, level, label }
}

// =============================================================================
// BODY COMPOSITION
// =============================================================================

/// WHO adult BMI classification (TRS 894, 2000; thinness grades per WHO 1995)
pub static BMI: BandTable = BandTable {
    metric: "bmi",
    standard: "WHO 2000",
    bands: &[
        band(0.0, 16.0, 0, "Severe thinness"),
        band(16.0, 17.0, 1, "Moderate thinness"),
        band(17.0, 18.5, 2, "Mild thinness"),
        band(18.5, 25.0, 3, "Normal weight"),
        band(25.0, 30.0, 4, "Overweight"),
        band(30.0, 35.0, 5, "Obesity class I"),
        band(35.0, 40.0, 6, "Obesity class II"),
        band(40.0, OPEN, 7, "Obesity class III"),
    ],
};

/// ACE body fat categories, men
pub static BODY_FAT_MALE: BandTable = BandTable {
    metric: "body-fat.male",
    standard: "ACE",
    bands: &[
        band(0.0, 6.0, 0, "Essential fat"),
        band(6.0, 14.0, 1, "Athletes"),
        band(14.0, 18.0, 2, "Fitness"),
        band(18.0, 25.0, 3, "Average"),
        band(25.0, OPEN, 4, "Obese"),
    ],
};

/// ACE body fat categories, women
pub static BODY_FAT_FEMALE: BandTable = BandTable {
    metric: "body-fat.female",
    standard: "ACE",
    bands: &[
        band(0.0, 14.0, 0, "Essential fat"),
        band(14.0, 21.0, 1, "Athletes"),
        band(21.0, 25.0, 2, "Fitness"),
        band(25.0, 32.0, 3, "Average"),
        band(32.0, OPEN, 4, "Obese"),
    ],
};

/// Ashwell waist-to-height boundaries (0.4 / 0.5 / 0.6)
pub static WHTR: BandTable = BandTable {
    metric: "whtr",
    standard: "Ashwell 2005",
    bands: &[
        band(0.0, 0.4, 0, "Take care"),
        band(0.4, 0.5, 1, "Healthy"),
        band(0.5, 0.6, 2, "Increased risk"),
        band(0.6, OPEN, 3, "High risk"),
    ],
};

/// WHO waist-to-hip health risk, men
pub static WHR_MALE: BandTable = BandTable {
    metric: "whr.male",
    standard: "WHO 2008",
    bands: &[
        band(0.0, 0.90, 0, "Low risk"),
        band(0.90, 1.0, 1, "Moderate risk"),
        band(1.0, OPEN, 2, "High risk"),
    ],
};

/// WHO waist-to-hip health risk, women
pub static WHR_FEMALE: BandTable = BandTable {
    metric: "whr.female",
    standard: "WHO 2008",
    bands: &[
        band(0.0, 0.80, 0, "Low risk"),
        band(0.80, 0.85, 1, "Moderate risk"),
        band(0.85, OPEN, 2, "High risk"),
    ],
};

// =============================================================================
// CLINICAL
// =============================================================================

/// KDIGO 2012 GFR categories
pub static EGFR: BandTable = BandTable {
    metric: "egfr",
    standard: "KDIGO 2012",
    bands: &[
        band(0.0, 15.0, 0, "G5 Kidney failure"),
        band(15.0, 30.0, 1, "G4 Severely decreased"),
        band(30.0, 45.0, 2, "G3b Moderately to severely decreased"),
        band(45.0, 60.0, 3, "G3a Mildly to moderately decreased"),
        band(60.0, 90.0, 4, "G2 Mildly decreased"),
        band(90.0, OPEN, 5, "G1 Normal or high"),
    ],
};

/// ACC/AHA 2017 systolic categories. Readings are whole mmHg, so "higher
/// than 180" starts at 181.
pub static BP_SYSTOLIC: BandTable = BandTable {
    metric: "blood-pressure.systolic",
    standard: "ACC/AHA 2017",
    bands: &[
        band(0.0, 120.0, 0, "Normal"),
        band(120.0, 130.0, 1, "Elevated"),
        band(130.0, 140.0, 2, "Hypertension stage 1"),
        band(140.0, 181.0, 3, "Hypertension stage 2"),
        band(181.0, OPEN, 4, "Hypertensive crisis"),
    ],
};

/// ACC/AHA 2017 diastolic categories. There is no diastolic "Elevated"
/// band, so levels skip 1 to stay aligned with the systolic table.
pub static BP_DIASTOLIC: BandTable = BandTable {
    metric: "blood-pressure.diastolic",
    standard: "ACC/AHA 2017",
    bands: &[
        band(0.0, 80.0, 0, "Normal"),
        band(80.0, 90.0, 2, "Hypertension stage 1"),
        band(90.0, 121.0, 3, "Hypertension stage 2"),
        band(121.0, OPEN, 4, "Hypertensive crisis"),
    ],
};

// =============================================================================
// CARDIO FITNESS
// Cooper Institute VO2max norms (mL/kg/min) by sex and age group
// =============================================================================

macro_rules! vo2max_table {
    ($name:ident, $metric:literal, [$a:expr, $b:expr, $c:expr, $d:expr, $e:expr]) => {
        pub static $name: BandTable = BandTable {
            metric: $metric,
            standard: "Cooper Institute",
            bands: &[
                band(0.0, $a, 0, "Very poor"),
                band($a, $b, 1, "Poor"),
                band($b, $c, 2, "Fair"),
                band($c, $d, 3, "Good"),
                band($d, $e, 4, "Excellent"),
                band($e, OPEN, 5, "Superior"),
            ],
        };
    };
}

vo2max_table!(VO2MAX_MALE_13_19, "vo2max.male.13-19", [35.0, 38.4, 45.2, 51.0, 56.0]);
vo2max_table!(VO2MAX_MALE_20_29, "vo2max.male.20-29", [33.0, 36.5, 42.5, 46.5, 52.5]);
vo2max_table!(VO2MAX_MALE_30_39, "vo2max.male.30-39", [31.5, 35.5, 41.0, 45.0, 49.5]);
vo2max_table!(VO2MAX_MALE_40_49, "vo2max.male.40-49", [30.2, 33.6, 39.0, 43.8, 48.1]);
vo2max_table!(VO2MAX_MALE_50_59, "vo2max.male.50-59", [26.1, 31.0, 35.8, 41.0, 45.4]);
vo2max_table!(VO2MAX_MALE_60_PLUS, "vo2max.male.60+", [20.5, 26.1, 32.3, 36.5, 44.3]);
vo2max_table!(VO2MAX_FEMALE_13_19, "vo2max.female.13-19", [25.0, 31.0, 35.0, 39.0, 42.0]);
vo2max_table!(VO2MAX_FEMALE_20_29, "vo2max.female.20-29", [23.6, 29.0, 33.0, 37.0, 41.1]);
vo2max_table!(VO2MAX_FEMALE_30_39, "vo2max.female.30-39", [22.8, 27.0, 31.5, 35.7, 40.1]);
vo2max_table!(VO2MAX_FEMALE_40_49, "vo2max.female.40-49", [21.0, 24.5, 29.0, 32.9, 37.0]);
vo2max_table!(VO2MAX_FEMALE_50_59, "vo2max.female.50-59", [20.2, 22.8, 27.0, 31.5, 35.8]);
vo2max_table!(VO2MAX_FEMALE_60_PLUS, "vo2max.female.60+", [17.5, 20.2, 24.5, 30.3, 31.5]);

/// Every registered table
pub static ALL_TABLES: &[&BandTable] = &[
    &BMI,
    &BODY_FAT_MALE,
    &BODY_FAT_FEMALE,
    &WHTR,
    &WHR_MALE,
    &WHR_FEMALE,
    &EGFR,
    &BP_SYSTOLIC,
    &BP_DIASTOLIC,
    &VO2MAX_MALE_13_19,
    &VO2MAX_MALE_20_29,
    &VO2MAX_MALE_30_39,
    &VO2MAX_MALE_40_49,
    &VO2MAX_MALE_50_59,
    &VO2MAX_MALE_60_PLUS,
    &VO2MAX_FEMALE_13_19,
    &VO2MAX_FEMALE_20_29,
    &VO2MAX_FEMALE_30_39,
    &VO2MAX_FEMALE_40_49,
    &VO2MAX_FEMALE_50_59,
    &VO2MAX_FEMALE_60_PLUS,
];
