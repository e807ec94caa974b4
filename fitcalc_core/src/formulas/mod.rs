//! # Health & Fitness Formulas
//!
//! Every closed-form equation used by the calculators lives here, as plain
//! `f64` functions with no validation and no rounding. Keeping them in one
//! place makes each one easy to check against its published source.
//!
//! ## Modules
//!
//! - [`anthropometry`] - BMI, ABSI, BRI, WHtR, WHR, body fat, ideal weight, lean mass
//! - [`energy`] - BMR estimators, TDEE, macronutrient split
//! - [`strength`] - one-repetition maximum estimators
//! - [`cardio`] - maximum heart rate, Karvonen zones, VO2max field tests
//! - [`renal`] - eGFR and creatinine clearance
//! - [`registry`] - formula metadata and reference generation
//!
//! ## Units
//!
//! Unless a parameter name says otherwise: mass in kg, length in cm,
//! age in years, creatinine in mg/dL, heart rate in bpm.

pub mod anthropometry;
pub mod cardio;
pub mod energy;
pub mod registry;
pub mod renal;
pub mod strength;

pub use registry::{
    generate_formulas_markdown, Formula, FormulaCategory, FormulaMetadata, Reference, Variable,
    ALL_FORMULAS,
};
