//! # fitcalc_core - Health & Fitness Calculation Engine
//!
//! `fitcalc_core` is the computational layer behind the Fitcalc calculators:
//! BMI, BMR/TDEE, one-rep max, body fat, VO2max, eGFR, blood pressure and
//! more. Inputs and outputs are JSON-serializable so any front end (web form,
//! CLI, API) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Pure**: compute is deterministic and does no I/O
//! - **Validated at the boundary**: raw form strings become a typed
//!   [`BiometricInput`] before any formula runs
//! - **Rich Errors**: every error names the field or metric it concerns
//! - **Data-driven classification**: band tables are static data tied to
//!   their published standard
//!
//! ## Quick Start
//!
//! ```rust
//! use fitcalc_core::calculators::compute_raw;
//! use fitcalc_core::validation::RawInput;
//!
//! let raw = RawInput::new().with("weight", "80").with("height", "180");
//! let result = compute_raw("bmi", &raw).unwrap();
//!
//! assert_eq!(result.display_value(2), "24.69 kg/m²");
//! assert_eq!(result.label(), Some("Normal weight"));
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Raw field parsing and bounds checking
//! - [`input`] - Validated [`BiometricInput`]
//! - [`formulas`] - Closed-form equations and their references
//! - [`calculators`] - Per-calculator dispatch over formula variants
//! - [`classification`] - Band tables and lookup
//! - [`result`] - Result assembly and display formatting
//! - [`catalog`] - Static calculator metadata
//! - [`settings`] - User configuration
//! - [`store`] - Result history with expiry
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod catalog;
pub mod classification;
pub mod errors;
pub mod formulas;
pub mod input;
pub mod result;
pub mod settings;
pub mod store;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculators::{compute, compute_raw, Calculator, CalculatorKind};
pub use classification::{classify, ClassificationBand};
pub use errors::{CalcError, CalcResult};
pub use input::{ActivityLevel, BiometricInput, Sex};
pub use result::{assemble, CalculatorResult, Metric};
pub use settings::Settings;
pub use store::{JsonFileStore, MemoryStore, ResultStore};
pub use validation::{validate, RawInput};
