//! # Cardiorespiratory Formulas
//!
//! Maximum heart rate, training zones and VO2max field-test estimators.
//!
//! ## References
//!
//! - Fox SM, Naughton JP, Haskell WL (1971), Ann Clin Res 3:404-432
//! - Tanaka H, Monahan KD, Seals DR (2001), JACC 37(1):153-156
//! - Gellish RL et al. (2007), Med Sci Sports Exerc 39(5):822-829
//! - Karvonen MJ et al. (1957), Ann Med Exp Biol Fenn 35(3):307-315
//! - Uth N, Sørensen H et al. (2004), Eur J Appl Physiol 91(1):111-115
//! - Cooper KH (1968), JAMA 203(3):201-204
//! - Kline GM et al. (1987), Med Sci Sports Exerc 19(3):253-259 (Rockport)

use crate::input::Sex;

/// Fox: `HRmax = 220 - age`
#[inline]
pub fn max_hr_fox(age: f64) -> f64 {
    220.0 - age
}

/// Tanaka: `HRmax = 208 - 0.7·age`
#[inline]
pub fn max_hr_tanaka(age: f64) -> f64 {
    208.0 - 0.7 * age
}

/// Gellish: `HRmax = 207 - 0.7·age`
#[inline]
pub fn max_hr_gellish(age: f64) -> f64 {
    207.0 - 0.7 * age
}

/// Karvonen target heart rate at a fraction of heart-rate reserve
///
/// ```text
/// THR = HRrest + intensity · (HRmax - HRrest)
/// ```
#[inline]
pub fn karvonen(max_hr: f64, resting_hr: f64, intensity: f64) -> f64 {
    resting_hr + intensity * (max_hr - resting_hr)
}

/// Uth–Sørensen heart-rate ratio: `VO2max = 15.3 · HRmax / HRrest`
#[inline]
pub fn vo2max_uth(max_hr: f64, resting_hr: f64) -> f64 {
    15.3 * max_hr / resting_hr
}

/// Cooper 12-minute run: `VO2max = (d_m - 504.9) / 44.73`
#[inline]
pub fn vo2max_cooper(distance_m: f64) -> f64 {
    (distance_m - 504.9) / 44.73
}

/// Rockport one-mile walk test.
///
/// ```text
/// VO2max = 132.853 - 0.0769·w_lb - 0.3877·age + 6.315·s - 3.2649·t_min - 0.1565·HR
/// ```
///
/// `s` = 1 for male, 0 for female. Weight is in **pounds**.
pub fn vo2max_rockport(sex: Sex, age: f64, weight_lb: f64, time_min: f64, heart_rate: f64) -> f64 {
    let s = match sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
    };
    132.853 - 0.0769 * weight_lb - 0.3877 * age + 6.315 * s - 3.2649 * time_min - 0.1565 * heart_rate
}
