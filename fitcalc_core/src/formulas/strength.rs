//! # One-Repetition Maximum Estimators
//!
//! Estimate the heaviest single lift from a submaximal set of `r` reps at
//! load `w`. All return the estimate in the same unit as `w`.
//!
//! Estimators diverge beyond about 10 reps; the repetition bound in the
//! field table caps input at 30, where Brzycki's denominator is still
//! positive (it reaches zero at 37).

/// Epley (1985): `w · (1 + r/30)`
#[inline]
pub fn epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / 30.0)
}

/// Brzycki (1993): `w · 36 / (37 - r)`
#[inline]
pub fn brzycki(weight: f64, reps: f64) -> f64 {
    weight * 36.0 / (37.0 - reps)
}

/// Lombardi (1989): `w · r^0.10`
#[inline]
pub fn lombardi(weight: f64, reps: f64) -> f64 {
    weight * reps.powf(0.10)
}

/// O'Conner et al. (1989): `w · (1 + 0.025r)`
#[inline]
pub fn oconner(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + 0.025 * reps)
}

/// Lander (1985): `100w / (101.3 - 2.67123r)`
#[inline]
pub fn lander(weight: f64, reps: f64) -> f64 {
    100.0 * weight / (101.3 - 2.67123 * reps)
}

/// Mayhew et al. (1992): `100w / (52.2 + 41.9·e^(-0.055r))`
#[inline]
pub fn mayhew(weight: f64, reps: f64) -> f64 {
    100.0 * weight / (52.2 + 41.9 * (-0.055 * reps).exp())
}

/// Wathan (1994): `100w / (48.8 + 53.8·e^(-0.075r))`
#[inline]
pub fn wathan(weight: f64, reps: f64) -> f64 {
    100.0 * weight / (48.8 + 53.8 * (-0.075 * reps).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley() {
        // 100 * (1 + 5/30) = 116.67
        assert!((epley(100.0, 5.0) - 116.666_666_7).abs() < 1e-6);
    }

    #[test]
    fn test_brzycki() {
        assert_eq!(brzycki(100.0, 5.0), 112.5);
        // A single rep is the lift itself
        assert_eq!(brzycki(100.0, 1.0), 100.0);
    }

    #[test]
    fn test_other_estimators() {
        assert!((lombardi(100.0, 5.0) - 117.46).abs() < 0.01);
        assert!((oconner(100.0, 5.0) - 112.5).abs() < 1e-9);
        assert!((lander(100.0, 5.0) - 113.71).abs() < 0.01);
        assert!((mayhew(100.0, 5.0) - 119.01).abs() < 0.01);
        assert!((wathan(100.0, 5.0) - 116.58).abs() < 0.01);
    }

    #[test]
    fn test_estimates_grow_with_reps() {
        let fns: [fn(f64, f64) -> f64; 7] = [epley, brzycki, lombardi, oconner, lander, mayhew, wathan];
        for f in fns {
            let mut prev = f(100.0, 1.0);
            for r in 2..=30 {
                let next = f(100.0, r as f64);
                assert!(next > prev);
                prev = next;
            }
        }
    }
}
