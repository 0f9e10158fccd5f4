use crate::ArError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ArError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ArError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`; physical magnitudes (flow, pressure, length) must pass
/// this at the construction boundary.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, ArError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(ArError::InvalidArg { what });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects() {
        assert!(ensure_non_negative(0.0, "zero").is_ok());
        assert!(ensure_non_negative(42.5, "positive").is_ok());
        assert!(ensure_non_negative(-1.0, "negative").is_err());
        assert!(ensure_non_negative(Real::INFINITY, "inf").is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nearly_equal_is_reflexive(v in -1e12_f64..1e12) {
                prop_assert!(nearly_equal(v, v, Tolerances::default()));
            }

            #[test]
            fn non_negative_accepts_exactly_the_non_negatives(v in -1e12_f64..1e12) {
                prop_assert_eq!(ensure_non_negative(v, "v").is_ok(), v >= 0.0);
            }
        }
    }
}
