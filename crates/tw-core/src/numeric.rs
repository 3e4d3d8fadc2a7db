use crate::{TwError, TwResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
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

pub fn ensure_finite(v: Real, what: &'static str) -> TwResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TwError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> TwResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TwError::OutOfRange { what, value: v })
    }
}

/// Signed offset of `value` from `reference`, in units of `reference`.
#[inline]
pub fn relative_offset(value: Real, reference: Real) -> Real {
    (value - reference) / reference
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
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(2.5, "x").unwrap(), 2.5);
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(TwError::OutOfRange { .. })
        ));
        assert!(ensure_positive(-1.0, "x").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "x"),
            Err(TwError::NonFinite { .. })
        ));
    }

    #[test]
    fn relative_offset_sign() {
        assert!((relative_offset(110.0, 100.0) - 0.1).abs() < 1e-15);
        assert!((relative_offset(90.0, 100.0) + 0.1).abs() < 1e-15);
        assert_eq!(relative_offset(100.0, 100.0), 0.0);
    }
}
