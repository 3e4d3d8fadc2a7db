//! Common utilities for window and cavity calculations.

use crate::error::{CavityError, CavityResult};
use tw_core::numeric::{Real, ensure_finite, ensure_positive};

/// Largest supported |omega_c - omega_r| / omega_r.
pub const MAX_CARRIER_OFFSET: Real = 0.1;

/// Relative detuning below which no I/Q rotation is applied.
pub const DETUNING_EPSILON: Real = 1e-12;

/// Upper bound on the number of samples in a generated grid.
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// Ensure a value is finite, returning CavityError if not.
pub fn check_finite(value: Real, what: &'static str) -> CavityResult<()> {
    ensure_finite(value, what).map_err(|_| CavityError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: Real, what: &'static str) -> CavityResult<()> {
    ensure_positive(value, what).map_err(|_| CavityError::NonPhysical { what })?;
    Ok(())
}

/// Sample spacing `t[1] - t[0]` of a caller-supplied grid.
pub fn grid_spacing(t: &[Real]) -> CavityResult<Real> {
    if t.len() < 2 {
        return Err(CavityError::InvalidGrid {
            what: "time grid needs at least two samples",
        });
    }
    let dt = t[1] - t[0];
    if !dt.is_finite() || dt <= 0.0 {
        return Err(CavityError::InvalidGrid {
            what: "time grid must be strictly ascending",
        });
    }
    Ok(dt)
}

/// Indices of samples lying within half a sample spacing of `edge`.
pub fn edge_candidates(t: &[Real], edge: Real, dt: Real) -> Vec<usize> {
    let half = 0.5 * dt;
    t.iter()
        .enumerate()
        .filter(|(_, ti)| (**ti - edge).abs() < half)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_check_positive() {
        assert!(check_positive(1e-9, "test").is_ok());
        assert!(check_positive(0.0, "test").is_err());
        assert!(check_positive(-2.0, "test").is_err());
    }

    #[test]
    fn test_grid_spacing() {
        assert_eq!(grid_spacing(&[0.0, 0.5, 1.0]).unwrap(), 0.5);
        assert!(matches!(
            grid_spacing(&[0.0]),
            Err(CavityError::InvalidGrid { .. })
        ));
        assert!(grid_spacing(&[1.0, 1.0]).is_err());
        assert!(grid_spacing(&[1.0, 0.0]).is_err());
    }

    #[test]
    fn test_edge_candidates() {
        let t = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(edge_candidates(&t, 1.2, 1.0), vec![1]);
        assert!(edge_candidates(&t, 1.5, 1.0).is_empty());
        assert!(edge_candidates(&t, -2.0, 1.0).is_empty());
    }
}
