//! Edge-aligned window functions on a discrete time grid.
//!
//! A sample that falls on a window edge (within half a sample spacing) gets
//! half weight, so the discontinuity of the ideal window is represented at
//! sub-sample resolution. Both generators fail when the grid does not contain
//! exactly one such sample for the rising edge.

use crate::common::{check_positive, edge_candidates, grid_spacing};
use crate::error::{CavityError, CavityResult};
use tracing::debug;
use tw_core::numeric::Real;

/// Rectangular window of total duration `tau`, rising at `-tau/2`.
///
/// ```text
/// rect(t/tau) = 1    for t in (-tau/2, tau/2)
///             = 0.5  for t = -tau/2 or t = tau/2
///             = 0    otherwise
/// ```
///
/// If the grid ends before `+tau/2` the pulse stays at 1 up to the last sample.
pub fn rectangle(t: &[Real], tau: Real) -> CavityResult<Vec<Real>> {
    check_positive(tau, "rectangle width")?;
    let dt = grid_spacing(t)?;

    let rising = edge_candidates(t, -0.5 * tau, dt);
    let falling = edge_candidates(t, 0.5 * tau, dt);

    let &[start] = rising.as_slice() else {
        return Err(CavityError::GridMisalignment {
            what: "grid misaligned with window start",
        });
    };
    let end = match falling.as_slice() {
        [] => None,
        [end] if *end > start => Some(*end),
        [_] => {
            return Err(CavityError::GridMisalignment {
                what: "window narrower than grid spacing",
            });
        }
        _ => {
            return Err(CavityError::GridMisalignment {
                what: "grid has ambiguous window end",
            });
        }
    };
    debug!(start, ?end, "rectangle edges");

    let mut y = vec![0.0; t.len()];
    y[start] = 0.5;
    match end {
        Some(end) => {
            y[start + 1..end].fill(1.0);
            y[end] = 0.5;
        }
        None => y[start + 1..].fill(1.0),
    }
    Ok(y)
}

/// One-sided triangular ramp of length `tau`, starting at `t = 0`.
///
/// ```text
/// tri(t/tau) = 1 - t/tau  for t in (0, tau)
///            = 0.5        for t = 0
///            = 0          otherwise
/// ```
pub fn triangle(t: &[Real], tau: Real) -> CavityResult<Vec<Real>> {
    check_positive(tau, "triangle width")?;
    let dt = grid_spacing(t)?;

    let &[start] = edge_candidates(t, 0.0, dt).as_slice() else {
        return Err(CavityError::GridMisalignment {
            what: "grid misaligned with ramp origin",
        });
    };
    debug!(start, "triangle edge");

    let mut y = vec![0.0; t.len()];
    y[start] = 0.5;
    for (yi, ti) in y[start + 1..].iter_mut().zip(&t[start + 1..]) {
        *yi = (1.0 - ti / tau).max(0.0);
    }
    Ok(y)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::grid::TimeGrid;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn triangle_is_bounded_and_monotone(
            n in 3_usize..400,
            k in 1_usize..300,
            dt in 1e-12_f64..1e-6_f64,
        ) {
            let grid = TimeGrid::uniform(0.0, dt, n).unwrap();
            let y = triangle(grid.as_slice(), k as f64 * dt).unwrap();
            prop_assert_eq!(y[0], 0.5);
            prop_assert!(y.iter().all(|&v| (0.0..=1.0).contains(&v)));
            for w in y[1..].windows(2) {
                prop_assert!(w[1] <= w[0]);
            }
        }

        #[test]
        fn rectangle_weights_sum_to_width(
            k in 2_usize..200,
            pad in 0_usize..20,
            dt in 1e-12_f64..1e-6_f64,
        ) {
            let tau = k as f64 * dt;
            let grid = TimeGrid::uniform(-0.5 * tau - pad as f64 * dt, dt, k + 2 * pad + 1).unwrap();
            let y = rectangle(grid.as_slice(), tau).unwrap();
            // trapezoid-like weights: two halves plus k-1 ones
            let sum: f64 = y.iter().sum();
            prop_assert!((sum - k as f64).abs() < 1e-9);
        }
    }
}
