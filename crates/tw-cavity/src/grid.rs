//! Uniform time grids.

use crate::common::{MAX_GRID_SAMPLES, check_finite, check_positive, grid_spacing};
use crate::error::{CavityError, CavityResult};
use tw_core::numeric::Real;

/// Ascending, uniformly spaced time samples [s].
///
/// Window functions and the cavity model accept any `&[Real]`; this type is
/// a convenience for building grids that are guaranteed to satisfy their
/// preconditions.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Vec<Real>,
}

impl TimeGrid {
    /// `len` samples `start + i * dt`.
    pub fn uniform(start: Real, dt: Real, len: usize) -> CavityResult<Self> {
        check_finite(start, "grid start")?;
        check_positive(dt, "grid spacing")?;
        if len < 2 {
            return Err(CavityError::InvalidGrid {
                what: "time grid needs at least two samples",
            });
        }
        if len > MAX_GRID_SAMPLES {
            return Err(CavityError::InvalidGrid {
                what: "time grid has too many samples",
            });
        }
        let samples = (0..len).map(|i| start + i as Real * dt).collect();
        Ok(Self { samples })
    }

    /// Samples from `start` up to and including `end` (to within half a step).
    pub fn spanning(start: Real, end: Real, dt: Real) -> CavityResult<Self> {
        check_finite(end, "grid end")?;
        check_positive(dt, "grid spacing")?;
        if end <= start {
            return Err(CavityError::InvalidGrid {
                what: "grid end must lie after grid start",
            });
        }
        let steps = ((end - start) / dt + 0.5).floor();
        Self::uniform(start, dt, sample_count(steps)?)
    }

    /// Wrap caller-supplied samples after checking length and ordering.
    pub fn from_samples(samples: Vec<Real>) -> CavityResult<Self> {
        grid_spacing(&samples)?;
        if samples.iter().any(|t| !t.is_finite()) {
            return Err(CavityError::NonPhysical {
                what: "time grid sample",
            });
        }
        if samples.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CavityError::InvalidGrid {
                what: "time grid must be strictly ascending",
            });
        }
        Ok(Self { samples })
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<Real> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Spacing of the first two samples.
    pub fn dt(&self) -> Real {
        self.samples[1] - self.samples[0]
    }
}

/// Sample count for a grid of `steps` intervals, bounded by `MAX_GRID_SAMPLES`.
pub fn sample_count(steps: Real) -> CavityResult<usize> {
    if !steps.is_finite() || steps < 0.0 || steps >= MAX_GRID_SAMPLES as Real {
        return Err(CavityError::InvalidGrid {
            what: "time grid has too many samples",
        });
    }
    Ok(steps as usize + 1)
}

impl AsRef<[Real]> for TimeGrid {
    fn as_ref(&self) -> &[Real] {
        &self.samples
    }
}
