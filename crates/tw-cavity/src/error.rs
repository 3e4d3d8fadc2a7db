//! Error types for window and cavity operations.

use thiserror::Error;

/// Errors that can occur while building impulse responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CavityError {
    #[error("Invalid group velocity: {value} (must lie in (0, 1))")]
    InvalidGroupVelocity { value: f64 },

    #[error("Grid misalignment: {what}")]
    GridMisalignment { what: &'static str },

    #[error("Carrier frequency too far from cavity resonance (relative offset {relative_offset:.3e})")]
    CarrierOutOfRange { relative_offset: f64 },

    #[error("Invalid time grid: {what}")]
    InvalidGrid { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type CavityResult<T> = Result<T, CavityError>;
