//! Travelling wave cavity impulse responses.
//!
//! This crate provides:
//! - Edge-aligned window functions (`rectangle`, `triangle`)
//! - The `TravellingWaveCavity` model and its I,Q impulse responses
//! - Built-in cavity presets
//! - Uniform time grid helpers

pub mod cavity;
pub mod common;
pub mod error;
pub mod grid;
pub mod presets;
pub mod response;
pub mod traits;
pub mod window;

pub use cavity::TravellingWaveCavity;
pub use common::MAX_GRID_SAMPLES;
pub use error::{CavityError, CavityResult};
pub use grid::{TimeGrid, sample_count};
pub use presets::{CavityPreset, UnknownPreset, sps_4_section_200mhz, sps_5_section_200mhz};
pub use response::ImpulseResponse;
pub use traits::WakeSource;
pub use window::{rectangle, triangle};
