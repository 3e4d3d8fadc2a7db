//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub cavities: Vec<CavityDef>,
    #[serde(default)]
    pub sampling: SamplingDef,
    #[serde(default)]
    pub carrier: CarrierDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CavityDef {
    pub id: String,
    pub name: String,
    pub kind: CavityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CavityKind {
    /// One of the built-in cavity types, by name.
    Preset { preset: String },
    Custom {
        cell_length_m: f64,
        n_cells: u32,
        series_impedance_ohm_per_m2: f64,
        /// Group velocity as a fraction of c
        group_velocity_c: f64,
        /// Central frequency (not angular)
        frequency_hz: f64,
    },
}

/// Time grid used for impulse responses, expressed relative to the filling time
/// so that the window edges fall on samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SamplingDef {
    #[serde(default = "default_samples_per_filling_time")]
    pub samples_per_filling_time: u32,
    #[serde(default = "default_span_filling_times")]
    pub span_filling_times: f64,
}

impl Default for SamplingDef {
    fn default() -> Self {
        Self {
            samples_per_filling_time: default_samples_per_filling_time(),
            span_filling_times: default_span_filling_times(),
        }
    }
}

fn default_samples_per_filling_time() -> u32 {
    100
}

fn default_span_filling_times() -> f64 {
    2.0
}

/// Demodulation carrier, as an offset from each cavity's central frequency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CarrierDef {
    #[serde(default)]
    pub offset_hz: f64,
}
