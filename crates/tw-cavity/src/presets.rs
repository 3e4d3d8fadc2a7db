//! Named cavity configurations.

use crate::cavity::TravellingWaveCavity;
use crate::error::CavityResult;
use core::fmt;
use core::str::FromStr;
use tw_core::units::{angular_from_hz, m, rad_per_s};

/// SPS 200 MHz travelling wave cavity cell length [m].
pub const SPS_TWC_CELL_LENGTH_M: f64 = 0.374;
/// SPS 200 MHz travelling wave cavity series impedance [Ohm/m^2].
pub const SPS_TWC_SERIES_IMPEDANCE: f64 = 2.71e4;
/// SPS 200 MHz travelling wave cavity group velocity [c].
pub const SPS_TWC_GROUP_VELOCITY: f64 = 0.0946;
/// SPS 200 MHz travelling wave cavity central frequency [Hz].
pub const SPS_TWC_FREQUENCY_HZ: f64 = 200.222e6;

/// Built-in cavity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CavityPreset {
    /// SPS 4-section 200 MHz travelling wave cavity (43 cells).
    Sps4Section200MHz,
    /// SPS 5-section 200 MHz travelling wave cavity (54 cells).
    Sps5Section200MHz,
}

impl CavityPreset {
    pub const ALL: [CavityPreset; 2] = [Self::Sps4Section200MHz, Self::Sps5Section200MHz];

    /// Stable identifier used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sps4Section200MHz => "sps-4-section-200mhz",
            Self::Sps5Section200MHz => "sps-5-section-200mhz",
        }
    }

    pub fn n_cells(self) -> u32 {
        match self {
            Self::Sps4Section200MHz => 43,
            Self::Sps5Section200MHz => 54,
        }
    }

    pub fn build(self) -> CavityResult<TravellingWaveCavity> {
        TravellingWaveCavity::new(
            m(SPS_TWC_CELL_LENGTH_M),
            self.n_cells(),
            SPS_TWC_SERIES_IMPEDANCE,
            SPS_TWC_GROUP_VELOCITY,
            rad_per_s(angular_from_hz(SPS_TWC_FREQUENCY_HZ)),
        )
    }
}

impl fmt::Display for CavityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cavity preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for CavityPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// SPS 4-section 200 MHz travelling wave cavity.
pub fn sps_4_section_200mhz() -> CavityResult<TravellingWaveCavity> {
    CavityPreset::Sps4Section200MHz.build()
}

/// SPS 5-section 200 MHz travelling wave cavity.
pub fn sps_5_section_200mhz() -> CavityResult<TravellingWaveCavity> {
    CavityPreset::Sps5Section200MHz.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_build() {
        for preset in CavityPreset::ALL {
            let cav = preset.build().unwrap();
            assert_eq!(cav.n_cells(), preset.n_cells());
            assert_eq!(cav.cell_length().value, SPS_TWC_CELL_LENGTH_M);
        }
    }

    #[test]
    fn five_section_fills_longer() {
        let four = sps_4_section_200mhz().unwrap();
        let five = sps_5_section_200mhz().unwrap();
        let ratio = five.filling_time().value / four.filling_time().value;
        assert!((ratio - 54.0 / 43.0).abs() < 1e-12);
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in CavityPreset::ALL {
            assert_eq!(preset.to_string().parse::<CavityPreset>().unwrap(), preset);
        }
        assert_eq!(
            "SPS-4-SECTION-200MHZ".parse::<CavityPreset>().unwrap(),
            CavityPreset::Sps4Section200MHz
        );
        assert!("lhc-400mhz".parse::<CavityPreset>().is_err());
    }
}
