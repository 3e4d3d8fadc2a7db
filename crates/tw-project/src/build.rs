//! Conversion from configuration to cavity models and time grids.

use crate::ProjectResult;
use crate::schema::{CarrierDef, CavityDef, CavityKind, Project, SamplingDef};
use crate::validate::ValidationError;
use tracing::debug;
use tw_cavity::{CavityPreset, ImpulseResponse, TimeGrid, TravellingWaveCavity, sample_count};
use tw_core::units::{angular_from_hz, m, rad_per_s};

pub fn build_cavity(def: &CavityDef) -> ProjectResult<TravellingWaveCavity> {
    let cavity = match &def.kind {
        CavityKind::Preset { preset } => {
            let preset: CavityPreset = preset.parse().map_err(|_| ValidationError::InvalidValue {
                field: format!("cavity '{}' preset", def.id),
                value: preset.clone(),
                reason: "unknown preset".to_string(),
            })?;
            preset.build()?
        }
        CavityKind::Custom {
            cell_length_m,
            n_cells,
            series_impedance_ohm_per_m2,
            group_velocity_c,
            frequency_hz,
        } => TravellingWaveCavity::new(
            m(*cell_length_m),
            *n_cells,
            *series_impedance_ohm_per_m2,
            *group_velocity_c,
            rad_per_s(angular_from_hz(*frequency_hz)),
        )?,
    };
    Ok(cavity)
}

/// Grid starting at zero with the filling time split into
/// `samples_per_filling_time` steps, so both window edges land on samples.
pub fn build_grid(sampling: &SamplingDef, cavity: &TravellingWaveCavity) -> ProjectResult<TimeGrid> {
    let per_tau = f64::from(sampling.samples_per_filling_time);
    let dt = cavity.filling_time().value / per_tau;
    let len = sample_count((sampling.span_filling_times * per_tau).round())?;
    Ok(TimeGrid::uniform(0.0, dt, len)?)
}

/// Carrier angular frequency [rad/s] for `cavity`.
pub fn carrier_omega(carrier: &CarrierDef, cavity: &TravellingWaveCavity) -> f64 {
    cavity.omega_r().value + angular_from_hz(carrier.offset_hz)
}

pub fn find_cavity<'a>(project: &'a Project, cavity_id: &str) -> ProjectResult<&'a CavityDef> {
    project
        .cavities
        .iter()
        .find(|c| c.id == cavity_id)
        .ok_or_else(|| {
            ValidationError::MissingReference {
                id: cavity_id.to_string(),
                context: "cavities".to_string(),
            }
            .into()
        })
}

/// Impulse response of one configured cavity on the configured grid and carrier.
pub fn compute_response(project: &Project, cavity_id: &str) -> ProjectResult<ImpulseResponse> {
    let def = find_cavity(project, cavity_id)?;
    let cavity = build_cavity(def)?;
    let grid = build_grid(&project.sampling, &cavity)?;
    let omega_c = carrier_omega(&project.carrier, &cavity);
    debug!(cavity = %def.id, samples = grid.len(), omega_c, "computing impulse response");
    Ok(cavity.impulse_response(omega_c, grid.as_slice())?)
}
