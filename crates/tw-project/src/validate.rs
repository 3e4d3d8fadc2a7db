//! Configuration validation logic.

use crate::schema::{CarrierDef, CavityDef, CavityKind, Project, SamplingDef};
use std::collections::HashSet;
use tw_cavity::{CavityPreset, MAX_GRID_SAMPLES};

/// The only configuration format version understood by this crate.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut cavity_ids = HashSet::new();
    for cavity in &project.cavities {
        if cavity.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("cavity '{}' id", cavity.name),
                value: cavity.id.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if !cavity_ids.insert(&cavity.id) {
            return Err(ValidationError::DuplicateId {
                id: cavity.id.clone(),
                context: "cavities".to_string(),
            });
        }
        validate_cavity(cavity)?;
    }

    validate_sampling(&project.sampling)?;
    validate_carrier(&project.carrier)?;

    Ok(())
}

fn validate_cavity(cavity: &CavityDef) -> Result<(), ValidationError> {
    match &cavity.kind {
        CavityKind::Preset { preset } => {
            if preset.parse::<CavityPreset>().is_err() {
                return Err(ValidationError::InvalidValue {
                    field: format!("cavity '{}' preset", cavity.id),
                    value: preset.clone(),
                    reason: "unknown preset".to_string(),
                });
            }
        }
        CavityKind::Custom {
            cell_length_m,
            n_cells,
            series_impedance_ohm_per_m2,
            group_velocity_c,
            frequency_hz,
        } => {
            positive(&cavity.id, "cell_length_m", *cell_length_m)?;
            positive(
                &cavity.id,
                "series_impedance_ohm_per_m2",
                *series_impedance_ohm_per_m2,
            )?;
            positive(&cavity.id, "frequency_hz", *frequency_hz)?;
            if *n_cells == 0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("cavity '{}' n_cells", cavity.id),
                    value: n_cells.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            if !(*group_velocity_c > 0.0 && *group_velocity_c < 1.0) {
                return Err(ValidationError::InvalidValue {
                    field: format!("cavity '{}' group_velocity_c", cavity.id),
                    value: group_velocity_c.to_string(),
                    reason: "must lie strictly between 0 and 1".to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_sampling(sampling: &SamplingDef) -> Result<(), ValidationError> {
    if sampling.samples_per_filling_time < 2 {
        return Err(ValidationError::InvalidValue {
            field: "sampling samples_per_filling_time".to_string(),
            value: sampling.samples_per_filling_time.to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    if !sampling.span_filling_times.is_finite() || sampling.span_filling_times < 1.0 {
        return Err(ValidationError::InvalidValue {
            field: "sampling span_filling_times".to_string(),
            value: sampling.span_filling_times.to_string(),
            reason: "must cover at least one filling time".to_string(),
        });
    }
    let total = f64::from(sampling.samples_per_filling_time) * sampling.span_filling_times;
    if total >= MAX_GRID_SAMPLES as f64 {
        return Err(ValidationError::InvalidValue {
            field: "sampling span_filling_times".to_string(),
            value: sampling.span_filling_times.to_string(),
            reason: format!("grid would exceed {MAX_GRID_SAMPLES} samples"),
        });
    }
    Ok(())
}

fn validate_carrier(carrier: &CarrierDef) -> Result<(), ValidationError> {
    if !carrier.offset_hz.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: "carrier offset_hz".to_string(),
            value: carrier.offset_hz.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn positive(id: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("cavity '{}' {}", id, field),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}
