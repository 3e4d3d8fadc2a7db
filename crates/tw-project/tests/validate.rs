use tw_project::schema::*;
use tw_project::{ValidationError, validate_project};

fn project_with(kind: CavityKind) -> Project {
    Project {
        version: 1,
        name: "Validation".to_string(),
        cavities: vec![CavityDef {
            id: "c1".to_string(),
            name: "Cavity".to_string(),
            kind,
        }],
        sampling: SamplingDef::default(),
        carrier: CarrierDef::default(),
    }
}

fn custom(group_velocity_c: f64, n_cells: u32) -> CavityKind {
    CavityKind::Custom {
        cell_length_m: 0.374,
        n_cells,
        series_impedance_ohm_per_m2: 2.71e4,
        group_velocity_c,
        frequency_hz: 200.222e6,
    }
}

#[test]
fn valid_custom_cavity() {
    validate_project(&project_with(custom(0.0946, 43))).unwrap();
}

#[test]
fn unknown_preset_rejected() {
    let project = project_with(CavityKind::Preset {
        preset: "lhc-400mhz".to_string(),
    });
    let err = validate_project(&project).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { .. }));
    assert!(err.to_string().contains("unknown preset"));
}

#[test]
fn group_velocity_out_of_range_rejected() {
    for v_g in [0.0, 1.0, 1.2, -0.3] {
        assert!(validate_project(&project_with(custom(v_g, 43))).is_err());
    }
}

#[test]
fn zero_cells_rejected() {
    assert!(validate_project(&project_with(custom(0.0946, 0))).is_err());
}

#[test]
fn duplicate_cavity_ids_rejected() {
    let mut project = project_with(custom(0.0946, 43));
    project.cavities.push(project.cavities[0].clone());
    let err = validate_project(&project).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateId { .. }));
}

#[test]
fn sampling_limits() {
    let mut project = project_with(custom(0.0946, 43));
    project.sampling.samples_per_filling_time = 1;
    assert!(validate_project(&project).is_err());

    let mut project = project_with(custom(0.0946, 43));
    project.sampling.span_filling_times = 0.5;
    assert!(validate_project(&project).is_err());
}

#[test]
fn oversized_grid_rejected() {
    let mut project = project_with(custom(0.0946, 43));
    project.sampling.span_filling_times = 1e300;
    let err = validate_project(&project).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { .. }));
    assert!(err.to_string().contains("samples"));

    let mut project = project_with(custom(0.0946, 43));
    project.sampling.samples_per_filling_time = 100_000;
    project.sampling.span_filling_times = 99.0;
    assert!(validate_project(&project).is_ok());
    project.sampling.span_filling_times = 100.0;
    assert!(validate_project(&project).is_err());
}

#[test]
fn future_version_rejected() {
    let mut project = project_with(custom(0.0946, 43));
    project.version = 99;
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::UnsupportedVersion { version: 99 })
    ));
}

#[test]
fn version_zero_rejected() {
    let mut project = project_with(custom(0.0946, 43));
    project.version = 0;
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::UnsupportedVersion { version: 0 })
    ));
}
