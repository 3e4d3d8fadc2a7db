use std::path::PathBuf;
use tw_cavity::CavityError;
use tw_project::{ProjectError, build_cavity, build_grid, compute_response, find_cavity};

fn demo_path() -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("demos/sps_200mhz.yaml")
}

#[test]
fn demo_config_loads() {
    let project = tw_project::load_yaml(&demo_path()).unwrap();
    assert_eq!(project.cavities.len(), 3);
}

#[test]
fn preset_and_custom_geometry_agree() {
    let project = tw_project::load_yaml(&demo_path()).unwrap();
    let preset = build_cavity(find_cavity(&project, "twc4").unwrap()).unwrap();
    let custom = build_cavity(find_cavity(&project, "twc4-custom").unwrap()).unwrap();
    let rel = (preset.filling_time().value - custom.filling_time().value).abs()
        / preset.filling_time().value;
    assert!(rel < 1e-12);
}

#[test]
fn grid_spans_configured_filling_times() {
    let project = tw_project::load_yaml(&demo_path()).unwrap();
    let cavity = build_cavity(find_cavity(&project, "twc5").unwrap()).unwrap();
    let grid = build_grid(&project.sampling, &cavity).unwrap();
    assert_eq!(grid.len(), 201);
    let tau = cavity.filling_time().value;
    assert!((grid.as_slice()[200] - 2.0 * tau).abs() < 1e-9 * tau);
}

#[test]
fn demo_response_on_resonance() {
    let project = tw_project::load_yaml(&demo_path()).unwrap();
    for cavity in &project.cavities {
        let resp = compute_response(&project, &cavity.id).unwrap();
        assert_eq!(resp.len(), 201);
        assert!(!resp.is_detuned());
        assert!(resp.peak_beam() > 0.0);
    }
}

#[test]
fn detuned_carrier_from_config() {
    let mut project = tw_project::load_yaml(&demo_path()).unwrap();
    project.carrier.offset_hz = 10e3;
    let resp = compute_response(&project, "twc4").unwrap();
    assert!(resp.is_detuned());

    // 30 MHz away from 200 MHz is outside the supported window
    project.carrier.offset_hz = 30e6;
    let err = compute_response(&project, "twc4").unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Cavity(CavityError::CarrierOutOfRange { .. })
    ));
}

#[test]
fn unvalidated_huge_span_is_an_error() {
    let mut project = tw_project::load_yaml(&demo_path()).unwrap();
    project.sampling.span_filling_times = 1e300;
    let cavity = build_cavity(find_cavity(&project, "twc4").unwrap()).unwrap();
    assert!(matches!(
        build_grid(&project.sampling, &cavity),
        Err(ProjectError::Cavity(CavityError::InvalidGrid { .. }))
    ));
    assert!(compute_response(&project, "twc4").is_err());
}

#[test]
fn unknown_cavity_id() {
    let project = tw_project::load_yaml(&demo_path()).unwrap();
    assert!(matches!(
        compute_response(&project, "nope"),
        Err(ProjectError::Validation(_))
    ));
}
