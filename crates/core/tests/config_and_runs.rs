//! Config layering, animation and sweep runs against real files
use std::fs;
use std::path::Path;
use vortex_sim_core::core_types::Meters;
use vortex_sim_core::simulation::read_config;
use vortex_sim_core::{
    load_parameters, render_animation, ConfigError, ConfigLoadWarning, FourierLayerSynthesizer,
    FrameSchedule, ParameterKey, ParameterOverrides, ParameterSet, ParameterSweep, Seconds,
    ValidationError, VortexStrategy,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write_config(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_no_config_gives_defaults() {
    let (params, warning) = load_parameters(None, &ParameterOverrides::default()).unwrap();
    assert_eq!(params, ParameterSet::DEFAULT);
    assert!(warning.is_none());
}

#[test]
fn test_json_config_overrides_defaults() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "vortex.json",
        r#"{"gamma": 20.0, "m_mode": 2, "r_max": 8, "theme": "dark"}"#,
    );

    let (params, warning) = load_parameters(Some(&path), &ParameterOverrides::default()).unwrap();
    assert!(warning.is_none());
    assert_eq!(params.physical().circulation, 20.0);
    assert_eq!(params.wave().mode_number, 2);
    assert_eq!(params.discretization().r_max, Meters::new(8.0));
    // Untouched keys keep their defaults
    assert_eq!(params.wave().harmonics, 6);
    assert_eq!(params.animation().fps, 20);

    let loaded = read_config(&path);
    assert_eq!(loaded.unrecognized, vec!["theme"]);
}

#[test]
fn test_yaml_config_and_cli_precedence() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "vortex.yml",
        "k_wave: 1.5\nn_layers: 3\nsave_frames: false\n",
    );

    let mut cli = ParameterOverrides::default();
    cli.apply_assignment("n_layers=5").unwrap();
    cli.set(ParameterKey::Duration, "0.5").unwrap();

    let (params, warning) = load_parameters(Some(&path), &cli).unwrap();
    assert!(warning.is_none());
    assert_eq!(params.wave().wavenumber, 1.5);
    assert_eq!(params.wave().layers, 5);
    assert_eq!(params.animation().duration, Seconds::new(0.5));
    assert!(!params.animation().save_frames);
}

#[test]
fn test_missing_config_falls_back() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let (params, warning) = load_parameters(Some(&path), &ParameterOverrides::default()).unwrap();
    assert_eq!(params, ParameterSet::DEFAULT);
    assert_eq!(warning, Some(ConfigLoadWarning::NotFound(path)));
}

#[test]
fn test_malformed_config_falls_back() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "broken.json", "{\"gamma\": 3.0,");

    let cli = ParameterOverrides {
        m_mode: Some(6),
        ..ParameterOverrides::default()
    };
    let (params, warning) = load_parameters(Some(&path), &cli).unwrap();
    assert!(matches!(warning, Some(ConfigLoadWarning::Malformed { .. })));
    // Overrides still apply on top of the fallback defaults
    assert_eq!(params.physical().circulation, 10.0);
    assert_eq!(params.wave().mode_number, 6);
}

#[test]
fn test_unreadable_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file
    let (params, warning) =
        load_parameters(Some(dir.path()), &ParameterOverrides::default()).unwrap();
    assert_eq!(params, ParameterSet::DEFAULT);
    assert!(matches!(warning, Some(ConfigLoadWarning::Unreadable { .. })));
}

#[test]
fn test_invalid_values_still_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "bad.yaml", "rho: 0.0\n");
    assert_eq!(
        load_parameters(Some(&path), &ParameterOverrides::default()),
        Err(ValidationError::NonPositiveDensity(0.0))
    );

    let path = write_config(dir.path(), "inner.json", r#"{"r_max": 0.5}"#);
    assert!(matches!(
        load_parameters(Some(&path), &ParameterOverrides::default()),
        Err(ValidationError::RadialExtentTooSmall(_))
    ));
}

#[test]
fn test_cli_assignment_errors() {
    let mut overrides = ParameterOverrides::default();
    assert_eq!(
        overrides.apply_assignment("colormap=viridis"),
        Err(ConfigError::UnknownKey("colormap".to_string()))
    );
    assert!(matches!(
        overrides.apply_assignment("m_mode=four"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(overrides, ParameterOverrides::default());
}

#[test]
fn test_animation_from_loaded_parameters() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "anim.json",
        r#"{"fps": 6, "duration": 0.5, "n_r": 4, "n_theta": 6, "n_layers": 2}"#,
    );
    let (params, _) = load_parameters(Some(&path), &ParameterOverrides::default()).unwrap();

    let schedule = FrameSchedule::from_parameters(&params);
    assert_eq!(schedule.len(), 3);
    assert_eq!(
        schedule.times(),
        &[Seconds::new(0.0), Seconds::new(0.25), Seconds::new(0.5)]
    );

    let synthesizer = FourierLayerSynthesizer::new(VortexStrategy);
    let frames = render_animation(&synthesizer, &params, &schedule);
    let indices: Vec<usize> = frames.iter().map(|frame| frame.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    for frame in &frames {
        assert_eq!(frame.surface, synthesizer.synthesize(&params, frame.time));
    }
}

#[test]
fn test_sweep_over_modes() {
    init_tracing();
    let base = ParameterSet::from_overrides(&ParameterOverrides {
        n_r: Some(4),
        n_theta: Some(6),
        n_layers: Some(2),
        ..ParameterOverrides::default()
    })
    .unwrap();
    let sweep = ParameterSweep {
        modes: vec![0, 1, 4],
        wavenumbers: vec![0.5],
        times: vec![0.0, 0.5],
    };
    let results = sweep
        .run(&FourierLayerSynthesizer::new(VortexStrategy), &base)
        .unwrap();
    assert_eq!(results.len(), sweep.len());

    let modes: Vec<u32> = results.iter().map(|r| r.mode).collect();
    assert_eq!(modes, vec![0, 0, 1, 1, 4, 4]);
    // m=0 has neither term of the dispersion relation
    assert_eq!(*results[0].frequency, 0.0);
    for result in &results {
        let (lo, hi) = result.z_range;
        assert!(lo <= hi);
    }
}
