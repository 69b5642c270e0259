use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn clear_overrides() {
    for key in ["SEED", "STEP_DELAY_MS", "PAUSE_BETWEEN_DEMOS", "LOGGING_LEVEL"] {
        env::remove_var(format!("{}{}", ENV_PREFIX, key));
    }
}

#[test]
fn test_config_default_values() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.step_delay_ms, 500);
    assert!(cfg.pause_between_demos);
    assert_eq!(cfg.logging.level, LogLevel::Warn);
    assert_eq!(cfg.step_delay(), Duration::from_millis(500));
}

#[test]
#[serial]
fn test_load_existing_file_and_missing_file() {
    clear_overrides();
    let dir = tempdir().expect("create temp dir");
    let mut cfg = DemoConfig::default();
    cfg.seed = Some(7);
    cfg.step_delay_ms = 0;
    cfg.pause_between_demos = false;
    cfg.logging.level = LogLevel::Debug;

    let toml_string = toml::to_string(&cfg).expect("serialize config");
    let config_path = dir.path().join("cfg.toml");
    fs::write(&config_path, toml_string).unwrap();

    let loaded = DemoConfig::load(&config_path).expect("load existing config");
    assert_eq!(loaded, cfg);

    let missing_path = dir.path().join("missing.toml");
    let default_loaded = DemoConfig::load(&missing_path).expect("load missing");
    assert_eq!(default_loaded, DemoConfig::default());
}

#[test]
#[serial]
fn test_load_with_source_reports_fallback() {
    clear_overrides();
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.toml");
    fs::write(&present, "seed = 3\n").unwrap();
    let missing = dir.path().join("absent.toml");

    let (_, source) = DemoConfig::load_with_source(&present).unwrap();
    assert_eq!(source, ConfigSource::File(present));
    let (config, source) = DemoConfig::load_with_source(&missing).unwrap();
    assert_eq!(source, ConfigSource::Defaults(missing));
    assert_eq!(config, DemoConfig::default());
}

#[test]
#[serial]
fn test_unreadable_path_is_not_treated_as_missing() {
    clear_overrides();
    let dir = tempdir().unwrap();
    match DemoConfig::load(dir.path()) {
        Err(err @ ConfigError::Unreadable { .. }) => {
            assert!(err.to_string().contains(&dir.path().display().to_string()))
        }
        other => panic!("expected Unreadable, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    clear_overrides();
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("partial.toml");
    fs::write(&config_path, "seed = 99\n\n[logging]\nlevel = \"info\"\n").unwrap();

    let loaded = DemoConfig::load(&config_path).unwrap();
    assert_eq!(loaded.seed, Some(99));
    assert_eq!(loaded.step_delay_ms, 500);
    assert!(loaded.logging.console);
    assert_eq!(loaded.logging.level, LogLevel::Info);
}

#[test]
#[serial]
fn test_load_invalid_toml_fails() {
    clear_overrides();
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "step_delay_ms = [oops").unwrap();
    assert!(matches!(
        DemoConfig::load(&config_path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
#[serial]
fn test_unknown_keys_are_rejected() {
    clear_overrides();
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("unknown.toml");
    fs::write(&config_path, "waitlist = true\n").unwrap();
    match DemoConfig::load(&config_path) {
        Err(err @ ConfigError::ParseError { .. }) => assert!(err.to_string().contains("unknown.toml")),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_env_overrides_apply_after_file() {
    clear_overrides();
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cfg.toml");
    fs::write(&config_path, "seed = 1\nstep_delay_ms = 250\n").unwrap();

    env::set_var("SIGNUP_DEMO_SEED", "42");
    env::set_var("SIGNUP_DEMO_PAUSE_BETWEEN_DEMOS", "no");
    env::set_var("SIGNUP_DEMO_LOGGING_LEVEL", "trace");
    let loaded = DemoConfig::load(&config_path);
    clear_overrides();

    let loaded = loaded.unwrap();
    assert_eq!(loaded.seed, Some(42));
    assert_eq!(loaded.step_delay_ms, 250);
    assert!(!loaded.pause_between_demos);
    assert_eq!(loaded.logging.level, LogLevel::Trace);
}

#[test]
#[serial]
fn test_invalid_env_override_is_reported() {
    clear_overrides();
    env::set_var("SIGNUP_DEMO_STEP_DELAY_MS", "soon");
    let mut cfg = DemoConfig::default();
    let result = cfg.apply_env_vars();
    clear_overrides();

    match result {
        Err(ConfigError::InvalidValue { field, value, .. }) => {
            assert_eq!(field, "step_delay_ms");
            assert_eq!(value, "soon");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_default_path_names_the_config_file() {
    let path = DemoConfig::default_path();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(DEFAULT_CONFIG_FILE));
}
