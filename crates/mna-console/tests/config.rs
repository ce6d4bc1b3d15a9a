use mna_console::commands::{execute, parse};
use mna_console::config::{ConsoleConfig, load_config_from, save_config_to};
use mna_console::state::ConsoleState;
use mna_export::select::SinkPreference;

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "output_dir": "/tmp/mna" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.sink, SinkPreference::Auto);
    assert_eq!(config.output_dir.as_deref(), Some(std::path::Path::new("/tmp/mna")));
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ConsoleConfig {
        config_version: 0,
        sink: SinkPreference::Directory,
        output_dir: Some(dir.path().to_path_buf()),
    };

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.sink, SinkPreference::Directory);
    assert_eq!(loaded.output_dir, config.output_dir);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn sink_command_persists_preference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut state = ConsoleState::new(ConsoleConfig::default(), Some(path.clone()));

    execute(&mut state, parse("sink directory").unwrap()).unwrap();
    execute(&mut state, parse("output-dir /tmp/assessments").unwrap()).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.sink, SinkPreference::Directory);
    assert_eq!(
        loaded.output_dir.as_deref(),
        Some(std::path::Path::new("/tmp/assessments"))
    );
}
