use super::*;

fn message(config: &CasementConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&CasementConfig::default()).is_ok());
}

#[test]
fn window_size_bounds() {
    let mut config = CasementConfig::default();
    config.window.width = Some(100);
    config.window.height = Some(16384);
    assert!(validate(&config).is_ok());

    config.window.width = Some(99);
    assert!(message(&config).contains("window.width = 99"));

    config.window.width = Some(800);
    config.window.height = Some(20000);
    assert!(message(&config).contains("window.height = 20000"));
}

#[test]
fn unset_window_size_is_valid() {
    let mut config = CasementConfig::default();
    config.window.width = None;
    config.window.height = None;
    assert!(validate(&config).is_ok());
}

#[test]
fn max_listeners_must_be_positive() {
    let mut config = CasementConfig::default();
    config.events.max_listeners = 0;
    assert!(message(&config).contains("events.max_listeners = 0"));
}

#[test]
fn empty_namespace_rejected() {
    let mut config = CasementConfig::default();
    config.store.namespace = "  ".into();
    assert!(message(&config).contains("store.namespace must not be empty"));
}

#[test]
fn namespace_with_separator_rejected() {
    let mut config = CasementConfig::default();
    config.store.namespace = "../etc".into();
    assert!(message(&config).contains("path separators"));

    config.store.namespace = "a\\b".into();
    assert!(message(&config).contains("path separators"));
}

#[test]
fn errors_are_collected() {
    let mut config = CasementConfig::default();
    config.window.width = Some(1);
    config.events.max_listeners = 5000;
    config.store.namespace = String::new();

    let msg = message(&config);
    assert!(msg.contains("window.width"));
    assert!(msg.contains("events.max_listeners"));
    assert!(msg.contains("store.namespace"));
    assert_eq!(msg.matches("; ").count(), 2);
}
