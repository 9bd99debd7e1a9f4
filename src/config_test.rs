use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = AppConfig::from_lookup(lookup_from(&[])).expect("config");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.session_user_id, "user1");
    assert_eq!(config.notification_ttl_ms, 4000);
}

#[test]
fn reads_and_trims_session_user() {
    let config = AppConfig::from_lookup(lookup_from(&[("STUDIO_SESSION_USER", " user3 ")])).expect("config");
    assert_eq!(config.session_user_id, "user3");
}

#[test]
fn blank_session_user_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("STUDIO_SESSION_USER", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { key: "STUDIO_SESSION_USER" });
}

#[test]
fn reads_notification_ttl() {
    let config = AppConfig::from_lookup(lookup_from(&[("STUDIO_NOTIFICATION_TTL_MS", "2500")])).expect("config");
    assert_eq!(config.notification_ttl_ms, 2500);
}

#[test]
fn invalid_notification_ttl_is_rejected() {
    for raw in ["0", "-5", "soon", ""] {
        let err = AppConfig::from_lookup(lookup_from(&[("STUDIO_NOTIFICATION_TTL_MS", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid { key: "STUDIO_NOTIFICATION_TTL_MS", value: raw.to_owned() });
    }
}

#[test]
fn config_error_messages_name_the_key() {
    let err = ConfigError::Invalid { key: "STUDIO_NOTIFICATION_TTL_MS", value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid STUDIO_NOTIFICATION_TTL_MS: x");
}
