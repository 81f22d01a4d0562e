use super::*;

#[test]
fn missing_config_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::open(tmp.path());
    let cfg = store.read_config().unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert!(!store.config_path().exists());
}

#[test]
fn token_round_trips_through_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::open(&tmp.path().join("nested"));

    let cfg = store.set_token(Some("abc".to_string())).unwrap();
    assert_eq!(cfg.token.as_deref(), Some("abc"));
    assert_eq!(store.read_config().unwrap().token.as_deref(), Some("abc"));

    store.set_token(None).unwrap();
    let raw = fs::read_to_string(store.config_path()).unwrap();
    assert!(!raw.contains("token"));
}

#[test]
fn write_keeps_other_settings() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::open(tmp.path());
    let cfg = ClientConfig {
        base_url: "http://example.test/api".to_string(),
        page_size: 50,
        ..ClientConfig::default()
    };
    store.write_config(&cfg).unwrap();
    store.set_token(Some("t".to_string())).unwrap();

    let back = store.read_config().unwrap();
    assert_eq!(back.base_url, "http://example.test/api");
    assert_eq!(back.page_size, 50);
}

#[test]
fn corrupt_config_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::open(tmp.path());
    fs::write(store.config_path(), b"{not json").unwrap();
    let err = store.read_config().unwrap_err();
    assert!(format!("{:#}", err).contains("parse"));
}
