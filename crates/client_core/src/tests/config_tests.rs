use super::*;

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn settings(api_base_url: Option<&str>, page_host: Option<&str>) -> ClientSettings {
    ClientSettings {
        api_base_url: api_base_url.map(str::to_string),
        page_host: page_host.map(str::to_string),
    }
}

#[test]
fn override_wins_over_loopback_host() {
    let settings = settings(Some("https://api.example.test/"), Some("localhost"));
    assert_eq!(settings.base_url_source(), BaseUrlSource::Override);
    assert_eq!(settings.resolve_base_url(), "https://api.example.test");
}

#[test]
fn loopback_host_selects_development_service() {
    for host in ["localhost", "127.0.0.1", "LOCALHOST", "::1"] {
        let settings = settings(None, Some(host));
        assert_eq!(settings.base_url_source(), BaseUrlSource::Loopback, "{host}");
        assert_eq!(settings.resolve_base_url(), DEVELOPMENT_BASE_URL);
    }
}

#[test]
fn blank_override_falls_through_to_host_detection() {
    let settings = settings(Some("   "), Some("127.0.0.1"));
    assert_eq!(settings.resolve_base_url(), DEVELOPMENT_BASE_URL);
}

#[test]
fn public_host_uses_production() {
    let settings = settings(None, Some("wayfinder.example.org"));
    assert_eq!(settings.base_url_source(), BaseUrlSource::Production);
    assert_eq!(settings.resolve_base_url(), PRODUCTION_BASE_URL);
    assert_eq!(ClientSettings::default().resolve_base_url(), PRODUCTION_BASE_URL);
}

#[test]
fn env_overrides_file_values() {
    let mut settings = settings(Some("http://from-file"), None);
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__API_BASE_URL", "http://from-env"),
        ("WAYFINDER_PAGE_HOST", "localhost"),
    ]);
    apply_env(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.api_base_url.as_deref(), Some("http://from-env"));
    assert_eq!(settings.page_host.as_deref(), Some("localhost"));
}

#[test]
fn cli_flags_only_replace_present_values() {
    let settings = settings(Some("http://from-file"), Some("localhost"))
        .with_override(None)
        .with_page_host(Some("example.org".into()));
    assert_eq!(settings.api_base_url.as_deref(), Some("http://from-file"));
    assert_eq!(settings.page_host.as_deref(), Some("example.org"));
}

#[test]
fn reads_settings_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("wayfinder_settings_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join(SETTINGS_FILE);
    fs::write(
        &path,
        "api_base_url = \"http://127.0.0.1:9000\"\npage_host = \"localhost\"\n",
    )
    .expect("write settings");

    let loaded = load_settings_file(&path);
    assert_eq!(loaded.api_base_url.as_deref(), Some("http://127.0.0.1:9000"));
    assert_eq!(loaded.page_host.as_deref(), Some("localhost"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_settings_file_yields_defaults() {
    let loaded = load_settings_file(Path::new("/nonexistent/wayfinder.toml"));
    assert_eq!(loaded, ClientSettings::default());
}
