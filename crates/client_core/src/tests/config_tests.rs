use super::*;

use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_settings_file(label: &str, contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("landing_settings_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("create dir");
    let path = dir.join(SETTINGS_FILE);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/landing.toml"), no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(settings.language, Language::Indonesian);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "file",
        "api_base_url = \"https://prompt.example.com/\"\nlanguage = \"en\"\n",
    );

    let settings = load_settings_from(&path, no_env);

    assert_eq!(settings.api_base_url, "https://prompt.example.com");
    assert_eq!(settings.language, Language::English);
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_prefixed_env_wins() {
    let path = temp_settings_file("env", "api_base_url = \"https://file.example.com\"\n");

    let settings = load_settings_from(&path, |name| match name {
        "API_BASE_URL" => Some("https://plain.example.com".to_string()),
        "APP__API_BASE_URL" => Some("https://prefixed.example.com".to_string()),
        "LANDING_LANGUAGE" => Some("english".to_string()),
        _ => None,
    });

    assert_eq!(settings.api_base_url, "https://prefixed.example.com");
    assert_eq!(settings.language, Language::English);
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn invalid_values_are_ignored() {
    let settings = load_settings_from(Path::new("/nonexistent/landing.toml"), |name| {
        match name {
            "API_BASE_URL" => Some("ftp://files.example.com".to_string()),
            "APP__LANGUAGE" => Some("klingon".to_string()),
            _ => None,
        }
    });
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let path = temp_settings_file("malformed", "api_base_url = [1, 2");
    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings, Settings::default());
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn normalize_base_url_rejects_non_http_urls() {
    assert_eq!(
        normalize_base_url(" http://localhost:3000/ ").expect("valid"),
        "http://localhost:3000"
    );
    assert!(normalize_base_url("localhost:3000").is_err());
    assert!(normalize_base_url("mailto:team@example.com").is_err());
}
