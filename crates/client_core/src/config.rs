use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use shared::i18n::Language;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "landing.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            language: Language::default(),
        }
    }
}

impl Settings {
    pub fn set_api_base_url(&mut self, candidate: &str) {
        match normalize_base_url(candidate) {
            Ok(url) => self.api_base_url = url,
            Err(err) => warn!("ignoring api base url '{candidate}': {err:#}"),
        }
    }

    pub fn set_language(&mut self, candidate: &str) {
        match candidate.parse::<Language>() {
            Ok(language) => self.language = language,
            Err(err) => warn!("ignoring language setting: {err}"),
        }
    }
}

/// Defaults, then `landing.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    settings.set_api_base_url(v);
                }
                if let Some(v) = file_cfg.get("language") {
                    settings.set_language(v);
                }
            }
            Err(err) => warn!("ignoring unreadable settings file {}: {err}", path.display()),
        }
    }

    if let Some(v) = env("API_BASE_URL") {
        settings.set_api_base_url(&v);
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.set_api_base_url(&v);
    }

    if let Some(v) = env("LANDING_LANGUAGE") {
        settings.set_language(&v);
    }
    if let Some(v) = env("APP__LANGUAGE") {
        settings.set_language(&v);
    }

    settings
}

/// Accepts `http`/`https` URLs and strips any trailing slash.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("invalid url '{trimmed}'"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("unsupported scheme '{other}'"),
    }
    if url.host_str().is_none() {
        anyhow::bail!("url has no host");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
