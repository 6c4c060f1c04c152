use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use shared::domain::SortKey;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "games.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub collection: String,
    pub default_sort: SortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".into(),
            collection: client_core::DEFAULT_COLLECTION.into(),
            default_sort: SortKey::Title,
        }
    }
}

/// Defaults, then `games.toml` (or `config_path`), then environment.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_PATH) {
                if let Err(error) = apply_file(&mut settings, &raw) {
                    warn!(path = DEFAULT_CONFIG_PATH, %error, "ignoring unreadable config file");
                }
            }
        }
    }

    if let Some(v) = env("GAMES_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__COLLECTION") {
        settings.collection = v;
    }
    if let Some(v) = env("APP__DEFAULT_SORT") {
        match v.parse() {
            Ok(key) => settings.default_sort = key,
            Err(error) => warn!(value = %v, %error, "ignoring APP__DEFAULT_SORT"),
        }
    }

    settings.api_base_url = normalize_base_url(&settings.api_base_url);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("api_base_url") {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("collection") {
        settings.collection = v.clone();
    }
    if let Some(v) = file_cfg.get("default_sort") {
        settings.default_sort = v.parse()?;
    }
    Ok(())
}

pub fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');

    if raw.is_empty() {
        return Settings::default().api_base_url;
    }

    if raw.contains("://") {
        return raw.to_string();
    }

    format!("http://{raw}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
