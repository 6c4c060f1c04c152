use super::{load_settings_with, normalize_base_url, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use shared::domain::SortKey;

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("games_cli_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("games.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_local_json_server() {
    let settings = load_settings_with(None, no_env).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, "http://localhost:3000");
    assert_eq!(settings.collection, "games");
    assert_eq!(settings.default_sort, SortKey::Title);
}

#[test]
fn file_values_are_applied() {
    let path = temp_config(
        "api_base_url = \"http://games.local:8080/\"\ncollection = \"retro\"\ndefault_sort = \"releaseYear\"\n",
    );

    let settings = load_settings_with(Some(&path), no_env).expect("settings");
    assert_eq!(settings.api_base_url, "http://games.local:8080");
    assert_eq!(settings.collection, "retro");
    assert_eq!(settings.default_sort, SortKey::ReleaseYear);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_config("api_base_url = \"http://from-file\"\n");
    let env_vars = HashMap::from([
        ("GAMES_API_URL", "http://from-games-env"),
        ("APP__API_BASE_URL", "from-app-env:4000"),
        ("APP__DEFAULT_SORT", "release_year"),
    ]);

    let settings = load_settings_with(Some(&path), |key| {
        env_vars.get(key).map(|v| v.to_string())
    })
    .expect("settings");
    assert_eq!(settings.api_base_url, "http://from-app-env:4000");
    assert_eq!(settings.default_sort, SortKey::ReleaseYear);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn bad_env_sort_key_keeps_default() {
    let settings = load_settings_with(None, |key| {
        (key == "APP__DEFAULT_SORT").then(|| "rating".to_string())
    })
    .expect("settings");
    assert_eq!(settings.default_sort, SortKey::Title);
}

#[test]
fn explicit_config_errors_are_reported() {
    let path = temp_config("default_sort = \"rating\"\n");
    let err = load_settings_with(Some(&path), no_env).expect_err("bad sort key");
    assert!(format!("{err:#}").contains("rating"), "unexpected: {err:#}");
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");

    let missing = env::temp_dir().join("games_cli_config_test_missing/games.toml");
    assert!(load_settings_with(Some(&missing), no_env).is_err());
}

#[test]
fn normalizes_base_urls() {
    assert_eq!(normalize_base_url("  http://h:3000// "), "http://h:3000");
    assert_eq!(normalize_base_url("localhost:3000"), "http://localhost:3000");
    assert_eq!(normalize_base_url("https://api.example.com/v1/"), "https://api.example.com/v1");
    assert_eq!(normalize_base_url(""), "http://localhost:3000");
}
