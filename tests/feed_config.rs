// tests/feed_config.rs
use std::{env, fs};

use minsk_afisha::config::{FeedConfig, ENV_API_KEY, ENV_CONFIG_PATH, ENV_SPREADSHEET_ID};
use minsk_afisha::feed::schema::Field;

fn clear_env() {
    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_API_KEY);
    env::remove_var(ENV_SPREADSHEET_ID);
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ does not interfere.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    // No files → built-in defaults.
    let cfg = FeedConfig::load_default().unwrap();
    assert_eq!(cfg, FeedConfig::default());

    // config/feed.toml is picked up.
    fs::create_dir_all(tmp.path().join("config")).unwrap();
    fs::write(
        tmp.path().join("config/feed.toml"),
        "page_size = 20\n[sheet]\nspreadsheet_id = \"from-file\"\n",
    )
    .unwrap();
    let cfg = FeedConfig::load_default().unwrap();
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.sheet.spreadsheet_id, "from-file");

    // Env path wins over config/feed.toml.
    let p = tmp.path().join("other.toml");
    fs::write(&p, "highlights = 5\n").unwrap();
    env::set_var(ENV_CONFIG_PATH, p.display().to_string());
    let cfg = FeedConfig::load_default().unwrap();
    assert_eq!(cfg.highlights, 5);
    assert_eq!(cfg.page_size, 15);

    // Missing env path is an error, not a silent fallback.
    env::set_var(ENV_CONFIG_PATH, tmp.path().join("nope.toml").display().to_string());
    assert!(FeedConfig::load_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn api_key_env_marker_and_spreadsheet_override() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("feed.toml");
    fs::write(
        &p,
        r#"
        [sheet]
        spreadsheet_id = "from-file"
        api_key = "ENV"

        [schema.columns]
        location = "Площадка"
        "#,
    )
    .unwrap();

    // Marker without the env var fails loudly.
    assert!(FeedConfig::load_from_file(&p).is_err());

    env::set_var(ENV_API_KEY, "secret");
    env::set_var(ENV_SPREADSHEET_ID, "from-env");
    let cfg = FeedConfig::load_from_file(&p).unwrap();
    assert_eq!(cfg.sheet.api_key, "secret");
    assert_eq!(cfg.sheet.spreadsheet_id, "from-env");
    assert_eq!(cfg.header_schema().column_for(Field::Location), Some("Площадка"));

    clear_env();
}
