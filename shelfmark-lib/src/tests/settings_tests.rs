use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_means_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server.bind, "127.0.0.1:8080");
    assert_eq!(settings.seed, SeedSettings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
database = "/srv/shelfmark/library.db"

[seed]
books = 12
rng_seed = 7
"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(
        settings.database,
        Some(PathBuf::from("/srv/shelfmark/library.db"))
    );
    assert_eq!(settings.seed.books, 12);
    assert_eq!(settings.seed.users, 50);
    assert_eq!(settings.seed.authors, 10);
    assert_eq!(settings.seed.rng_seed, Some(7));
    assert_eq!(settings.server, ServerSettings::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[seed]\nbooks = \"many\"\n").unwrap();
    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn test_database_path_priority() {
    let mut settings = Settings::default();
    assert_eq!(resolve_database_path(None, &settings), default_database_path());

    settings.database = Some(PathBuf::from("from-file.db"));
    assert_eq!(
        resolve_database_path(None, &settings),
        PathBuf::from("from-file.db")
    );
    assert_eq!(
        resolve_database_path(Some(PathBuf::from("cli.db")), &settings),
        PathBuf::from("cli.db")
    );
}

#[test]
fn test_settings_path_is_under_shelfmark() {
    let path = settings_path();
    assert!(path.ends_with("shelfmark/settings.toml"));
    assert!(default_database_path().ends_with("shelfmark/library.db"));
}
