//! Integration tests for theme files on disk

use std::fs;

use tempfile::TempDir;
use termtable::config::BorderKind;
use termtable::{Border, Error, Style, Table, ThemeConfig};

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("theme.toml");

    let mut config = ThemeConfig::default();
    config.layout.border = BorderKind::Rounded;
    config.layout.padding = 2;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    let loaded = ThemeConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.border(), Border::ROUNDED);
}

#[test]
fn loaded_theme_drives_rendering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(
        &path,
        r##"
[table.regular.text]
fg = "#102030"

[table.striped.text]
fg = "#405060"
bold = true
"##,
    )
    .unwrap();

    let theme = ThemeConfig::load_from(&path).unwrap().table_theme();
    let mut table = Table::new().with_headers(["Name"]);
    table.create_row().add_default_text("first");
    table.create_row().add_default_text("second");
    let out = table.render(&theme);

    assert!(out.contains(&Style::new("#405060", "", true).convert(" first  ")));
    assert!(out.contains(&Style::new("#102030", "", false).convert(" second ")));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    match ThemeConfig::load_from(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "[table\nregular = 1").unwrap();
    match ThemeConfig::load_from(&path) {
        Err(Error::ThemeParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ThemeParse error, got {other:?}"),
    }
}

#[test]
fn invalid_color_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "[heatmap.odd.e]\nfg = \"crimson\"\n").unwrap();
    let err = ThemeConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidRole { ref role, .. } if role == "heatmap.odd.e"));
    assert!(err.to_string().contains("crimson"));
}
