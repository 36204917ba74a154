use super::*;
use crate::kernel::services::ports::Dimension;

#[test]
fn test_parse_empty_object_gives_defaults() {
    let settings = parse_settings("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.storage.is_unset());
    assert!(settings.storage.prefer_directory);
}

#[test]
fn test_parse_partial_settings() {
    let settings = parse_settings(
        r#"{
            "editor": { "theme": "vs", "dimension": { "width": 640, "height": 480 } },
            "storage": { "database": "/tmp/db.json", "prefer_directory": false }
        }"#,
    )
    .unwrap();
    assert_eq!(settings.editor.theme, "vs");
    assert_eq!(settings.editor.font_size, 14);
    assert_eq!(settings.editor.dimension, Dimension::new(640, 480));
    assert_eq!(settings.storage.directory, None);
    assert_eq!(settings.storage.database, Some(PathBuf::from("/tmp/db.json")));
    assert!(!settings.storage.prefer_directory);
}

#[test]
fn test_parse_invalid_json() {
    assert!(parse_settings("{ not json").is_err());
}

#[test]
fn test_default_settings_omit_locations() {
    let data = serde_json::to_string_pretty(&Settings::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert!(value["storage"].get("directory").is_none());
    assert!(value["storage"].get("database").is_none());
    assert_eq!(value["storage"]["prefer_directory"], true);
    assert_eq!(parse_settings(&data).unwrap(), Settings::default());
}

#[test]
fn test_settings_path_is_under_config_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".tabpad/settings.json"));
    }
}

#[test]
fn test_partial_nested_objects_keep_user_values() {
    let settings = parse_settings(
        r#"{ "editor": {
            "font_size": 20,
            "scrollbar": { "vertical_size": 30 },
            "padding": { "bottom": 8 },
            "dimension": { "width": 1024 }
        } }"#,
    )
    .unwrap();
    assert_eq!(settings.editor.font_size, 20);
    assert_eq!(settings.editor.scrollbar.vertical_size, 30);
    assert_eq!(settings.editor.scrollbar.horizontal_size, 25);
    assert_eq!(settings.editor.padding.top, 5);
    assert_eq!(settings.editor.padding.bottom, 8);
    assert_eq!(settings.editor.dimension, Dimension::new(1024, 600));
}
