use super::*;

#[test]
fn test_editor_config_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.theme, "vs-dark");
    assert_eq!(config.font_size, 14);
    assert!(!config.word_wrap);
    assert!(!config.minimap);
    assert!(config.drag_and_drop);
    assert_eq!(config.scrollbar.vertical_size, 25);
    assert_eq!(config.scrollbar.horizontal_size, 25);
    assert_eq!(config.padding, Padding { top: 5, bottom: 5 });
    assert_eq!(config.dimension, Dimension::new(800, 600));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: EditorConfig =
        serde_json::from_str(r#"{ "font_size": 18, "word_wrap": true }"#).unwrap();
    assert_eq!(config.font_size, 18);
    assert!(config.word_wrap);
    assert_eq!(config.theme, "vs-dark");
    assert_eq!(config.padding, Padding::default());
}

#[test]
fn test_dimension_from_json() {
    let config: EditorConfig =
        serde_json::from_str(r#"{ "dimension": { "width": 1280, "height": 720 } }"#).unwrap();
    assert_eq!(config.dimension, Dimension::new(1280, 720));
}
