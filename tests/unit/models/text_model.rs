use super::*;

#[test]
fn test_text_round_trip_with_unicode() {
    let text = "héllo\n世界\r\n👍🏽 done\n";
    let model = TextModel::new("inmemory://model/1", text, None);
    assert_eq!(model.text(), text);
    assert_eq!(model.version(), 1);
}

#[test]
fn test_lines_strip_terminators() {
    let model = TextModel::new("m", "a\r\nb\nc", None);
    assert_eq!(model.lines(), vec!["a", "b", "c"]);

    let trailing = TextModel::new("m", "a\n", None);
    assert_eq!(trailing.lines(), vec!["a", ""]);
}

#[test]
fn test_empty_model_has_one_line() {
    let model = TextModel::new("m", "", None);
    assert!(model.is_empty());
    assert_eq!(model.lines(), vec![""]);
}

#[test]
fn test_apply_insert_delete_replace() {
    let mut model = TextModel::new("m", "hello world", None);

    assert_eq!(model.apply(&TextEdit::insert(5, ",")), Some(2));
    assert_eq!(model.text(), "hello, world");

    assert_eq!(model.apply(&TextEdit::delete(0..7)), Some(3));
    assert_eq!(model.text(), "world");

    assert_eq!(model.apply(&TextEdit::replace(0..5, "ünïcode")), Some(4));
    assert_eq!(model.text(), "ünïcode");
}

#[test]
fn test_apply_out_of_range_leaves_model_untouched() {
    let mut model = TextModel::new("m", "abc", None);
    assert_eq!(model.apply(&TextEdit::insert(4, "x")), None);
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = TextEdit::delete(2..1);
    assert_eq!(model.apply(&reversed), None);
    assert_eq!(model.text(), "abc");
    assert_eq!(model.version(), 1);
}

#[test]
fn test_write_to() {
    let model = TextModel::new("m", "line1\nline2", None);
    let mut out = Vec::new();
    model.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "line1\nline2");
}

#[test]
fn test_language() {
    let mut model = TextModel::new("m", "", LanguageTag::normalize(Some("markdown")));
    assert_eq!(model.language().map(LanguageTag::as_str), Some("markdown"));
    model.set_language(None);
    assert!(model.language().is_none());
}
