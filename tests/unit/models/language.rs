use super::*;

#[test]
fn test_normalize_plaintext_is_none() {
    assert_eq!(LanguageTag::normalize(Some("plaintext")), None);
    assert_eq!(LanguageTag::normalize(Some("")), None);
    assert_eq!(LanguageTag::normalize(Some("  ")), None);
    assert_eq!(LanguageTag::normalize(None), None);
}

#[test]
fn test_normalize_keeps_other_ids() {
    let tag = LanguageTag::normalize(Some(" markdown ")).unwrap();
    assert_eq!(tag.as_str(), "markdown");
    assert_eq!(tag.to_string(), "markdown");
}

#[test]
fn test_from_path() {
    assert_eq!(
        LanguageTag::from_path(Path::new("notes.md")).unwrap().as_str(),
        "markdown"
    );
    assert_eq!(
        LanguageTag::from_path(Path::new("app.fsx")).unwrap().as_str(),
        "fsharp"
    );
    assert_eq!(LanguageTag::from_path(Path::new("README")), None);
    assert_eq!(LanguageTag::from_path(Path::new("data.bin")), None);
}

#[test]
fn test_serde_is_transparent() {
    let tag = LanguageTag::normalize(Some("rust")).unwrap();
    assert_eq!(serde_json::to_string(&tag).unwrap(), "\"rust\"");
}
