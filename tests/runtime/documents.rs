//! Integration tests for language documents and their serialization

use lexc_runtime::{
    Language, Phrase, PhraseCategory, Pronunciation, Variant, Word, from_bytes, from_json,
    load_from_file, save_to_file, to_bytes, to_json,
};

fn language() -> Language {
    let mut lang = Language::new("Kethic");
    lang.add_lect("Northern");
    lang.case_sensitive = true;
    lang.pronunciations
        .insert("General".into(), "V :: a, e\nsh > ʃ".into());

    let mut word = Word::default();
    word.pronunciations
        .insert("General".into(), Pronunciation::regular("ʃa"));
    word.pronunciations
        .insert("Northern".into(), Pronunciation::irregular("sa"));
    lang.lexicon.insert("sha".into(), word);

    let mut phrase = Phrase {
        description: "hello".into(),
        ..Phrase::default()
    };
    phrase.variants.insert(
        "sha sha".into(),
        Variant {
            description: "emphatic".into(),
            ..Variant::default()
        },
    );
    let mut category = PhraseCategory::new();
    category.insert("sha".into(), phrase);
    lang.phrasebook.insert("Greetings".into(), category);
    lang
}

#[test]
fn json_roundtrip_preserves_document() {
    let lang = language();
    let restored = from_json(&to_json(&lang).unwrap()).unwrap();
    assert_eq!(restored, lang);
}

#[test]
fn messagepack_roundtrip_preserves_document() {
    let lang = language();
    let restored = from_bytes(&to_bytes(&lang).unwrap()).unwrap();
    assert_eq!(restored, lang);
}

#[test]
fn file_format_follows_extension() {
    let lang = language();
    let json = std::env::temp_dir().join("lexc_it_document.json");
    let snapshot = std::env::temp_dir().join("lexc_it_document.lexc");

    save_to_file(&lang, &json).unwrap();
    save_to_file(&lang, &snapshot).unwrap();

    let text = std::fs::read_to_string(&json).unwrap();
    assert!(text.trim_start().starts_with('{'));
    assert_ne!(std::fs::read(&snapshot).unwrap(), text.as_bytes());

    assert_eq!(load_from_file(&json).unwrap(), lang);
    assert_eq!(load_from_file(&snapshot).unwrap(), lang);

    let _ = std::fs::remove_file(&json);
    let _ = std::fs::remove_file(&snapshot);
}

#[test]
fn garbage_snapshot_is_rejected() {
    assert!(from_bytes(&[0xc1, 0x00, 0xff]).is_err());
}

const FOREIGN_KEYS: &str = r#"{
    "Name": "Vanti",
    "Version": "2.3.1",
    "Lects": ["General"],
    "Pronunciations": { "General": "th > θ" },
    "Alphabet": "a e i th u",
    "HeaderTags": "noun verb",
    "IgnoreDiacritics": true,
    "Diagnostics": [{ "kind": "warning", "line": 3 }],
    "Docs": {
        "blocks": [
            { "type": "header", "text": "Grammar", "level": 1 },
            { "type": "text", "text": "Verbs agree with the subject.", "note": null }
        ]
    }
}"#;

#[test]
fn foreign_keys_survive_json_roundtrip() {
    let lang = from_json(FOREIGN_KEYS).unwrap();
    assert_eq!(
        lang.extra.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Alphabet", "Diagnostics", "Docs", "HeaderTags", "IgnoreDiacritics"]
    );

    let exported = to_json(&lang).unwrap();
    assert!(exported.contains("\"Alphabet\": \"a e i th u\""));
    assert!(exported.contains("Verbs agree with the subject."));

    let reimported = from_json(&exported).unwrap();
    assert_eq!(reimported, lang);
    assert_eq!(reimported.extra["Docs"]["blocks"][0]["text"], "Grammar");
    assert_eq!(reimported.extra["IgnoreDiacritics"], true);
}

#[test]
fn foreign_keys_survive_snapshot_and_save() {
    let lang = from_json(FOREIGN_KEYS).unwrap();
    assert_eq!(from_bytes(&to_bytes(&lang).unwrap()).unwrap(), lang);

    let path = std::env::temp_dir().join("lexc_it_foreign_keys.json");
    save_to_file(&lang, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.extra, lang.extra);
    assert_eq!(loaded.extra["Diagnostics"][0]["line"], 3);
}

#[test]
fn modelled_keys_are_not_duplicated_in_extra() {
    let lang = from_json(FOREIGN_KEYS).unwrap();
    assert!(!lang.extra.contains_key("Name"));
    assert!(!lang.extra.contains_key("Pronunciations"));
    assert!(language().extra.is_empty());
}
