//! Document import through generation, transcription, and export.

use lexc::foundation::{BOUNDARY, NULL};
use lexc::runtime::{Session, from_json, to_json};

const DOCUMENT: &str = r#"{
    "Name": "Vanti",
    "Version": "0.1.0",
    "CaseSensitive": false,
    "Lects": ["General", "Hill"],
    "Pronunciations": {
        "General": "C :: p, t, k\nG :: b, d, g\nV :: a, i, u\nVCV > VGV\nh > ∅\nu^ > o^",
        "Hill": "V :: a, i, u\n_h > _ʰ"
    },
    "Phonotactics": {
        "General": {
            "Onsets": ["p", "t", "k", "h", "s"],
            "Medials": ["p", "t", "k", "s", "l"],
            "Codas": ["s", "n"],
            "Vowels": ["a", "i", "u"],
            "Illegals": ["^h", "uu"]
        }
    },
    "Lexicon": {
        "hata": {
            "pronunciations": {
                "General": { "ipa": "", "irregular": false },
                "Hill": { "ipa": "", "irregular": false }
            },
            "Senses": [{ "definition": "river", "lects": [], "tags": ["noun"] }]
        }
    },
    "Phrasebook": {
        "Greetings": {
            "hata kapa": {
                "pronunciations": { "General": { "ipa": "", "irregular": false } },
                "description": "by the river",
                "lects": [],
                "tags": [],
                "variants": {}
            }
        }
    },
    "Docs": { "blocks": [] },
    "Alphabet": "a b d g h i k l n p s t u"
}"#;

#[test]
fn import_retranscribe_export() {
    let mut session = Session::with_language(from_json(DOCUMENT).unwrap());
    assert_eq!(session.retranscribe_all().unwrap(), 3);

    let lang = session.language();
    assert_eq!(lang.lexicon["hata"].pronunciations["General"].ipa, "ada");
    assert_eq!(lang.lexicon["hata"].pronunciations["Hill"].ipa, "hata");
    assert_eq!(
        lang.phrasebook["Greetings"]["hata kapa"].pronunciations["General"].ipa,
        "ada kaba"
    );

    let exported = to_json(lang).unwrap();
    let reimported = from_json(&exported).unwrap();
    assert_eq!(&reimported, lang);
}

#[test]
fn generated_words_transcribe_cleanly() {
    let mut session = Session::with_language(from_json(DOCUMENT).unwrap()).with_seed(31);
    for _ in 0..50 {
        let Some(word) = session.generate_word("General").unwrap() else {
            continue;
        };
        assert!(!word.starts_with('h'), "{word}");
        assert!(!word.contains("uu"), "{word}");

        let ipa = session.transcribe(&word, "General").unwrap();
        assert!(!ipa.contains(BOUNDARY), "{ipa}");
        assert!(!ipa.contains(NULL), "{ipa}");
        assert!(!ipa.contains('h'), "{ipa}");
    }
}

#[test]
fn lect_without_phonotactics_cannot_generate() {
    let mut session = Session::with_language(from_json(DOCUMENT).unwrap());
    assert!(session.generate_word("Hill").is_err());
}
