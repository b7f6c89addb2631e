//! Integration tests for the rule text front end

use lexc_rules::{RawRule, RuleSource};

#[test]
fn mixed_text_is_split_into_categories_and_rules() {
    let text = "\
C :: p, t, k
V :: a, i

# a line without separators is ignored
CV > CV
ng^ > ŋ^
";
    let source = RuleSource::parse(text);
    assert_eq!(source.categories.len(), 2);
    assert_eq!(
        source.rules,
        vec![RawRule::new("CV", "CV"), RawRule::new("ng^", "ŋ^")]
    );
    assert_eq!(source.compile().len(), 7);
}

#[test]
fn redefinition_replaces_category() {
    let source = RuleSource::parse("V :: a\nV :: e, o");
    assert_eq!(source.categories.get('V').unwrap(), ["e", "o"]);
}

#[test]
fn whitespace_inside_lines_is_ignored() {
    let source = RuleSource::parse("  s h   >  ʃ  ");
    assert_eq!(source.rules, vec![RawRule::new("sh", "ʃ")]);
}
