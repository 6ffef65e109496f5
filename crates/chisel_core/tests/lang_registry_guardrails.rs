use std::collections::HashMap;

use chisel_core::lang::keywords::{self, KeywordCategory};
use chisel_core::lang::operators;
use chisel_core::lang::punctuation::{self, BracketFamily, BracketSide};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<String, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        // Lookup is case-insensitive, so uniqueness is checked on the folded spelling.
        if let Some(prev) = seen.insert(info.canonical.to_ascii_lowercase(), info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_canonical_casing_is_consistent() {
    for info in keywords::KEYWORDS {
        let expected = if info.category == KeywordCategory::MagicConstant {
            info.canonical.to_ascii_uppercase()
        } else {
            info.canonical.to_ascii_lowercase()
        };
        assert_eq!(info.canonical, expected, "unexpected casing for {:?}", info.id);
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(!info.spellings.is_empty(), "operator {:?} has no spelling", info.id);
        for &sp in info.spellings {
            assert_eq!(
                operators::from_str(sp),
                Some(info.id),
                "operator spelling not resolvable: {}",
                sp
            );
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
    }
}

#[test]
fn word_operators_are_also_keywords() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        for &sp in info.spellings {
            let keyword = keywords::from_str(sp)
                .unwrap_or_else(|| panic!("word operator {sp:?} is not a registered keyword"));
            assert_eq!(keywords::category(keyword), KeywordCategory::Operator);
        }
    }
}

#[test]
fn symbol_spellings_do_not_collide_across_registries() {
    for info in operators::OPERATORS.iter().filter(|o| !o.is_keyword_spelling) {
        for &sp in info.spellings {
            assert_eq!(
                punctuation::from_str(sp),
                None,
                "{sp:?} is both an operator and punctuation"
            );
        }
    }
}

#[test]
fn punctuation_spellings_resolvable() {
    for info in punctuation::PUNCTUATION.iter().filter(|p| !p.interpolation_only) {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(punctuation::as_str(info.id), info.canonical);
    }
}

#[test]
fn every_bracket_family_has_both_sides() {
    for family in [BracketFamily::Paren, BracketFamily::Bracket, BracketFamily::Curly] {
        for side in [BracketSide::Open, BracketSide::Close] {
            assert!(
                punctuation::PUNCTUATION
                    .iter()
                    .any(|p| p.bracket == Some((family, side))),
                "missing {side:?} bracket for {family:?}"
            );
        }
    }
}
