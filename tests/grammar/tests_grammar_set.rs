//! Grammar set construction and validation through the public API.

use rstest::rstest;
use strata::{
    CharClass, DelimitedSpec, Grammar, GrammarError, GrammarSet, HeredocSpec, Interpolation,
    Matcher, Rule, TokenKind,
};

use crate::helpers::grammars::GRAMMARS;

#[test]
fn test_shared_grammars_are_valid() {
    assert!(GRAMMARS.contains("html"));
    assert!(GRAMMARS.contains("jsx-body"));
    assert_eq!(GRAMMARS.ids().next().map(|id| id.as_str()), Some("html"));
}

#[rstest]
#[case::empty_literal(Rule::literal(TokenKind::TEXT, ""))]
#[case::empty_set(Rule::new(
    TokenKind::TEXT,
    Matcher::Chars { class: CharClass::Set("".into()), repeat: Default::default() }
))]
#[case::optional_pattern(Rule::pattern(TokenKind::TEXT, "a*").unwrap())]
#[case::empty_delimiter(Rule::delimited(TokenKind::STRING, DelimitedSpec::new("", "\"")))]
fn test_rules_that_can_match_empty_are_rejected(#[case] rule: Rule) {
    let err = GrammarSet::builder()
        .grammar(Grammar::builder("g").rule(rule).build())
        .build()
        .unwrap_err();
    assert!(matches!(err, GrammarError::EmptyMatch { rule: 0, .. }), "{err}");
}

#[test]
fn test_invalid_pattern_reports_source() {
    let err = Rule::pattern(TokenKind::TEXT, "(unclosed").unwrap_err();
    assert!(matches!(err, GrammarError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_switch_target_must_exist() {
    let err = GrammarSet::builder()
        .grammar(
            Grammar::builder("head")
                .rule(Rule::literal(TokenKind::TAG, ">").switch("body"))
                .build(),
        )
        .build()
        .unwrap_err();
    assert!(matches!(err, GrammarError::UnknownGrammar { ref target, .. } if target.as_str() == "body"));
}

#[test]
fn test_empty_interpolation_rejected() {
    let spec = DelimitedSpec::quoted("`").interpolate(Interpolation::braced("", "}"));
    let err = GrammarSet::builder()
        .grammar(Grammar::builder("js").rule(Rule::delimited(TokenKind::STRING, spec)).build())
        .build()
        .unwrap_err();
    assert!(matches!(err, GrammarError::EmptyInterpolation { .. }));
}

#[test]
fn test_identifier_heredoc_flag_rejected() {
    let spec = HeredocSpec::new("<<").flags("x");
    let err = GrammarSet::builder()
        .grammar(Grammar::builder("sh").rule(Rule::heredoc(TokenKind::STRING, spec)).build())
        .build()
        .unwrap_err();
    assert!(matches!(err, GrammarError::InvalidHeredocFlags { .. }));
}

#[test]
fn test_include_puts_own_rules_first() {
    let base = Grammar::builder("base")
        .rule(Rule::literal(TokenKind::OPERATOR, "<"))
        .build();
    let embedded = Grammar::builder("embedded")
        .rule(Rule::literal(TokenKind::TAG, "</x>").exit())
        .include(&base)
        .build();
    assert_eq!(embedded.rules().len(), 2);
    assert_eq!(embedded.rules()[0].kind, TokenKind::TAG);
}
