//! Property tests: coverage, forward progress and bounded depth hold for
//! arbitrary input in every grammar.

use proptest::prelude::*;
use strata::stream::check_coverage;
use strata::{TextRange, TextSize, TokenizeOptions, Tokenizer};

use crate::helpers::grammars::GRAMMARS;

const ROOTS: [&str; 5] = ["html", "js", "jsx", "ruby", "kotlin"];

/// Input assembled from delimiter-heavy fragments, so openers, closers and
/// region markers collide far more often than in uniform random text.
fn fragment_soup() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("`".to_string()),
        Just("${".to_string()),
        Just("#{".to_string()),
        Just("}".to_string()),
        Just("{".to_string()),
        Just("\"".to_string()),
        Just("'".to_string()),
        Just("$x".to_string()),
        Just("<script>".to_string()),
        Just("</script>".to_string()),
        Just("<?php".to_string()),
        Just("?>".to_string()),
        Just("<<~EOS\n".to_string()),
        Just("EOS".to_string()),
        Just("<div>".to_string()),
        Just("</div>".to_string()),
        Just("\\".to_string()),
        Just("\n".to_string()),
        "[a-z0-9 ]{1,4}",
        any::<char>().prop_map(String::from),
    ];
    prop::collection::vec(fragment, 0..48).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_stream_partitions_input(text in fragment_soup(), root in 0..ROOTS.len()) {
        let result = Tokenizer::new(&GRAMMARS).tokenize(&text, ROOTS[root]).unwrap();
        let whole = TextRange::up_to(TextSize::of(text.as_str()));
        prop_assert_eq!(check_coverage(result.stream.tokens(), whole), Ok(()));
        let rebuilt: String = result.stream.leaves().map(|t| t.text(&text)).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_unmerged_tokens_are_never_empty(text in "\\PC{0,64}", root in 0..ROOTS.len()) {
        let options = TokenizeOptions::default().merge_adjacent(false);
        let result = Tokenizer::with_options(&GRAMMARS, options)
            .tokenize(&text, ROOTS[root])
            .unwrap();
        for record in result.records() {
            prop_assert!(!record.range.is_empty());
        }
    }

    #[test]
    fn prop_depth_is_bounded(text in fragment_soup(), limit in 0usize..4) {
        let options = TokenizeOptions::default().max_interpolation_depth(limit);
        let result = Tokenizer::with_options(&GRAMMARS, options)
            .tokenize(&text, "js")
            .unwrap();
        prop_assert!(result.stream.max_depth() as usize <= limit);
    }

    #[test]
    fn prop_tokenize_is_deterministic(text in fragment_soup()) {
        let tokenizer = Tokenizer::new(&GRAMMARS);
        let first = tokenizer.tokenize(&text, "html").unwrap();
        let second = tokenizer.tokenize(&text, "html").unwrap();
        prop_assert_eq!(first, second);
    }
}
