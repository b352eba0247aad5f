//! Shared tokenization helpers and coverage assertions.

use strata::stream::check_coverage;
use strata::{TextRange, TextSize, TokenKind, Tokenized, Tokenizer};

use super::grammars::GRAMMARS;

/// Tokenize with default options against the shared test grammars.
pub fn tokenize(text: &str, root: &str) -> Tokenized {
    Tokenizer::new(&GRAMMARS)
        .tokenize(text, root)
        .unwrap_or_else(|err| panic!("tokenizing as {root} failed: {err}"))
}

/// Leaf tokens as `(kind, text)` pairs.
pub fn leaves<'t>(text: &'t str, result: &Tokenized) -> Vec<(TokenKind, &'t str)> {
    result
        .stream
        .leaves()
        .map(|t| (t.kind, t.text(text)))
        .collect()
}

/// Top-level tokens as `(kind, text)` pairs.
pub fn top_level<'t>(text: &'t str, result: &Tokenized) -> Vec<(TokenKind, &'t str)> {
    result
        .stream
        .tokens()
        .iter()
        .map(|t| (t.kind, t.text(text)))
        .collect()
}

/// Assert the stream partitions `text` at every level.
pub fn assert_covers(text: &str, result: &Tokenized) {
    let whole = TextRange::up_to(TextSize::of(text));
    if let Err(violation) = check_coverage(result.stream.tokens(), whole) {
        panic!("coverage violated: {violation}");
    }
    let rebuilt: String = result.stream.leaves().map(|t| t.text(text)).collect();
    assert_eq!(rebuilt, text, "leaves do not rebuild the input");
}
