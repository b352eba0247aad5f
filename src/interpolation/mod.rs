//! Interpolation resolver
//!
//! String-like tokens may contain embedded expressions (`${...}`, `#{...}`,
//! `$name`). The scanner records each one as a [`Zone`] while matching the
//! literal; this module turns a token with zones into a parent token whose
//! children are, in order:
//!
//! ```text
//! STRING piece, INTERPOLATION_MARKER (opener), expression tokens...,
//! INTERPOLATION_MARKER (closer), STRING piece, ...
//! ```
//!
//! Expression tokens come from a recursive dispatcher run over the zone's
//! expression range, one level deeper. Recursion is bounded: the scanner
//! stops recognizing openers once the configured interpolation depth is
//! exhausted.

mod closer;

pub(crate) use closer::{Host, scan_body};

use std::sync::Arc;

use text_size::TextRange;

use crate::dispatch::Dispatcher;
use crate::grammar::{Grammar, GrammarId, TokenKind};
use crate::lexer::RawToken;
use crate::stream::Token;
use crate::tokenize::TokenizeError;

/// One embedded expression inside a string-like token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// The opener, e.g. `${`
    pub open: TextRange,
    /// The expression between opener and closer
    pub expr: TextRange,
    /// The closer, e.g. `}`; empty for sigil forms
    pub close: TextRange,
    /// Grammar for the expression; `None` means the host grammar
    pub grammar: Option<GrammarId>,
}

impl Zone {
    /// Full extent of the zone, opener through closer
    pub fn range(&self) -> TextRange {
        self.open.cover(self.close)
    }
}

/// Expand `raw` into a token whose children cover it exactly.
///
/// `host` is the grammar whose rule matched `raw`. Tokens without zones are
/// returned as leaves.
pub(crate) fn splice(
    dispatcher: &mut Dispatcher<'_, '_>,
    text: &str,
    host: &Arc<Grammar>,
    raw: &RawToken,
    depth: usize,
) -> Result<Token, TokenizeError> {
    if raw.zones.is_empty() {
        return Ok(Token::new(raw.kind, raw.range));
    }

    let mut children = Vec::with_capacity(raw.zones.len() * 4 + 1);
    let mut cursor = raw.range.start();
    for zone in &raw.zones {
        if zone.open.start() > cursor {
            children.push(Token::new(raw.kind, TextRange::new(cursor, zone.open.start())));
        }
        children.push(Token::new(TokenKind::INTERPOLATION_MARKER, zone.open));

        if !zone.expr.is_empty() {
            let grammar = match &zone.grammar {
                Some(id) => dispatcher.grammar(id)?,
                None => Arc::clone(host),
            };
            children.extend(dispatcher.run_range(text, &grammar, zone.expr, depth + 1)?);
        }

        if !zone.close.is_empty() {
            children.push(Token::new(TokenKind::INTERPOLATION_MARKER, zone.close));
        }
        cursor = zone.close.end();
    }
    if cursor < raw.range.end() {
        children.push(Token::new(raw.kind, TextRange::new(cursor, raw.range.end())));
    }

    Ok(Token::with_children(raw.kind, raw.range, children))
}
