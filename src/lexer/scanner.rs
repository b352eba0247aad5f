//! Rule-ordered scanner over one grammar
//!
//! The scanner tries each rule of its grammar in declaration order at the
//! cursor. The first rule that matches yields a token; if none does, a single
//! `UNCLASSIFIED` character is yielded instead. Either way the cursor moves
//! forward, so scanning a finite range always terminates.

use text_size::TextRange;

use super::literal::{LiteralMatch, match_delimited, match_heredoc};
use crate::base::range;
use crate::diagnostics::Diagnostic;
use crate::grammar::{DelimitedSpec, Grammar, Matcher, RuleAction, TokenKind};
use crate::interpolation::Zone;

/// A token as produced by the scanner, before interpolation splicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub range: TextRange,
    /// Index of the matching rule; `None` for unclassified input
    pub rule: Option<usize>,
    /// Region change requested by the matching rule
    pub action: Option<RuleAction>,
    /// Interpolation zones found inside the token, in source order
    pub zones: Vec<Zone>,
}

impl RawToken {
    pub fn end(&self) -> usize {
        usize::from(self.range.end())
    }

    /// Whether the dispatcher must re-seat the scanner after this token
    pub fn is_boundary(&self) -> bool {
        self.action.is_some()
    }
}

/// Lazy token sequence for one grammar over `cursor..limit`.
///
/// Iteration ends when the range is consumed, or right after a token whose
/// rule carries a [`RuleAction`].
#[derive(Debug)]
pub struct Scanner<'g, 't> {
    grammar: &'g Grammar,
    /// Input truncated at the range limit
    text: &'t str,
    cursor: usize,
    /// Interpolation levels still allowed inside matched literals
    budget: usize,
    /// Delimited rules of `grammar`, for skipping quotes inside zones
    literals: Vec<&'g DelimitedSpec>,
    at_boundary: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'g, 't> Scanner<'g, 't> {
    /// Scan `text[cursor..limit]` with `grammar`.
    pub fn new(grammar: &'g Grammar, text: &'t str, cursor: usize, limit: usize, budget: usize) -> Self {
        Self {
            grammar,
            text: &text[..limit],
            cursor,
            budget,
            literals: grammar
                .rules()
                .iter()
                .filter_map(|rule| match &rule.matcher {
                    Matcher::Delimited(spec) => Some(spec),
                    _ => None,
                })
                .collect(),
            at_boundary: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Soft diagnostics raised by literal matchers so far
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Match one token at the cursor and advance past it.
    ///
    /// Returns `None` only when the range is exhausted.
    pub fn scan_one(&mut self) -> Option<RawToken> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let start = self.cursor;

        for (index, rule) in self.grammar.rules().iter().enumerate() {
            let Some(found) = self.try_rule(&rule.matcher, start) else {
                continue;
            };
            // Zero-width matches never count: forward progress comes first.
            if found.end <= start {
                continue;
            }
            self.diagnostics.extend(found.diagnostics);
            self.cursor = found.end;
            return Some(RawToken {
                kind: rule.kind,
                range: range(start, found.end),
                rule: Some(index),
                action: rule.action.clone(),
                zones: found.zones,
            });
        }

        let width = self.text[start..].chars().next().map_or(1, char::len_utf8);
        self.cursor = start + width;
        tracing::trace!(at = start, grammar = %self.grammar.id(), "no rule matched");
        Some(RawToken {
            kind: TokenKind::UNCLASSIFIED,
            range: range(start, self.cursor),
            rule: None,
            action: None,
            zones: Vec::new(),
        })
    }

    fn try_rule(&self, matcher: &Matcher, cursor: usize) -> Option<LiteralMatch> {
        match matcher {
            Matcher::Delimited(spec) => {
                match_delimited(spec, self.text, cursor, self.budget, &self.literals)
            }
            Matcher::Heredoc(spec) => {
                match_heredoc(spec, self.text, cursor, self.budget, &self.literals)
            }
            simple => simple.match_simple(self.text, cursor).map(|end| LiteralMatch {
                end,
                ..LiteralMatch::default()
            }),
        }
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_boundary {
            return None;
        }
        let token = self.scan_one()?;
        self.at_boundary = token.is_boundary();
        Some(token)
    }
}
