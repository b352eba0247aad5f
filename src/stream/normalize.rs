//! Token stream normalization
//!
//! Two passes over the raw dispatcher output:
//! 1. Merge immediately adjacent, childless tokens of the same kind at the
//!    same depth.
//! 2. Assert the coverage invariant: top-level tokens partition the input and
//!    every token's children partition the token.
//!
//! A violation is an internal defect (grammar or dispatcher), never something
//! malformed input can cause.

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::{Token, TokenStream};

/// The coverage invariant does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageViolation {
    /// Bytes between two tokens are not covered.
    #[error("gap in token coverage: expected token at {expected:?}, found one at {found:?}")]
    Gap { expected: TextSize, found: TextSize },

    /// A token starts before its predecessor ended.
    #[error("overlapping tokens: expected token at {expected:?}, found one at {found:?}")]
    Overlap { expected: TextSize, found: TextSize },

    /// A token covers no bytes.
    #[error("empty token at {at:?}")]
    EmptyToken { at: TextSize },

    /// Tokens stop before (or run past) the end of their parent range.
    #[error("tokens cover up to {covered:?} but the range ends at {expected:?}")]
    Incomplete { covered: TextSize, expected: TextSize },
}

/// Merge, check and wrap a raw token sequence covering `0..len`.
pub fn normalize(
    tokens: Vec<Token>,
    len: TextSize,
    merge: bool,
) -> Result<TokenStream, CoverageViolation> {
    let tokens = if merge { merge_adjacent(tokens) } else { tokens };
    check_coverage(&tokens, TextRange::up_to(len))?;
    Ok(TokenStream::from_parts(tokens, len))
}

/// Collapse adjacent childless tokens of identical kind, recursively.
pub fn merge_adjacent(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for mut token in tokens {
        if !token.children.is_empty() {
            token.children = merge_adjacent(std::mem::take(&mut token.children));
        }
        match merged.last_mut() {
            Some(prev)
                if prev.kind == token.kind
                    && prev.is_leaf()
                    && token.is_leaf()
                    && prev.range.end() == token.range.start() =>
            {
                prev.range = prev.range.cover(token.range);
            }
            _ => merged.push(token),
        }
    }
    merged
}

/// Check that `tokens` partition `range` exactly, recursing into children.
pub fn check_coverage(tokens: &[Token], range: TextRange) -> Result<(), CoverageViolation> {
    let mut cursor = range.start();
    for token in tokens {
        let start = token.range.start();
        if start > cursor {
            return Err(CoverageViolation::Gap {
                expected: cursor,
                found: start,
            });
        }
        if start < cursor {
            return Err(CoverageViolation::Overlap {
                expected: cursor,
                found: start,
            });
        }
        if token.range.is_empty() {
            return Err(CoverageViolation::EmptyToken { at: start });
        }
        if !token.children.is_empty() {
            check_coverage(&token.children, token.range)?;
        }
        cursor = token.range.end();
    }
    if cursor != range.end() {
        return Err(CoverageViolation::Incomplete {
            covered: cursor,
            expected: range.end(),
        });
    }
    Ok(())
}
