//! Token tree and traversal
//!
//! The final output of a tokenization run is a [`TokenStream`]: top-level
//! tokens that partition the input exactly once, some of which carry
//! `children` produced by interpolation. Renderers consume it through
//! [`TokenStream::walk`], a depth-first traversal of `(kind, range, depth)`
//! records.

mod normalize;

pub use normalize::{CoverageViolation, check_coverage, merge_adjacent, normalize};

use text_size::{TextRange, TextSize};

use crate::grammar::TokenKind;

/// A classified span of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
    /// Sub-tokens exactly partitioning `range`, or empty
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: TokenKind, range: TextRange, children: Vec<Token>) -> Self {
        Self {
            kind,
            range,
            children,
        }
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Source text of this token
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.range]
    }
}

/// One node of the depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenRecord {
    pub kind: TokenKind,
    pub range: TextRange,
    /// 0 for top-level tokens, +1 per level of interpolation children
    pub depth: u32,
}

impl TokenRecord {
    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }
}

/// Ordered top-level tokens covering a whole input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    len: TextSize,
}

impl TokenStream {
    /// Wrap tokens without checking them; use [`normalize`] for checked
    /// construction.
    pub(crate) fn from_parts(tokens: Vec<Token>, len: TextSize) -> Self {
        Self { tokens, len }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Length of the covered input
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Depth-first traversal of every token, parents before children.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self.tokens.iter(), 0)],
        }
    }

    /// Tokens without children, in source order.
    ///
    /// Leaves partition the input just like the top-level tokens do.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.tokens.iter()],
        }
    }

    /// Deepest record depth, 0 when no token has children
    pub fn max_depth(&self) -> u32 {
        self.walk().map(|r| r.depth).max().unwrap_or(0)
    }
}

/// Depth-first iterator over a token tree. See [`TokenStream::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(std::slice::Iter<'a, Token>, u32)>,
}

impl Iterator for Walk<'_> {
    type Item = TokenRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (iter, depth) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(token) => {
                    if !token.children.is_empty() {
                        self.stack.push((token.children.iter(), depth + 1));
                    }
                    return Some(TokenRecord {
                        kind: token.kind,
                        range: token.range,
                        depth,
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Leaf iterator over a token tree. See [`TokenStream::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, Token>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(token) if token.is_leaf() => return Some(token),
                Some(token) => self.stack.push(token.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
