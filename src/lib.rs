//! # strata-base
//!
//! Core library for multi-grammar tokenization with embedded-language regions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! tokenize      → Public facade: options, policy, cancellation, batch runs
//!   ↓
//! dispatch      → Region-driven scanning loop
//!   ↓       ↑
//!   ↓   interpolation → Zone detection in literals; splicing re-enters dispatch
//!   ↓       ↓
//! lexer, region → Rule-ordered scanner, stack of active grammars
//!   ↓
//! stream        → Token tree, coverage checks, depth-first traversal
//!   ↓
//! grammar       → Declarative rule tables, grammar sets, validation
//!   ↓
//! diagnostics   → Soft warnings (codes, severity, related ranges)
//!   ↓
//! base          → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostics → grammar → ... → tokenize)
// ============================================================================

/// Foundation types: TextRange, TextSize, LineIndex
pub mod base;

/// Soft diagnostics reported alongside a token stream
pub mod diagnostics;

/// Grammar definitions: rules, matchers, grammar sets
pub mod grammar;

/// Token tree, normalization and traversal
pub mod stream;

/// Scanner executing one grammar at a cursor
pub mod lexer;

/// Region stack tracking embedded grammars
pub mod region;

/// Interpolation zone resolution inside string-like tokens
pub mod interpolation;

/// Dispatcher driving the scanner against the region stack
pub mod dispatch;

/// Public tokenization entry points
pub mod tokenize;

// Re-export commonly needed items
pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use grammar::{
    CharClass, DelimitedSpec, Grammar, GrammarError, GrammarId, GrammarSet, HeredocSpec,
    Interpolation, Matcher, Repeat, Rule, RuleAction, TokenKind,
};
pub use stream::{Token, TokenRecord, TokenStream};
pub use tokenize::{DegradePolicy, TokenizeError, TokenizeOptions, Tokenized, Tokenizer};
