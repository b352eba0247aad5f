//! Tokenization entry points
//!
//! [`Tokenizer`] ties a validated [`GrammarSet`] to a set of
//! [`TokenizeOptions`]. Each call runs the dispatcher from the requested root
//! grammar, normalizes the result and applies the degrade policy.
//!
//! Runs share nothing mutable, so one tokenizer may serve many threads at
//! once; [`Tokenizer::tokenize_batch`] does exactly that with rayon.

mod error;
mod options;


pub use error::TokenizeError;
pub use options::{DegradePolicy, TokenizeOptions};

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::base::{LineIndex, size};
use crate::diagnostics::{Diagnostic, Severity};
use crate::dispatch::Dispatcher;
use crate::grammar::{GrammarId, GrammarSet};
use crate::stream::{TokenRecord, TokenStream, normalize};

/// A successful run: the token stream plus any soft diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub stream: TokenStream,
    pub diagnostics: Vec<Diagnostic>,
}

impl Tokenized {
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Depth-first `(kind, range, depth)` records of the stream
    pub fn records(&self) -> Vec<TokenRecord> {
        self.stream.walk().collect()
    }

    /// One line per diagnostic, positioned as `line:col` within `text`.
    pub fn render_diagnostics(&self, text: &str) -> String {
        let index = LineIndex::new(text);
        self.diagnostics
            .iter()
            .map(|d| d.format_with(&index))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tokenizes text against a shared, immutable grammar set.
#[derive(Debug, Clone)]
pub struct Tokenizer<'g> {
    grammars: &'g GrammarSet,
    options: TokenizeOptions,
}

impl<'g> Tokenizer<'g> {
    pub fn new(grammars: &'g GrammarSet) -> Self {
        Self::with_options(grammars, TokenizeOptions::default())
    }

    pub fn with_options(grammars: &'g GrammarSet, options: TokenizeOptions) -> Self {
        Self { grammars, options }
    }

    pub fn options(&self) -> &TokenizeOptions {
        &self.options
    }

    pub fn grammars(&self) -> &'g GrammarSet {
        self.grammars
    }

    /// Tokenize `text` starting in grammar `root`.
    pub fn tokenize(&self, text: &str, root: &str) -> Result<Tokenized, TokenizeError> {
        self.run(text, root, None)
    }

    /// Like [`tokenize`](Self::tokenize), checking `cancel` between
    /// top-level tokens.
    pub fn tokenize_cancellable(
        &self,
        text: &str,
        root: &str,
        cancel: &CancellationToken,
    ) -> Result<Tokenized, TokenizeError> {
        self.run(text, root, Some(cancel))
    }

    /// Tokenize many `(root, text)` requests in parallel. Results keep the
    /// input order.
    pub fn tokenize_batch(&self, inputs: &[(GrammarId, &str)]) -> Vec<Result<Tokenized, TokenizeError>> {
        inputs
            .par_iter()
            .map(|(root, text)| self.tokenize(text, root.as_str()))
            .collect()
    }

    #[tracing::instrument(skip_all, fields(root = root, len = text.len()))]
    fn run(
        &self,
        text: &str,
        root: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Tokenized, TokenizeError> {
        let root = GrammarId::new(root);
        let mut dispatcher = Dispatcher::new(self.grammars, &self.options);
        if let Some(cancel) = cancel {
            dispatcher = dispatcher.with_cancellation(cancel);
        }

        let tokens = dispatcher.run(text, &root)?;
        let diagnostics = dispatcher.into_diagnostics();
        let stream = normalize(tokens, size(text.len()), self.options.merge_adjacent)?;

        if self.options.is_strict() {
            if let Some(first) = diagnostics.into_iter().next() {
                return Err(TokenizeError::Rejected(Box::new(first)));
            }
            return Ok(Tokenized {
                stream,
                diagnostics: Vec::new(),
            });
        }

        for diagnostic in &diagnostics {
            tracing::warn!(code = %diagnostic.code, at = ?diagnostic.range, "{}", diagnostic.message);
        }
        tracing::debug!(
            tokens = stream.tokens().len(),
            diagnostics = diagnostics.len(),
            "tokenized"
        );
        Ok(Tokenized {
            stream,
            diagnostics,
        })
    }
}
