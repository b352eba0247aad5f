//! Region dispatcher
//!
//! Drives the [`Scanner`] over a range of input while maintaining a
//! [`RegionStack`]. Each time the scanner yields a token whose rule carries an
//! action, the dispatcher applies it and re-seats the scanner with the new
//! top-of-stack grammar at the same cursor.
//!
//! Region boundaries follow one convention: an entered region starts at the
//! end of its opening token, and an exited region ends at the end of its
//! closing token. Marker tokens belong to whichever grammar matched them.


use std::ops::Range;
use std::sync::Arc;

use text_size::TextRange;
use tokio_util::sync::CancellationToken;

use crate::base::size;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::grammar::{Grammar, GrammarId, GrammarSet, RuleAction};
use crate::interpolation;
use crate::lexer::Scanner;
use crate::region::{RegionError, RegionStack};
use crate::stream::Token;
use crate::tokenize::{TokenizeError, TokenizeOptions};

/// One tokenization run: grammars, limits, cancellation and the soft
/// diagnostics gathered so far.
#[derive(Debug)]
pub struct Dispatcher<'g, 'c> {
    grammars: &'g GrammarSet,
    options: &'g TokenizeOptions,
    cancel: Option<&'c CancellationToken>,
    diagnostics: Vec<Diagnostic>,
}

impl<'g, 'c> Dispatcher<'g, 'c> {
    pub fn new(grammars: &'g GrammarSet, options: &'g TokenizeOptions) -> Self {
        Self {
            grammars,
            options,
            cancel: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check `cancel` between top-level tokens.
    pub fn with_cancellation(mut self, cancel: &'c CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Diagnostics collected so far, in source order of discovery
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Look up a grammar of the set.
    pub fn grammar(&self, id: &GrammarId) -> Result<Arc<Grammar>, TokenizeError> {
        self.grammars
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| TokenizeError::UnknownGrammar(id.clone()))
    }

    /// Tokenize all of `text` starting in `root`.
    pub fn run(&mut self, text: &str, root: &GrammarId) -> Result<Vec<Token>, TokenizeError> {
        let grammar = self.grammar(root)?;
        self.run_range(text, &grammar, TextRange::up_to(size(text.len())), 0)
    }

    /// Tokenize `range` of `text` with its own region stack rooted at `root`.
    ///
    /// `depth` is the interpolation depth: 0 for the document, one more for
    /// every enclosing interpolation zone. The returned tokens cover `range`
    /// exactly.
    pub fn run_range(
        &mut self,
        text: &str,
        root: &Arc<Grammar>,
        range: TextRange,
        depth: usize,
    ) -> Result<Vec<Token>, TokenizeError> {
        let Range { start, end } = Range::<usize>::from(range);
        let budget = self.options.max_interpolation_depth.saturating_sub(depth);
        let mut stack = RegionStack::new(Arc::clone(root), range.start(), self.options.max_region_depth);
        let mut tokens = Vec::new();
        let mut cursor = start;

        while cursor < end {
            let grammar = Arc::clone(stack.current());
            let mut scanner = Scanner::new(&grammar, text, cursor, end, budget);

            while let Some(raw) = scanner.next() {
                if depth == 0 {
                    self.check_cancelled()?;
                }
                self.diagnostics.extend(scanner.take_diagnostics());
                tokens.push(interpolation::splice(self, text, &grammar, &raw, depth)?);
                if let Some(action) = &raw.action {
                    self.apply(&mut stack, action, raw.range)?;
                }
            }
            cursor = scanner.cursor();
        }

        for region in stack.close_all(range.end()) {
            self.diagnostics.push(
                Diagnostic::builder(DiagnosticCode::UnterminatedRegion)
                    .message(format!("`{}` region is never closed", region.id()))
                    .range(TextRange::new(region.start, range.end()))
                    .related("region opened here", region.opener)
                    .build(),
            );
        }

        Ok(tokens)
    }

    fn apply(
        &mut self,
        stack: &mut RegionStack,
        action: &RuleAction,
        opener: TextRange,
    ) -> Result<(), TokenizeError> {
        let at = opener.end();
        match action {
            RuleAction::Enter(id) => self.enter(stack, id, opener),
            RuleAction::Exit => {
                if stack.is_root() {
                    tracing::trace!(at = u32::from(at), "exit at root ignored");
                    return Ok(());
                }
                stack.pop(at)?;
                Ok(())
            }
            RuleAction::Switch(id) => {
                tracing::trace!(to = %id, at = u32::from(at), "switch region");
                if !stack.is_root() {
                    stack.pop(at)?;
                }
                self.enter(stack, id, opener)
            }
        }
    }

    fn enter(
        &mut self,
        stack: &mut RegionStack,
        id: &GrammarId,
        opener: TextRange,
    ) -> Result<(), TokenizeError> {
        let grammar = self.grammar(id)?;
        match stack.push(grammar, opener.end(), opener) {
            Ok(()) => Ok(()),
            Err(RegionError::Recursive(id)) => {
                self.diagnostics.push(
                    Diagnostic::builder(DiagnosticCode::RecursiveRegion)
                        .message(format!("`{id}` is already active; staying in `{}`", stack.current().id()))
                        .range(opener)
                        .build(),
                );
                Ok(())
            }
            Err(RegionError::DepthLimit { limit }) => {
                self.diagnostics.push(
                    Diagnostic::builder(DiagnosticCode::NestingLimit)
                        .message(format!("region depth limit of {limit} reached; `{id}` not entered"))
                        .range(opener)
                        .build(),
                );
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    fn check_cancelled(&self) -> Result<(), TokenizeError> {
        match self.cancel {
            Some(cancel) if cancel.is_cancelled() => Err(TokenizeError::Cancelled),
            _ => Ok(()),
        }
    }
}
