//! Region stack
//!
//! Nested grammars are tracked as an explicit stack of `(grammar, offset)`
//! entries rather than as recursive calls, so nesting depth is bounded and
//! inspectable. The root region is held apart from the nested ones: it can
//! never be popped, so the stack can never become empty.

use std::sync::Arc;

use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::grammar::{Grammar, GrammarId};

/// An active (or closed) span governed by one grammar.
#[derive(Debug, Clone)]
pub struct Region {
    pub grammar: Arc<Grammar>,
    pub start: TextSize,
    /// Set when the region is popped
    pub end: Option<TextSize>,
    /// Token whose rule opened the region; empty for the root
    pub opener: TextRange,
}

impl Region {
    fn open(grammar: Arc<Grammar>, start: TextSize, opener: TextRange) -> Self {
        Self {
            grammar,
            start,
            end: None,
            opener,
        }
    }

    pub fn id(&self) -> &GrammarId {
        self.grammar.id()
    }

    /// Closed range, if the region has been popped
    pub fn range(&self) -> Option<TextRange> {
        self.end.map(|end| TextRange::new(self.start, end))
    }
}

/// Errors raised by [`RegionStack`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// A pop was attempted with only the root region left.
    #[error("cannot pop the root region (depth {depth})")]
    UnbalancedRegion { depth: usize },

    /// The grammar is already active and does not allow re-entry.
    #[error("grammar `{0}` is already on the region stack")]
    Recursive(GrammarId),

    /// The push would exceed the maximum nesting depth.
    #[error("region depth limit of {limit} reached")]
    DepthLimit { limit: usize },
}

/// Ordered stack of active grammars for one tokenization request.
#[derive(Debug, Clone)]
pub struct RegionStack {
    root: Region,
    nested: Vec<Region>,
    max_depth: usize,
}

impl RegionStack {
    /// Create a stack whose root grammar starts at `at`.
    ///
    /// `max_depth` counts the root; a value below 1 is treated as 1.
    pub fn new(root: Arc<Grammar>, at: TextSize, max_depth: usize) -> Self {
        Self {
            root: Region::open(root, at, TextRange::empty(at)),
            nested: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Grammar currently in effect
    pub fn current(&self) -> &Arc<Grammar> {
        &self.top().grammar
    }

    /// Innermost open region
    pub fn top(&self) -> &Region {
        self.nested.last().unwrap_or(&self.root)
    }

    /// Number of open regions, root included
    pub fn depth(&self) -> usize {
        1 + self.nested.len()
    }

    pub fn is_root(&self) -> bool {
        self.nested.is_empty()
    }

    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Whether `id` is open anywhere on the stack
    pub fn contains(&self, id: &GrammarId) -> bool {
        self.root.id() == id || self.nested.iter().any(|r| r.id() == id)
    }

    /// Enter `grammar` at `at`.
    pub fn push(
        &mut self,
        grammar: Arc<Grammar>,
        at: TextSize,
        opener: TextRange,
    ) -> Result<(), RegionError> {
        if !grammar.is_reentrant() && self.contains(grammar.id()) {
            return Err(RegionError::Recursive(grammar.id().clone()));
        }
        if self.depth() >= self.max_depth {
            return Err(RegionError::DepthLimit {
                limit: self.max_depth,
            });
        }
        tracing::trace!(grammar = %grammar.id(), at = u32::from(at), depth = self.depth() + 1, "push region");
        self.nested.push(Region::open(grammar, at, opener));
        Ok(())
    }

    /// Close the innermost region at `at` and return it.
    pub fn pop(&mut self, at: TextSize) -> Result<Region, RegionError> {
        let mut region = self.nested.pop().ok_or(RegionError::UnbalancedRegion {
            depth: self.depth(),
        })?;
        region.end = Some(at);
        tracing::trace!(grammar = %region.id(), at = u32::from(at), depth = self.depth(), "pop region");
        Ok(region)
    }

    /// Force-close every non-root region at `at`, innermost first.
    pub fn close_all(&mut self, at: TextSize) -> Vec<Region> {
        let mut closed = Vec::with_capacity(self.nested.len());
        while let Ok(region) = self.pop(at) {
            closed.push(region);
        }
        closed
    }
}
