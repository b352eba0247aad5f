//! Grammar registry and validation
//!
//! A [`GrammarSet`] is built once per process and shared read-only by every
//! tokenization request. Building it validates that every rule table is
//! usable: no rule can match without consuming input, and every grammar named
//! by an action or interpolation exists.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::{Grammar, GrammarError, GrammarId, Interpolation, Matcher};

/// Immutable collection of grammars keyed by id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GrammarSet {
    grammars: IndexMap<GrammarId, Arc<Grammar>, FxBuildHasher>,
}

impl GrammarSet {
    pub fn builder() -> GrammarSetBuilder {
        GrammarSetBuilder::default()
    }

    /// Look up a grammar by id
    pub fn get(&self, id: &str) -> Option<&Arc<Grammar>> {
        self.grammars.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.grammars.contains_key(id)
    }

    /// Grammar ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &GrammarId> {
        self.grammars.keys()
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

/// Collects grammars and validates them as a whole.
#[derive(Debug, Default)]
pub struct GrammarSetBuilder {
    grammars: Vec<Grammar>,
}

impl GrammarSetBuilder {
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammars.push(grammar);
        self
    }

    pub fn grammars(mut self, grammars: impl IntoIterator<Item = Grammar>) -> Self {
        self.grammars.extend(grammars);
        self
    }

    /// Validate and freeze the set.
    pub fn build(self) -> Result<GrammarSet, GrammarError> {
        let mut grammars: IndexMap<GrammarId, Arc<Grammar>, FxBuildHasher> = IndexMap::default();
        for grammar in self.grammars {
            if grammars.contains_key(grammar.id()) {
                return Err(GrammarError::DuplicateGrammar(grammar.id().clone()));
            }
            grammars.insert(grammar.id().clone(), Arc::new(grammar));
        }

        for grammar in grammars.values() {
            validate_grammar(grammar, |id| grammars.contains_key(id))?;
        }

        tracing::debug!(count = grammars.len(), "built grammar set");
        Ok(GrammarSet { grammars })
    }
}

/// Check one grammar's rules against the set it belongs to.
fn validate_grammar(
    grammar: &Grammar,
    known: impl Fn(&GrammarId) -> bool,
) -> Result<(), GrammarError> {
    let unknown = |rule: usize, target: &GrammarId| GrammarError::UnknownGrammar {
        grammar: grammar.id().clone(),
        rule,
        target: target.clone(),
    };

    for (index, rule) in grammar.rules().iter().enumerate() {
        if rule.matcher.can_match_empty() {
            return Err(GrammarError::EmptyMatch {
                grammar: grammar.id().clone(),
                rule: index,
            });
        }

        if let Some(target) = rule.action.as_ref().and_then(|a| a.target()) {
            if !known(target) {
                return Err(unknown(index, target));
            }
        }

        for interpolation in rule.matcher.interpolations() {
            let empty = match interpolation {
                Interpolation::Braced { open, close, .. } => open.is_empty() || close.is_empty(),
                Interpolation::Sigil { .. } => false,
            };
            if empty {
                return Err(GrammarError::EmptyInterpolation {
                    grammar: grammar.id().clone(),
                    rule: index,
                });
            }
            if let Some(target) = interpolation.grammar() {
                if !known(target) {
                    return Err(unknown(index, target));
                }
            }
        }

        if let Matcher::Heredoc(spec) = &rule.matcher {
            // Identifier flags would be indistinguishable from the label.
            if spec.flags.chars().any(|c| c == '_' || c.is_alphanumeric()) {
                return Err(GrammarError::InvalidHeredocFlags {
                    grammar: grammar.id().clone(),
                    rule: index,
                });
            }
        }
    }
    Ok(())
}
