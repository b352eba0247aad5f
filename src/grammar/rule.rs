//! Rules and grammars
//!
//! A [`Grammar`] is an ordered rule table. Rule order is part of the grammar's
//! meaning: the first rule whose matcher succeeds at the cursor wins.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

use super::{GrammarError, Matcher, TokenKind};
use super::matcher::{CharClass, DelimitedSpec, HeredocSpec, Repeat};

/// Name of a grammar inside a [`GrammarSet`](super::GrammarSet).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrammarId(SmolStr);

impl GrammarId {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GrammarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GrammarId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GrammarId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for GrammarId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Region change requested when a rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Push the named grammar at the end of the matched token
    Enter(GrammarId),
    /// Pop the current region at the end of the matched token
    Exit,
    /// Pop the current region, then push the named grammar, at the end of
    /// the matched token
    Switch(GrammarId),
}

impl RuleAction {
    /// Grammar this action pushes, if any
    pub fn target(&self) -> Option<&GrammarId> {
        match self {
            Self::Enter(id) | Self::Switch(id) => Some(id),
            Self::Exit => None,
        }
    }
}

/// One entry of a grammar's rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub matcher: Matcher,
    pub action: Option<RuleAction>,
}

impl Rule {
    pub fn new(kind: TokenKind, matcher: Matcher) -> Self {
        Self {
            kind,
            matcher,
            action: None,
        }
    }

    pub fn literal(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self::new(kind, Matcher::Literal(text.into()))
    }

    pub fn keyword(text: impl Into<SmolStr>) -> Self {
        Self::new(TokenKind::KEYWORD, Matcher::Keyword(text.into()))
    }

    pub fn chars(kind: TokenKind, class: CharClass) -> Self {
        Self::new(
            kind,
            Matcher::Chars {
                class,
                repeat: Repeat::OneOrMore,
            },
        )
    }

    pub fn one_of(kind: TokenKind, set: impl Into<SmolStr>) -> Self {
        Self::new(
            kind,
            Matcher::Chars {
                class: CharClass::Set(set.into()),
                repeat: Repeat::One,
            },
        )
    }

    pub fn pattern(kind: TokenKind, pattern: &str) -> Result<Self, GrammarError> {
        Ok(Self::new(kind, Matcher::pattern(pattern)?))
    }

    pub fn delimited(kind: TokenKind, spec: DelimitedSpec) -> Self {
        Self::new(kind, Matcher::Delimited(spec))
    }

    pub fn heredoc(kind: TokenKind, spec: HeredocSpec) -> Self {
        Self::new(kind, Matcher::Heredoc(spec))
    }

    /// Push `grammar` after this rule's token
    pub fn enter(mut self, grammar: impl Into<GrammarId>) -> Self {
        self.action = Some(RuleAction::Enter(grammar.into()));
        self
    }

    /// Pop the current region after this rule's token
    pub fn exit(mut self) -> Self {
        self.action = Some(RuleAction::Exit);
        self
    }

    /// Replace the current region with `grammar` after this rule's token
    pub fn switch(mut self, grammar: impl Into<GrammarId>) -> Self {
        self.action = Some(RuleAction::Switch(grammar.into()));
        self
    }
}

/// An immutable, ordered rule table for one language.
#[derive(Debug, Clone)]
pub struct Grammar {
    id: GrammarId,
    rules: Vec<Rule>,
    reentrant: bool,
}

impl Grammar {
    pub fn builder(id: impl Into<GrammarId>) -> GrammarBuilder {
        GrammarBuilder {
            id: id.into(),
            rules: Vec::new(),
            reentrant: false,
        }
    }

    pub fn id(&self) -> &GrammarId {
        &self.id
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the grammar may appear more than once on a region stack
    pub fn is_reentrant(&self) -> bool {
        self.reentrant
    }
}

/// Builder for [`Grammar`].
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    id: GrammarId,
    rules: Vec<Rule>,
    reentrant: bool,
}

impl GrammarBuilder {
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Append all rules of `other`, keeping their order.
    ///
    /// Rules added before the include take precedence over the included ones,
    /// which lets an embedded variant put its exit rule in front of the host
    /// language's rules.
    pub fn include(mut self, other: &Grammar) -> Self {
        self.rules.extend(other.rules.iter().cloned());
        self
    }

    /// Allow this grammar to be pushed while already on the region stack
    pub fn reentrant(mut self, reentrant: bool) -> Self {
        self.reentrant = reentrant;
        self
    }

    pub fn build(self) -> Grammar {
        Grammar {
            id: self.id,
            rules: self.rules,
            reentrant: self.reentrant,
        }
    }
}
