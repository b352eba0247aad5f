//! Declarative grammar definitions
//!
//! A grammar is pure data: an ordered table of [`Rule`]s, each pairing a
//! [`TokenKind`] with a [`Matcher`] and an optional [`RuleAction`] that opens
//! or closes an embedded region. New languages are added by supplying new
//! tables, never new code paths.
//!
//! ```text
//! GrammarSet ──┬── "html" : [ <script…>  → Enter("js-in-html"), tags, text, … ]
//!              ├── "js-in-html" : [ </script> → Exit, include("js") ]
//!              └── "js"   : [ keywords, `…${expr}…` strings, numbers, … ]
//! ```

mod error;
mod kind;
mod matcher;
mod rule;
mod set;

pub use error::GrammarError;
pub use kind::TokenKind;
pub use matcher::{CharClass, DelimitedSpec, HeredocSpec, Interpolation, Matcher, Repeat};
pub use rule::{Grammar, GrammarBuilder, GrammarId, Rule, RuleAction};
pub use set::{GrammarSet, GrammarSetBuilder};

pub(crate) use matcher::ident_run;
