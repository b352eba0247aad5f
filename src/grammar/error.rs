use thiserror::Error;

use super::GrammarId;

/// Errors found while building or validating grammars.
///
/// These describe defects in grammar *data*, never in tokenized input.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two grammars share one id.
    #[error("grammar `{0}` is defined more than once")]
    DuplicateGrammar(GrammarId),

    /// A rule action or interpolation names a grammar that is not in the set.
    #[error("rule {rule} of grammar `{grammar}` refers to unknown grammar `{target}`")]
    UnknownGrammar {
        grammar: GrammarId,
        rule: usize,
        target: GrammarId,
    },

    /// A rule could match without consuming input.
    #[error("rule {rule} of grammar `{grammar}` can match the empty string")]
    EmptyMatch { grammar: GrammarId, rule: usize },

    /// An interpolation form has an empty opener or closer.
    #[error("rule {rule} of grammar `{grammar}` has an empty interpolation delimiter")]
    EmptyInterpolation { grammar: GrammarId, rule: usize },

    /// A heredoc declares flag characters that could start a label.
    #[error("rule {rule} of grammar `{grammar}` has heredoc flags that overlap labels")]
    InvalidHeredocFlags { grammar: GrammarId, rule: usize },
}
