//! Hard tokenization errors

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::grammar::GrammarId;
use crate::region::RegionError;
use crate::stream::CoverageViolation;

/// A run that produced no token stream.
///
/// Malformed input never causes one of these under the lenient policy; they
/// signal a caller mistake, an internal defect or cancellation.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The requested grammar is not part of the set.
    #[error("unknown grammar `{0}`")]
    UnknownGrammar(GrammarId),

    /// The region stack was driven into an invalid state.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// The produced tokens do not partition the input.
    #[error("token stream violates coverage: {0}")]
    CoverageViolation(#[from] CoverageViolation),

    /// The cancellation token fired before the run finished.
    #[error("tokenization cancelled")]
    Cancelled,

    /// The strict policy turned a soft anomaly into a failure.
    #[error("rejected under strict policy: {}", .0.format())]
    Rejected(Box<Diagnostic>),
}

impl TokenizeError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The diagnostic behind a strict-policy rejection
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Rejected(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
