//! Diagnostic code definitions for soft tokenization anomalies
//!
//! Codes follow a naming convention: R{category}{number}
//! - R01xx: Region errors (embedded grammars)
//! - R02xx: Interpolation errors (zones inside string-like tokens)

use std::fmt;

use super::Severity;

/// Codes for diagnostics reported alongside a token stream
///
/// Every code here describes an *input*-caused anomaly that the tokenizer
/// degraded around. Internal invariant violations are hard errors and live in
/// [`crate::tokenize::TokenizeError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    // =========================================================================
    // R01xx: Region errors
    // =========================================================================
    /// An embedded region or string-like literal was still open at the end of
    /// its range and was closed implicitly
    UnterminatedRegion,
    /// An enter action named a grammar already on the region stack and the
    /// grammar is not marked re-entrant
    RecursiveRegion,

    // =========================================================================
    // R02xx: Interpolation errors
    // =========================================================================
    /// An interpolation opener had no matching closer before the host
    /// terminator; the zone was kept as plain string content
    UnmatchedInterpolationCloser,
    /// A region or interpolation would exceed the configured nesting limit
    NestingLimit,
}

impl DiagnosticCode {
    /// Get the code as a string (e.g., "R0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnterminatedRegion => "R0101",
            Self::RecursiveRegion => "R0102",
            Self::UnmatchedInterpolationCloser => "R0201",
            Self::NestingLimit => "R0202",
        }
    }

    /// Get the default message template for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UnterminatedRegion => "unterminated region",
            Self::RecursiveRegion => "grammar is already active and not re-entrant",
            Self::UnmatchedInterpolationCloser => "interpolation has no matching closer",
            Self::NestingLimit => "nesting limit reached",
        }
    }

    /// Get the category description
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::UnterminatedRegion | Self::RecursiveRegion => "region error",
            Self::UnmatchedInterpolationCloser | Self::NestingLimit => "interpolation error",
        }
    }

    /// Severity used when a diagnostic is created from this code alone
    pub fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
