//! Soft diagnostic type
//!
//! Provides:
//! - Diagnostic codes for categorization
//! - Severity levels
//! - Related source locations (e.g. "region opened here")

use text_size::{TextRange, TextSize};

use super::codes::DiagnosticCode;
use crate::base::LineIndex;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Output is still complete but known to be wrong
    Error,
    /// Output was produced by degrading around the anomaly
    #[default]
    Warning,
    /// An informational hint
    Hint,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Hint => "hint",
        }
    }
}

/// Related location information for a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    /// Create a new related info
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A soft anomaly found while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized code
    pub code: DiagnosticCode,
    /// Severity
    pub severity: Severity,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default severity
    pub fn new(message: impl Into<String>, range: TextRange, code: DiagnosticCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: code.default_severity(),
            related: vec![],
        }
    }

    /// Create a diagnostic at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: DiagnosticCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create a builder for more complex diagnostics
    pub fn builder(code: DiagnosticCode) -> DiagnosticBuilder {
        DiagnosticBuilder::new(code)
    }

    /// Add related information
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Check if this diagnostic has related information
    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }

    /// Format the diagnostic with a `line:col` prefix (1-based for humans)
    pub fn format_with(&self, index: &LineIndex) -> String {
        let pos = index.line_col(self.range.start());
        let mut result = format!(
            "{}:{}: {} {}: {}",
            pos.line + 1,
            pos.col + 1,
            self.severity.as_str(),
            self.code,
            self.message
        );
        for related in &self.related {
            let pos = index.line_col(related.range.start());
            result.push_str(&format!(
                "\n  {}:{}: {}",
                pos.line + 1,
                pos.col + 1,
                related.message
            ));
        }
        result
    }
}

/// Builder for creating complex diagnostics
pub struct DiagnosticBuilder {
    code: DiagnosticCode,
    message: Option<String>,
    range: Option<TextRange>,
    severity: Severity,
    related: Vec<RelatedInfo>,
}

impl DiagnosticBuilder {
    /// Create a new builder with a code
    pub fn new(code: DiagnosticCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            severity: code.default_severity(),
            related: vec![],
        }
    }

    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the source range
    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offset (creates an empty range at that position)
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.range = Some(TextRange::empty(offset));
        self
    }

    /// Set the severity
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Add related information
    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self.range.unwrap_or_default(),
            code: self.code,
            severity: self.severity,
            related: self.related,
        }
    }
}
