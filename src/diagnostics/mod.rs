//! Soft diagnostics for tokenization
//!
//! Input-caused anomalies never fail a tokenization run. They degrade to a
//! best-effort, fully covering token stream plus one [`Diagnostic`] each:
//! - Categorized codes for filtering
//! - Severity levels
//! - Related span tracking (e.g., "region opened here" for unterminated regions)

mod codes;
mod diagnostic;

pub use codes::DiagnosticCode;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, RelatedInfo, Severity};
