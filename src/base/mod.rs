//! Foundation types for the strata toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other strata modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};

/// Convert a `usize` byte offset into a [`TextSize`].
///
/// Inputs larger than `u32::MAX` bytes are not supported by `text-size`;
/// offsets are saturated rather than wrapped.
#[inline]
pub fn size(offset: usize) -> TextSize {
    TextSize::new(u32::try_from(offset).unwrap_or(u32::MAX))
}

/// Build a [`TextRange`] from two `usize` byte offsets.
#[inline]
pub fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(size(start), size(end))
}
