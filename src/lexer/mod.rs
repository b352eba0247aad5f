//! Scanner over a single grammar
//!
//! Given a grammar, an input and a cursor, the scanner yields tokens by trying
//! the grammar's rules in order. It knows nothing about regions: it only
//! reports, through [`RawToken::action`], that a matched rule wants the active
//! grammar to change.

mod literal;
mod scanner;

pub use scanner::{RawToken, Scanner};
