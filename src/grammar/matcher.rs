//! Rule matchers
//!
//! A matcher decides whether a rule applies at the cursor and how far its
//! token extends. All matchers are anchored: they either match starting
//! exactly at the cursor or not at all, and never read past the range limit.

use regex::Regex;
use smol_str::SmolStr;

use super::{GrammarError, GrammarId};

/// A character class usable by [`Matcher::Chars`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// Any Unicode whitespace, newlines included
    Whitespace,
    /// Spaces and tabs only
    InlineSpace,
    /// ASCII decimal digits
    Digit,
    /// ASCII hexadecimal digits
    HexDigit,
    /// Unicode identifier characters (XID_Start or `_`, then XID_Continue)
    Ident,
    /// Any character contained in the set
    Set(SmolStr),
    /// Any character NOT contained in the set
    NotSet(SmolStr),
}

impl CharClass {
    /// Check whether `c` may appear at the start of a run
    pub fn starts_with(&self, c: char) -> bool {
        match self {
            Self::Ident => is_ident_start(c),
            _ => self.continues_with(c),
        }
    }

    /// Check whether `c` may appear after the first character of a run
    pub fn continues_with(&self, c: char) -> bool {
        match self {
            Self::Whitespace => c.is_whitespace(),
            Self::InlineSpace => c == ' ' || c == '\t',
            Self::Digit => c.is_ascii_digit(),
            Self::HexDigit => c.is_ascii_hexdigit(),
            Self::Ident => is_ident_continue(c),
            Self::Set(set) => set.contains(c),
            Self::NotSet(set) => !set.contains(c),
        }
    }
}

/// How many characters a [`Matcher::Chars`] run consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Exactly one character
    One,
    /// The longest non-empty run
    #[default]
    OneOrMore,
}

/// An embedded-expression form inside a string-like token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpolation {
    /// `${ expr }`, `#{ expr }`: the expression runs to the matching `close`.
    ///
    /// Nesting is counted on the bracket `close` pairs with, so
    /// `${ {a: 1} }` closes on the second `}` and `{$a[$i]}` on the only one.
    /// String literals inside the expression are skipped whole.
    Braced {
        open: SmolStr,
        close: SmolStr,
        /// Expression grammar; `None` means the host grammar
        grammar: Option<GrammarId>,
    },
    /// `$name`: the expression is a single identifier run after the sigil
    Sigil {
        sigil: char,
        grammar: Option<GrammarId>,
    },
}

impl Interpolation {
    /// `${ … }` with the host grammar as expression grammar
    pub fn dollar_brace() -> Self {
        Self::braced("${", "}")
    }

    /// `#{ … }` with the host grammar as expression grammar
    pub fn hash_brace() -> Self {
        Self::braced("#{", "}")
    }

    pub fn braced(open: impl Into<SmolStr>, close: impl Into<SmolStr>) -> Self {
        Self::Braced {
            open: open.into(),
            close: close.into(),
            grammar: None,
        }
    }

    pub fn sigil(sigil: char) -> Self {
        Self::Sigil {
            sigil,
            grammar: None,
        }
    }

    /// Tokenize the expression with `grammar` instead of the host grammar
    pub fn with_grammar(mut self, id: impl Into<GrammarId>) -> Self {
        match &mut self {
            Self::Braced { grammar, .. } | Self::Sigil { grammar, .. } => {
                *grammar = Some(id.into())
            }
        }
        self
    }

    /// Expression grammar override, if any
    pub fn grammar(&self) -> Option<&GrammarId> {
        match self {
            Self::Braced { grammar, .. } | Self::Sigil { grammar, .. } => grammar.as_ref(),
        }
    }
}

/// A string-like literal with open/close delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedSpec {
    pub open: SmolStr,
    pub close: SmolStr,
    /// Escape character; the character after it is never a delimiter
    pub escape: Option<char>,
    /// Whether the literal may span lines. Single-line literals stop before
    /// an unescaped newline when unterminated.
    pub multiline: bool,
    /// Tried in order at every body position
    pub interpolations: Vec<Interpolation>,
}

impl DelimitedSpec {
    pub fn new(open: impl Into<SmolStr>, close: impl Into<SmolStr>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            escape: Some('\\'),
            multiline: false,
            interpolations: Vec::new(),
        }
    }

    /// Same open and close delimiter (`"…"`, `` `…` ``)
    pub fn quoted(quote: impl Into<SmolStr>) -> Self {
        let quote = quote.into();
        Self::new(quote.clone(), quote)
    }

    pub fn escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn interpolate(mut self, interpolation: Interpolation) -> Self {
        self.interpolations.push(interpolation);
        self
    }
}

/// A heredoc: `<<LABEL`, `<<~LABEL` or `<<-LABEL`, with the body on the
/// following lines up to a line holding only the label.
///
/// The token spans from the introducer to the end of the terminating label.
/// A quoted label (`<<~'EOS'`) disables interpolation; `"EOS"` keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeredocSpec {
    pub intro: SmolStr,
    /// Flag characters allowed right after the introducer. Any flag permits
    /// an indented terminator line.
    pub flags: SmolStr,
    pub escape: Option<char>,
    pub interpolations: Vec<Interpolation>,
}

impl HeredocSpec {
    pub fn new(intro: impl Into<SmolStr>) -> Self {
        Self {
            intro: intro.into(),
            flags: SmolStr::default(),
            escape: Some('\\'),
            interpolations: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: impl Into<SmolStr>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn interpolate(mut self, interpolation: Interpolation) -> Self {
        self.interpolations.push(interpolation);
        self
    }
}

/// How a rule recognizes its token.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact text
    Literal(SmolStr),
    /// Exact text not followed by an identifier character
    Keyword(SmolStr),
    /// A run of characters from a class
    Chars { class: CharClass, repeat: Repeat },
    /// A regular expression anchored at the cursor
    Pattern(Regex),
    /// A string-like literal, possibly with interpolation zones
    Delimited(DelimitedSpec),
    /// A heredoc literal, possibly with interpolation zones
    Heredoc(HeredocSpec),
}

impl Matcher {
    /// Compile a bounded pattern. The pattern is anchored at the cursor.
    pub fn pattern(pattern: &str) -> Result<Self, GrammarError> {
        let anchored = format!(r"\A(?:{pattern})");
        let regex = Regex::new(&anchored).map_err(|source| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::Pattern(regex))
    }

    /// Whether this matcher could succeed without consuming input.
    ///
    /// Such matchers would break forward progress and are rejected when a
    /// [`GrammarSet`](super::GrammarSet) is built.
    pub fn can_match_empty(&self) -> bool {
        match self {
            Self::Literal(text) | Self::Keyword(text) => text.is_empty(),
            Self::Chars { class, .. } => matches!(class, CharClass::Set(s) if s.is_empty()),
            Self::Pattern(regex) => regex.is_match(""),
            Self::Delimited(spec) => spec.open.is_empty() || spec.close.is_empty(),
            Self::Heredoc(spec) => spec.intro.is_empty(),
        }
    }

    /// Interpolation forms this matcher may produce zones for
    pub fn interpolations(&self) -> &[Interpolation] {
        match self {
            Self::Delimited(spec) => &spec.interpolations,
            Self::Heredoc(spec) => &spec.interpolations,
            _ => &[],
        }
    }

    /// Try the simple (zone-free) matchers at `cursor`.
    ///
    /// Returns the exclusive end offset of the match. `Delimited` and
    /// `Heredoc` are handled by the scanner because they produce zones and
    /// diagnostics.
    pub(crate) fn match_simple(&self, text: &str, cursor: usize) -> Option<usize> {
        let rest = &text[cursor..];
        match self {
            Self::Literal(lit) => rest.starts_with(lit.as_str()).then(|| cursor + lit.len()),
            Self::Keyword(kw) => {
                if !rest.starts_with(kw.as_str()) {
                    return None;
                }
                let after = rest[kw.len()..].chars().next();
                match after {
                    Some(c) if is_ident_continue(c) => None,
                    _ => Some(cursor + kw.len()),
                }
            }
            Self::Chars { class, repeat } => {
                let mut chars = rest.char_indices();
                let (_, first) = chars.next()?;
                if !class.starts_with(first) {
                    return None;
                }
                let mut end = first.len_utf8();
                if *repeat == Repeat::OneOrMore {
                    for (i, c) in chars {
                        if !class.continues_with(c) {
                            break;
                        }
                        end = i + c.len_utf8();
                    }
                }
                Some(cursor + end)
            }
            Self::Pattern(regex) => regex
                .find(rest)
                .filter(|m| m.start() == 0 && m.end() > 0)
                .map(|m| cursor + m.end()),
            Self::Delimited(_) | Self::Heredoc(_) => None,
        }
    }
}

/// Identifier start: XID_Start, `_` or `$`
pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || unicode_ident::is_xid_start(c)
}

/// Identifier continue: XID_Continue or `$`
pub(crate) fn is_ident_continue(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// Length in bytes of the identifier run at the start of `text`, if any.
///
/// Unlike [`is_ident_start`], `$` is not accepted: this is used after a sigil.
pub(crate) fn ident_run(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || unicode_ident::is_xid_start(c) => {}
        _ => return 0,
    }
    text.char_indices()
        .find(|&(_, c)| !(c == '_' || unicode_ident::is_xid_continue(c)))
        .map_or(text.len(), |(i, _)| i)
}
