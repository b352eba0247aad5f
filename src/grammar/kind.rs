//! Token classifications
//!
//! This enum defines every kind a grammar rule may assign to a span. Kinds are
//! shared by all grammars so that a renderer can style markup, scripts and
//! interpolated expressions uniformly.

/// Classification of a token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,

    // =========================================================================
    // CODE
    // =========================================================================
    KEYWORD,
    IDENT,
    TYPE_NAME,
    FUNCTION,
    VARIABLE,        // $var, @ivar, @@cvar
    NUMBER,
    STRING,
    ESCAPE,
    REGEX,
    OPERATOR,
    PUNCTUATION,

    // =========================================================================
    // MARKUP
    // =========================================================================
    TAG,             // <div, </div>, />
    ATTRIBUTE,       // className=
    TEXT,            // character data between tags
    ENTITY,          // &amp;

    // =========================================================================
    // REGIONS
    // =========================================================================
    REGION_MARKER,        // <?php, ?>, <script>
    INTERPOLATION_MARKER, // ${, #{, }, $

    // =========================================================================
    // FALLBACK
    // =========================================================================
    /// No rule matched at this position
    UNCLASSIFIED,
}

impl TokenKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this kind marks a region or interpolation boundary
    pub fn is_marker(self) -> bool {
        matches!(self, Self::REGION_MARKER | Self::INTERPOLATION_MARKER)
    }

    /// Stable lower-case name used by renderers and snapshots
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::COMMENT => "comment",
            Self::KEYWORD => "keyword",
            Self::IDENT => "ident",
            Self::TYPE_NAME => "type",
            Self::FUNCTION => "function",
            Self::VARIABLE => "variable",
            Self::NUMBER => "number",
            Self::STRING => "string",
            Self::ESCAPE => "escape",
            Self::REGEX => "regex",
            Self::OPERATOR => "operator",
            Self::PUNCTUATION => "punctuation",
            Self::TAG => "tag",
            Self::ATTRIBUTE => "attribute",
            Self::TEXT => "text",
            Self::ENTITY => "entity",
            Self::REGION_MARKER => "region-marker",
            Self::INTERPOLATION_MARKER => "interpolation-marker",
            Self::UNCLASSIFIED => "unclassified",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
