//! Test grammars for a handful of real languages.
//!
//! These are deliberately small: enough structure to exercise embedding,
//! interpolation, heredocs and tag switching against the fixture files, not
//! complete highlighters.

use once_cell::sync::Lazy;
use strata::{
    CharClass, DelimitedSpec, Grammar, GrammarSet, HeredocSpec, Interpolation, Rule, TokenKind,
};

/// Every test grammar, validated once per test binary.
pub static GRAMMARS: Lazy<GrammarSet> = Lazy::new(|| {
    GrammarSet::builder()
        .grammars([
            html(),
            js(),
            js_in_html(),
            php(),
            ruby(),
            kotlin(),
            jsx(),
            jsx_head(),
            jsx_body(),
            jsx_expr(),
        ])
        .build()
        .expect("test grammars are valid")
});

fn pattern(kind: TokenKind, pattern: &str) -> Rule {
    Rule::pattern(kind, pattern).expect("test pattern compiles")
}

fn keywords<'a>(words: &'a [&'a str]) -> impl Iterator<Item = Rule> + 'a {
    words.iter().map(|w| Rule::keyword(*w))
}

pub fn html() -> Grammar {
    Grammar::builder("html")
        .rule(pattern(TokenKind::COMMENT, r"<!--(?s:.*?)-->"))
        .rule(pattern(TokenKind::TAG, r"<script\b[^>]*>").enter("js-in-html"))
        .rule(pattern(TokenKind::REGION_MARKER, r"<\?php\b").enter("php"))
        .rule(pattern(TokenKind::TAG, r"</?[A-Za-z][^>]*>"))
        .rule(pattern(TokenKind::ENTITY, r"&(?:[A-Za-z]+|#[0-9]+);"))
        .rule(pattern(TokenKind::TEXT, r"[^<&]+"))
        .build()
}

fn js_rules() -> Grammar {
    Grammar::builder("js-core")
        .rule(Rule::chars(TokenKind::WHITESPACE, CharClass::Whitespace))
        .rule(pattern(TokenKind::COMMENT, r"//[^\n]*"))
        .rule(pattern(TokenKind::COMMENT, r"/\*(?s:.*?)\*/"))
        .rules(keywords(&[
            "async", "await", "break", "case", "class", "const", "constructor", "continue",
            "default", "else", "export", "extends", "for", "from", "function", "if", "import",
            "let", "new", "of", "return", "static", "switch", "this", "try", "catch", "var",
            "while", "yield",
        ]))
        .rule(Rule::chars(TokenKind::IDENT, CharClass::Ident))
        .rule(pattern(TokenKind::NUMBER, r"[0-9][0-9_]*(?:\.[0-9]+)?n?"))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::quoted("`")
                .multiline(true)
                .interpolate(Interpolation::dollar_brace()),
        ))
        .rule(Rule::delimited(TokenKind::STRING, DelimitedSpec::quoted("\"")))
        .rule(Rule::delimited(TokenKind::STRING, DelimitedSpec::quoted("'")))
        .rule(pattern(TokenKind::OPERATOR, r"[-+*/%=<>!&|?:^~]+"))
        .rule(Rule::one_of(TokenKind::PUNCTUATION, "(){}[];,.#@"))
        .build()
}

pub fn js() -> Grammar {
    let core = js_rules();
    Grammar::builder("js").include(&core).build()
}

fn js_in_html() -> Grammar {
    let core = js_rules();
    Grammar::builder("js-in-html")
        .rule(Rule::literal(TokenKind::TAG, "</script>").exit())
        .include(&core)
        .build()
}

pub fn php() -> Grammar {
    Grammar::builder("php")
        .rule(Rule::literal(TokenKind::REGION_MARKER, "?>").exit())
        .rule(Rule::chars(TokenKind::WHITESPACE, CharClass::Whitespace))
        .rule(pattern(TokenKind::COMMENT, r"(?://|#)[^\n]*"))
        .rule(pattern(TokenKind::COMMENT, r"/\*(?s:.*?)\*/"))
        .rule(pattern(TokenKind::VARIABLE, r"\$[A-Za-z_][A-Za-z0-9_]*"))
        .rules(keywords(&[
            "abstract", "class", "const", "declare", "echo", "extends", "function", "interface",
            "namespace", "new", "private", "protected", "public", "return", "static", "trait",
            "use", "void",
        ]))
        .rule(Rule::chars(TokenKind::IDENT, CharClass::Ident))
        .rule(Rule::chars(TokenKind::NUMBER, CharClass::Digit))
        .rule(Rule::heredoc(
            TokenKind::STRING,
            HeredocSpec::new("<<<").interpolate(Interpolation::sigil('$')),
        ))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::quoted("\"")
                .multiline(true)
                .interpolate(Interpolation::braced("{$", "}"))
                .interpolate(Interpolation::sigil('$')),
        ))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::quoted("'").multiline(true),
        ))
        .rule(pattern(TokenKind::OPERATOR, r"[-+*/%=<>!&|?:.^~]+"))
        .rule(Rule::one_of(TokenKind::PUNCTUATION, "(){}[];,\\@"))
        .build()
}

pub fn ruby() -> Grammar {
    Grammar::builder("ruby")
        .rule(Rule::chars(TokenKind::WHITESPACE, CharClass::Whitespace))
        .rule(pattern(TokenKind::COMMENT, r"#[^\n]*"))
        .rule(Rule::heredoc(
            TokenKind::STRING,
            HeredocSpec::new("<<")
                .flags("~-")
                .interpolate(Interpolation::hash_brace()),
        ))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::quoted("\"")
                .multiline(true)
                .interpolate(Interpolation::hash_brace()),
        ))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::new("%Q(", ")")
                .multiline(true)
                .interpolate(Interpolation::hash_brace()),
        ))
        .rule(Rule::delimited(
            TokenKind::STRING,
            DelimitedSpec::quoted("'").multiline(true),
        ))
        .rule(pattern(TokenKind::VARIABLE, r"@@?[A-Za-z_]\w*|\$\w+"))
        .rule(pattern(TokenKind::STRING, r":[A-Za-z_]\w*[?!]?"))
        .rules(keywords(&[
            "begin", "class", "def", "do", "else", "elsif", "end", "ensure", "for", "if", "in",
            "lambda", "module", "puts", "rescue", "return", "self", "then", "unless", "until",
            "when", "while", "yield",
        ]))
        .rule(pattern(TokenKind::IDENT, r"[A-Za-z_]\w*[?!]?"))
        .rule(pattern(TokenKind::NUMBER, r"[0-9][0-9_]*(?:\.[0-9]+)?"))
        .rule(pattern(TokenKind::OPERATOR, r"[-+*/%=<>!&|?:^~.]+"))
        .rule(Rule::one_of(TokenKind::PUNCTUATION, "(){}[];,"))
        .build()
}

pub fn kotlin() -> Grammar {
    let template = |quote: &str| {
        DelimitedSpec::quoted(quote)
            .interpolate(Interpolation::dollar_brace())
            .interpolate(Interpolation::sigil('$'))
    };
    Grammar::builder("kotlin")
        .rule(Rule::chars(TokenKind::WHITESPACE, CharClass::Whitespace))
        .rule(pattern(TokenKind::COMMENT, r"//[^\n]*"))
        .rule(pattern(TokenKind::COMMENT, r"/\*(?s:.*?)\*/"))
        .rule(Rule::delimited(
            TokenKind::STRING,
            template("\"\"\"").escape(None).multiline(true),
        ))
        .rule(Rule::delimited(TokenKind::STRING, template("\"")))
        .rule(Rule::delimited(TokenKind::STRING, DelimitedSpec::quoted("'")))
        .rules(keywords(&[
            "class", "data", "else", "enum", "fun", "if", "import", "interface", "is", "object",
            "override", "package", "private", "return", "sealed", "val", "var", "when",
        ]))
        .rule(Rule::chars(TokenKind::IDENT, CharClass::Ident))
        .rule(pattern(TokenKind::NUMBER, r"[0-9][0-9_]*(?:\.[0-9]+)?[fFL]?"))
        .rule(pattern(TokenKind::OPERATOR, r"[-+*/%=<>!&|?:^~.]+"))
        .rule(Rule::one_of(TokenKind::PUNCTUATION, "(){}[];,@"))
        .build()
}

/// JavaScript with JSX elements. An element head switches to its body on
/// `>`; `/>` and closing tags exit.
pub fn jsx() -> Grammar {
    let core = js_rules();
    Grammar::builder("jsx")
        .rule(pattern(TokenKind::TAG, r"<[A-Za-z][\w.]*").enter("jsx-head"))
        .include(&core)
        .build()
}

fn jsx_head() -> Grammar {
    Grammar::builder("jsx-head")
        .rule(Rule::literal(TokenKind::TAG, "/>").exit())
        .rule(Rule::literal(TokenKind::TAG, ">").switch("jsx-body"))
        .rule(Rule::chars(TokenKind::WHITESPACE, CharClass::Whitespace))
        .rule(pattern(TokenKind::ATTRIBUTE, r"[A-Za-z_][\w-]*"))
        .rule(Rule::literal(TokenKind::OPERATOR, "="))
        .rule(Rule::delimited(TokenKind::STRING, DelimitedSpec::quoted("\"")))
        .rule(Rule::literal(TokenKind::PUNCTUATION, "{").enter("jsx-expr"))
        .reentrant(true)
        .build()
}

fn jsx_body() -> Grammar {
    Grammar::builder("jsx-body")
        .rule(pattern(TokenKind::TAG, r"</[\w.]*>").exit())
        .rule(pattern(TokenKind::TAG, r"<[A-Za-z][\w.]*").enter("jsx-head"))
        .rule(Rule::literal(TokenKind::PUNCTUATION, "{").enter("jsx-expr"))
        .rule(pattern(TokenKind::TEXT, r"[^<{]+"))
        .reentrant(true)
        .build()
}

fn jsx_expr() -> Grammar {
    let core = js_rules();
    Grammar::builder("jsx-expr")
        .rule(Rule::literal(TokenKind::PUNCTUATION, "{").enter("jsx-expr"))
        .rule(Rule::literal(TokenKind::PUNCTUATION, "}").exit())
        .rule(pattern(TokenKind::TAG, r"<[A-Za-z][\w.]*").enter("jsx-head"))
        .include(&core)
        .reentrant(true)
        .build()
}
