//! Embedded grammar regions: markup hosting script and PHP, JSX elements.

use strata::{DiagnosticCode, TokenKind};

use crate::helpers::assertions::{assert_covers, top_level, tokenize};

#[test]
fn test_script_region_pops_at_closing_tag_end() {
    let text = "<p>a</p>\n<script>let x = 1;</script>x = 1";
    let result = tokenize(text, "html");
    assert_covers(text, &result);
    assert_eq!(
        top_level(text, &result),
        vec![
            (TokenKind::TAG, "<p>"),
            (TokenKind::TEXT, "a"),
            (TokenKind::TAG, "</p>"),
            (TokenKind::TEXT, "\n"),
            (TokenKind::TAG, "<script>"),
            (TokenKind::KEYWORD, "let"),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::IDENT, "x"),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::OPERATOR, "="),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::NUMBER, "1"),
            (TokenKind::PUNCTUATION, ";"),
            (TokenKind::TAG, "</script>"),
            (TokenKind::TEXT, "x = 1"),
        ]
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_script_with_attributes() {
    let text = r#"<script type="module">f()</script>"#;
    let result = tokenize(text, "html");
    let tokens = top_level(text, &result);
    assert_eq!(tokens[0], (TokenKind::TAG, r#"<script type="module">"#));
    assert_eq!(tokens[1], (TokenKind::IDENT, "f"));
    assert_eq!(tokens.last(), Some(&(TokenKind::TAG, "</script>")));
}

#[test]
fn test_markup_comment_hides_script_tag() {
    let text = "<!-- <script> -->ok";
    let result = tokenize(text, "html");
    assert_eq!(
        top_level(text, &result),
        vec![(TokenKind::COMMENT, "<!-- <script> -->"), (TokenKind::TEXT, "ok")]
    );
}

#[test]
fn test_php_island_in_markup() {
    let text = "<b><?php echo $name; ?></b> &amp; more";
    let result = tokenize(text, "html");
    assert_covers(text, &result);
    let tokens = top_level(text, &result);
    assert!(tokens.contains(&(TokenKind::REGION_MARKER, "<?php")));
    assert!(tokens.contains(&(TokenKind::VARIABLE, "$name")));
    assert!(tokens.contains(&(TokenKind::REGION_MARKER, "?>")));
    assert!(tokens.contains(&(TokenKind::TAG, "</b>")));
    assert!(tokens.contains(&(TokenKind::ENTITY, "&amp;")));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_unclosed_php_island_is_reported() {
    let text = "<?php echo 1;";
    let result = tokenize(text, "html");
    assert_covers(text, &result);
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::UnterminatedRegion);
    assert_eq!(&text[diagnostic.related[0].range], "<?php");
}

#[test]
fn test_jsx_element_switches_head_to_body() {
    let text = r#"const el = <div className="a">Hi {name}</div>;"#;
    let result = tokenize(text, "jsx");
    assert_covers(text, &result);
    assert_eq!(
        top_level(text, &result),
        vec![
            (TokenKind::KEYWORD, "const"),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::IDENT, "el"),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::OPERATOR, "="),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::TAG, "<div"),
            (TokenKind::WHITESPACE, " "),
            (TokenKind::ATTRIBUTE, "className"),
            (TokenKind::OPERATOR, "="),
            (TokenKind::STRING, "\"a\""),
            (TokenKind::TAG, ">"),
            (TokenKind::TEXT, "Hi "),
            (TokenKind::PUNCTUATION, "{"),
            (TokenKind::IDENT, "name"),
            (TokenKind::PUNCTUATION, "}"),
            (TokenKind::TAG, "</div>"),
            (TokenKind::PUNCTUATION, ";"),
        ]
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_jsx_nested_elements_and_self_closing() {
    let text = "<ul><li>{items.map(i => <Item key={i} />)}</li>\n</ul>";
    let result = tokenize(text, "jsx");
    assert_covers(text, &result);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    let tokens = top_level(text, &result);
    assert!(tokens.contains(&(TokenKind::TAG, "<Item")));
    assert!(tokens.contains(&(TokenKind::ATTRIBUTE, "key")));
    assert!(tokens.contains(&(TokenKind::TAG, "/>")));
    assert_eq!(tokens.last(), Some(&(TokenKind::TAG, "</ul>")));
}
