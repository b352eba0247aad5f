//! String-like matchers: delimited literals and heredocs
//!
//! These are the only matchers that produce interpolation zones and soft
//! diagnostics, so they live next to the scanner instead of in
//! [`Matcher::match_simple`](crate::grammar::Matcher).

use crate::base::range;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::grammar::{DelimitedSpec, HeredocSpec, ident_run};
use crate::interpolation::{Host, Zone, scan_body};

/// A successful string-like match.
#[derive(Debug, Default)]
pub(crate) struct LiteralMatch {
    pub end: usize,
    pub zones: Vec<Zone>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Match a delimited literal at `cursor`. `text` ends at the range limit.
///
/// `literals` are the delimited rules of the scanning grammar.
pub(crate) fn match_delimited(
    spec: &DelimitedSpec,
    text: &str,
    cursor: usize,
    budget: usize,
    literals: &[&DelimitedSpec],
) -> Option<LiteralMatch> {
    if !text[cursor..].starts_with(spec.open.as_str()) {
        return None;
    }
    let host = Host::delimited(spec, cursor, literals);
    let scan = scan_body(text, cursor + spec.open.len(), text.len(), &host, budget);

    let mut diagnostics = scan.diagnostics;
    if !scan.closed {
        diagnostics.push(
            Diagnostic::builder(DiagnosticCode::UnterminatedRegion)
                .message(format!("unterminated literal, expected `{}`", spec.close))
                .range(range(cursor, scan.end))
                .build(),
        );
    }
    Some(LiteralMatch {
        end: scan.end,
        zones: scan.zones,
        diagnostics,
    })
}

/// Match a heredoc at `cursor`. `text` ends at the range limit.
pub(crate) fn match_heredoc(
    spec: &HeredocSpec,
    text: &str,
    cursor: usize,
    budget: usize,
    literals: &[&DelimitedSpec],
) -> Option<LiteralMatch> {
    if !text[cursor..].starts_with(spec.intro.as_str()) {
        return None;
    }
    let mut pos = cursor + spec.intro.len();

    let mut indented = false;
    if let Some(flag) = text[pos..].chars().next() {
        if spec.flags.contains(flag) {
            indented = true;
            pos += flag.len_utf8();
        }
    }

    let quote = text[pos..]
        .chars()
        .next()
        .filter(|&c| matches!(c, '\'' | '"' | '`'));
    if let Some(q) = quote {
        pos += q.len_utf8();
    }

    let label_len = ident_run(&text[pos..]);
    if label_len == 0 {
        return None;
    }
    let label = &text[pos..pos + label_len];
    pos += label_len;

    if let Some(q) = quote {
        if !text[pos..].starts_with(q) {
            return None;
        }
        pos += q.len_utf8();
    }

    // The body starts on the line after the introducer.
    let Some(newline) = text[pos..].find('\n') else {
        return Some(unterminated(cursor, text.len(), label));
    };
    let body_start = pos + newline + 1;

    let Some((body_end, end)) = find_terminator(text, body_start, label, indented) else {
        let mut found = unterminated(cursor, text.len(), label);
        if quote != Some('\'') {
            let end = text.len();
            found.zones = body_zones(
                spec,
                text,
                (cursor, body_start, end),
                budget,
                literals,
                &mut found.diagnostics,
            );
        }
        return Some(found);
    };

    let mut diagnostics = Vec::new();
    let zones = if quote == Some('\'') {
        Vec::new()
    } else {
        body_zones(spec, text, (cursor, body_start, body_end), budget, literals, &mut diagnostics)
    };
    Some(LiteralMatch {
        end,
        zones,
        diagnostics,
    })
}

fn unterminated(cursor: usize, end: usize, label: &str) -> LiteralMatch {
    LiteralMatch {
        end,
        zones: Vec::new(),
        diagnostics: vec![
            Diagnostic::builder(DiagnosticCode::UnterminatedRegion)
                .message(format!("heredoc never reaches its `{label}` terminator"))
                .range(range(cursor, end))
                .build(),
        ],
    }
}

/// Zones of a heredoc body; `span` is `(origin, body start, body end)`.
fn body_zones(
    spec: &HeredocSpec,
    text: &str,
    (origin, start, end): (usize, usize, usize),
    budget: usize,
    literals: &[&DelimitedSpec],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Zone> {
    if spec.interpolations.is_empty() {
        return Vec::new();
    }
    let host = Host {
        origin,
        open: None,
        close: None,
        escape: spec.escape,
        multiline: true,
        interpolations: &spec.interpolations,
        literals,
    };
    let scan = scan_body(text, start, end, &host, budget);
    diagnostics.extend(scan.diagnostics);
    scan.zones
}

/// Find the line holding only `label`, starting at `from` (a line start).
///
/// Returns `(start of the terminator line, end of the label)`.
fn find_terminator(text: &str, from: usize, label: &str, indented: bool) -> Option<(usize, usize)> {
    let mut line_start = from;
    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        let line = text[line_start..line_end].trim_end_matches('\r');
        let candidate = if indented { line.trim_start() } else { line };
        if candidate == label {
            let indent = line.len() - candidate.len();
            return Some((line_start, line_start + indent + label.len()));
        }
        line_start = line_end + 1;
    }
    None
}
