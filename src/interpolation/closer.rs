//! Zone detection inside string-like bodies
//!
//! [`scan_body`] walks a literal body, honoring escapes, and records an
//! interpolation [`Zone`] for every opener whose closer it can find.
//! [`find_closer`] locates that closer with a depth counter over the bracket
//! the closer pairs with, and skips nested string literals whole, so
//! `` `a ${ `b ${c}` } d` `` and `` `${ '}' }` `` both close on the last `}`.

use text_size::TextRange;

use super::Zone;
use crate::base::range;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::grammar::{DelimitedSpec, Interpolation, ident_run};

/// The literal being scanned.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Host<'s> {
    /// Offset of the literal's first byte, for related locations
    pub origin: usize,
    /// Opening delimiter; `None` for heredoc bodies
    pub open: Option<&'s str>,
    /// Closing delimiter; `None` scans to the limit (heredoc bodies)
    pub close: Option<&'s str>,
    pub escape: Option<char>,
    pub multiline: bool,
    pub interpolations: &'s [Interpolation],
    /// Delimited literals of the surrounding grammar, skipped whole inside
    /// expressions tokenized with that grammar
    pub literals: &'s [&'s DelimitedSpec],
}

impl<'s> Host<'s> {
    pub fn delimited(spec: &'s DelimitedSpec, origin: usize, literals: &'s [&'s DelimitedSpec]) -> Self {
        Self {
            origin,
            open: Some(spec.open.as_str()),
            close: Some(spec.close.as_str()),
            escape: spec.escape,
            multiline: spec.multiline,
            interpolations: &spec.interpolations,
            literals,
        }
    }
}

/// Result of scanning one literal body.
#[derive(Debug, Default)]
pub(crate) struct BodyScan {
    /// End of the literal: after the closing delimiter when `closed`,
    /// otherwise where scanning stopped
    pub end: usize,
    pub closed: bool,
    pub zones: Vec<Zone>,
    pub diagnostics: Vec<Diagnostic>,
}

enum Opener {
    Found(Zone),
    Unmatched(TextRange),
    Limit(TextRange),
}

/// Scan a literal body starting at `start`, never reading at or past `limit`.
///
/// `budget` is the number of interpolation levels still allowed below this
/// one. At zero, openers are kept as plain content.
pub(crate) fn scan_body(
    text: &str,
    start: usize,
    limit: usize,
    host: &Host<'_>,
    budget: usize,
) -> BodyScan {
    let mut scan = BodyScan::default();
    let mut plain = false;
    let mut pos = start;

    while pos < limit {
        let rest = &text[pos..limit];
        if let Some(close) = host.close {
            if rest.starts_with(close) {
                scan.end = pos + close.len();
                scan.closed = true;
                return scan;
            }
        }
        let Some(c) = rest.chars().next() else { break };

        if Some(c) == host.escape {
            pos += c.len_utf8();
            if let Some(next) = text[pos..limit].chars().next() {
                pos += next.len_utf8();
            }
            continue;
        }
        if c == '\n' && !host.multiline {
            break;
        }

        if !plain {
            match try_interpolation(text, pos, limit, host, budget) {
                Some(Opener::Found(zone)) => {
                    tracing::trace!(expr = ?zone.expr, "interpolation zone");
                    pos = usize::from(zone.close.end());
                    scan.zones.push(zone);
                    continue;
                }
                Some(Opener::Unmatched(open)) => {
                    // The remainder of the literal is plain content.
                    plain = true;
                    scan.diagnostics.push(
                        Diagnostic::builder(DiagnosticCode::UnmatchedInterpolationCloser)
                            .range(open)
                            .related("literal starts here", range(host.origin, host.origin))
                            .build(),
                    );
                    pos = usize::from(open.end());
                    continue;
                }
                Some(Opener::Limit(open)) => {
                    scan.diagnostics.push(
                        Diagnostic::builder(DiagnosticCode::NestingLimit)
                            .message("interpolation nested too deeply; kept as plain text")
                            .range(open)
                            .build(),
                    );
                    pos = usize::from(open.end());
                    continue;
                }
                None => {}
            }
        }
        pos += c.len_utf8();
    }

    scan.end = pos;
    scan
}

/// Try every interpolation form at `pos`, in declaration order.
fn try_interpolation(
    text: &str,
    pos: usize,
    limit: usize,
    host: &Host<'_>,
    budget: usize,
) -> Option<Opener> {
    let rest = &text[pos..limit];
    for interpolation in host.interpolations {
        match interpolation {
            Interpolation::Braced { open, close, grammar } => {
                if !rest.starts_with(open.as_str()) {
                    continue;
                }
                let expr_start = pos + open.len();
                let open_range = range(pos, expr_start);
                if budget == 0 {
                    return Some(Opener::Limit(open_range));
                }
                let search = Closer {
                    close: close.as_str(),
                    nest: opening_bracket(close),
                    literals: if grammar.is_none() { host.literals } else { &[] },
                };
                return Some(
                    match find_closer(text, expr_start, limit, &search, host, budget - 1) {
                        Some(close_start) => Opener::Found(Zone {
                            open: open_range,
                            expr: range(expr_start, close_start),
                            close: range(close_start, close_start + close.len()),
                            grammar: grammar.clone(),
                        }),
                        None => Opener::Unmatched(open_range),
                    },
                );
            }
            Interpolation::Sigil { sigil, grammar } => {
                if !rest.starts_with(*sigil) {
                    continue;
                }
                let expr_start = pos + sigil.len_utf8();
                let len = ident_run(&text[expr_start..limit]);
                if len == 0 {
                    continue;
                }
                let open_range = range(pos, expr_start);
                if budget == 0 {
                    return Some(Opener::Limit(open_range));
                }
                let expr_end = expr_start + len;
                return Some(Opener::Found(Zone {
                    open: open_range,
                    expr: range(expr_start, expr_end),
                    close: range(expr_end, expr_end),
                    grammar: grammar.clone(),
                }));
            }
        }
    }
    None
}

/// What [`find_closer`] looks for after an opener.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Closer<'s> {
    pub close: &'s str,
    /// Bracket that raises the depth; `None` when `close` is not a bracket
    pub nest: Option<char>,
    /// Literals of the expression grammar, skipped whole
    pub literals: &'s [&'s DelimitedSpec],
}

/// The bracket that `close` pairs with: `}` nests on `{`, `)` on `(`.
fn opening_bracket(close: &str) -> Option<char> {
    match close.chars().next()? {
        '}' => Some('{'),
        ')' => Some('('),
        ']' => Some('['),
        '>' => Some('<'),
        _ => None,
    }
}

/// Find the start of the closer matching an opener that ended at `from`.
///
/// Every `nest` bracket seen raises the depth by one and every `close` at
/// positive depth lowers it. String literals, either of the expression
/// grammar or opened by the host's own delimiter, are skipped whole; one
/// that cannot be closed fails the search.
pub(crate) fn find_closer(
    text: &str,
    from: usize,
    limit: usize,
    search: &Closer<'_>,
    host: &Host<'_>,
    budget: usize,
) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = from;

    while pos < limit {
        let rest = &text[pos..limit];
        if rest.starts_with(search.close) {
            if depth == 0 {
                return Some(pos);
            }
            depth -= 1;
            pos += search.close.len();
            continue;
        }
        // The nested literal sits in the expression, one level down.
        if let Some(inner) = nested_literal(text, pos, limit, search.literals, host, budget) {
            if !inner.closed {
                return None;
            }
            pos = inner.end;
            continue;
        }
        let c = rest.chars().next()?;
        if Some(c) == search.nest {
            depth += 1;
        }
        pos += c.len_utf8();
    }
    None
}

/// Scan the string literal opening at `pos`, if any.
fn nested_literal(
    text: &str,
    pos: usize,
    limit: usize,
    literals: &[&DelimitedSpec],
    host: &Host<'_>,
    budget: usize,
) -> Option<BodyScan> {
    let rest = &text[pos..limit];
    if let Some(spec) = literals.iter().copied().find(|spec| rest.starts_with(spec.open.as_str())) {
        let nested = Host::delimited(spec, pos, literals);
        return Some(scan_body(text, pos + spec.open.len(), limit, &nested, budget));
    }
    let open = host.open.filter(|open| rest.starts_with(*open))?;
    let nested = Host {
        origin: pos,
        ..*host
    };
    Some(scan_body(text, pos + open.len(), limit, &nested, budget))
}
