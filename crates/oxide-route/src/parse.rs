//! Path matching.
//!
//! Matching walks the expression tree with a segment cursor. Every function
//! takes the cursor by value and hands back the advanced cursor together with
//! the data it produced, so a failed attempt never disturbs the caller's
//! position and backtracking is just trying the next branch from the same
//! cursor. `None` means "no match" and propagates up until an optional node or
//! an alternative absorbs it.

use tracing::{debug, trace};

use crate::expr::{Alternative, Capture, Expr, Fragments};
use crate::value::{Choice, ResultMap, Value};

type Matched = Option<(usize, ResultMap)>;

/// Matches `text` against `route`.
///
/// The path is split on `/` and empty segments are dropped, so leading,
/// trailing and doubled slashes do not matter. The route must consume every
/// segment.
///
/// # Example
///
/// ```
/// use oxide_route::{param, parse, route};
///
/// let route = route!["static", param("myParam").optional()];
/// assert_eq!(parse("/static/hello/", &route).unwrap()["myParam"].as_str(), Some("hello"));
/// assert!(parse("static", &route).unwrap()["myParam"].is_null());
/// assert!(parse("static/hello/extra", &route).is_none());
/// ```
#[must_use]
pub fn parse(text: &str, route: &Fragments) -> Option<ResultMap> {
    let segments = split_segments(text);
    let result = match_fragments(&segments, route, 0).map(|(_, data)| data);
    debug!(
        path = text,
        segments = segments.len(),
        matched = result.is_some(),
        "parsed path"
    );
    result
}

pub(crate) fn split_segments(text: &str) -> Vec<&str> {
    text.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_expr(segments: &[&str], expr: &Expr, cursor: usize) -> Matched {
    match expr {
        Expr::Static(literal) => match_static(segments, literal, cursor),
        Expr::Capture(capture) => match_capture(segments, capture, cursor),
        Expr::Alternative(alternative) => match_alternative(segments, alternative, cursor),
        Expr::Fragments(fragments) => match_fragments(segments, fragments, cursor),
    }
}

fn match_static(segments: &[&str], literal: &str, cursor: usize) -> Matched {
    (segments.get(cursor) == Some(&literal)).then(|| (cursor + 1, ResultMap::new()))
}

fn match_capture(segments: &[&str], capture: &Capture, cursor: usize) -> Matched {
    let absent = || single(capture.ref_name(), Value::Null);
    let width = capture.width();

    if cursor + width > segments.len() {
        return capture.is_optional().then(|| (cursor, absent()));
    }
    if let Some(leading) = capture.leading_name() {
        if segments[cursor] != leading {
            // A wrong leading segment reads as an absent value, even for a
            // required capture, and consumes nothing.
            return Some((cursor, absent()));
        }
    }

    let value = segments[cursor + width - 1];
    Some((cursor + width, single(capture.ref_name(), Value::from(value))))
}

fn match_alternative(segments: &[&str], alternative: &Alternative, cursor: usize) -> Matched {
    for (key, branch) in alternative.branches() {
        trace!(alternative = alternative.ref_name(), branch = key, cursor, "trying branch");
        if let Some((next, data)) = match_expr(segments, branch, cursor) {
            let choice = Choice::new(key, data);
            return Some((next, single(alternative.ref_name(), choice.into())));
        }
    }
    alternative
        .is_optional()
        .then(|| (cursor, single(alternative.ref_name(), Value::Null)))
}

fn match_fragments(segments: &[&str], fragments: &Fragments, cursor: usize) -> Matched {
    let mut trial = cursor;
    let mut results = ResultMap::new();

    for child in fragments.fragments() {
        let Some((next, data)) = match_expr(segments, child, trial) else {
            return fragments
                .ref_name()
                .map(|name| (cursor, single(name, Value::Null)));
        };
        results.extend(data);
        trial = next;
    }

    // Every fragment sequence, nested ones included, has to end exactly at the
    // end of the whole path.
    if trial != segments.len() {
        return None;
    }

    Some(match fragments.ref_name() {
        Some(name) => (trial, single(name, results.into())),
        None => (trial, results),
    })
}

fn single(key: &str, value: Value) -> ResultMap {
    ResultMap::from([(key.to_string(), value)])
}
