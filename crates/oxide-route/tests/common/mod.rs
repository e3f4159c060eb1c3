//! Shared helpers for route integration tests.

#![allow(dead_code)]

use oxide_route::{assemble, parse, Fragments, RouteError, Value};
use serde_json::json;

/// Parses `path` and renders the result as JSON; a failed match is `null`.
pub fn parse_json(path: &str, route: &Fragments) -> serde_json::Value {
    parse(path, route).map_or(serde_json::Value::Null, |data| {
        serde_json::to_value(data).expect("result maps always serialize")
    })
}

/// Assembles `route` from JSON data.
pub fn assemble_json(route: &Fragments, data: serde_json::Value) -> Result<String, RouteError> {
    let data = Value::try_from(data)?;
    assemble(route, &data)
}

/// Asserts that `path` parses to `expected` and that assembling the parsed
/// data and parsing again reproduces it.
pub fn assert_round_trip(route: &Fragments, path: &str, expected: serde_json::Value) {
    assert_eq!(parse_json(path, route), expected, "parsing {path:?}");
    let assembled = assemble_json(route, expected.clone()).expect("parsed data assembles");
    assert_eq!(
        parse_json(&assembled, route),
        expected,
        "re-parsing {assembled:?}"
    );
}

/// The three-way alternative used across several tests.
pub fn choice_route() -> Fragments {
    oxide_route::route![
        "static",
        oxide_route::one_of(
            "choice",
            [
                ("foo", oxide_route::route!["my-foo"]),
                ("bar", oxide_route::route!["my-bar", oxide_route::param("bar-param")]),
                (
                    "baz",
                    oxide_route::route!["my-baz", oxide_route::param("baz-param").optional()]
                ),
            ],
        ),
    ]
}

/// Empty object, for readability in expectations.
pub fn empty() -> serde_json::Value {
    json!({})
}
