//! Assembling parsed data gives back a path that parses to the same data.

mod common;
use common::*;

use oxide_route::{assemble, capture, one_of, param, parse, route, Alternative, Value};
use serde_json::json;

#[test]
fn static_and_params() {
    let route = route!["users", param("id"), "posts", param("post").optional()];
    assert_round_trip(&route, "users/1/posts/2", json!({ "id": "1", "post": "2" }));
    assert_round_trip(&route, "users/1/posts", json!({ "id": "1", "post": null }));
}

#[test]
fn alternatives() {
    let route = choice_route();
    assert_round_trip(
        &route,
        "static/my-foo",
        json!({ "choice": { "result": "foo", "data": {} } }),
    );
    assert_round_trip(
        &route,
        "static/my-bar/9",
        json!({ "choice": { "result": "bar", "data": { "bar-param": "9" } } }),
    );
    assert_round_trip(
        &route,
        "static/my-baz",
        json!({ "choice": { "result": "baz", "data": { "baz-param": null } } }),
    );
}

#[test]
fn capture_and_static_branches() {
    let route = route![
        "files",
        Alternative::new("target")
            .option("latest", "latest")
            .option("version", param("v")),
    ];
    assert_round_trip(
        &route,
        "files/latest",
        json!({ "target": { "result": "latest", "data": {} } }),
    );
    assert_round_trip(
        &route,
        "files/1.2.0",
        json!({ "target": { "result": "version", "data": { "v": "1.2.0" } } }),
    );
}

#[test]
fn optional_fragments_and_leading_names() {
    let route = route![
        "shop",
        capture("category").leading("c").optional(),
        route!["sort", one_of("order", [("asc", "asc"), ("desc", "desc")])].optional("sorting"),
    ];
    assert_round_trip(
        &route,
        "shop/c/books/sort/desc",
        json!({
            "category": "books",
            "sorting": { "order": { "result": "desc", "data": {} } }
        }),
    );
    assert_round_trip(
        &route,
        "shop/sort/asc",
        json!({
            "category": null,
            "sorting": { "order": { "result": "asc", "data": {} } }
        }),
    );
    assert_round_trip(&route, "shop", json!({ "category": null, "sorting": null }));
}

#[test]
fn typed_round_trip() {
    let route = route!["a", param("x"), route!["b"].optional("flag")];
    let data = parse("/a/1/b/", &route).unwrap();
    let path = assemble(&route, &Value::from(data.clone())).unwrap();
    assert_eq!(path, "a/1/b");
    assert_eq!(parse(&path, &route), Some(data));
}

#[test]
fn falsy_normalization() {
    let route = route!["a", param("x").optional()];
    for absent in [json!({ "x": false }), json!({ "x": 0 }), json!({ "x": "" }), json!({})] {
        let path = assemble_json(&route, absent).unwrap();
        assert_eq!(parse_json(&path, &route), json!({ "x": null }));
    }
}

#[test]
fn nested_alternative_branch() {
    let route = route![one_of(
        "outer",
        [("x", one_of("inner", [("a", "a"), ("b", "b")]))],
    )];
    assert_round_trip(
        &route,
        "b",
        json!({
            "outer": {
                "result": "x",
                "data": { "inner": { "result": "b", "data": {} } }
            }
        }),
    );
}

#[test]
fn named_fragments_branch() {
    let route = route![one_of(
        "outer",
        [("x", route!["p", param("v")].optional("grp"))],
    )];
    assert_round_trip(
        &route,
        "p/1",
        json!({ "outer": { "result": "x", "data": { "grp": { "v": "1" } } } }),
    );
}
