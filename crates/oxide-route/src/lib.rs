//! # oxide-route
//!
//! Bidirectional route expressions: one declarative tree both matches paths
//! and assembles them back.
//!
//! This crate provides:
//! - Static segments, named captures and optional captures
//! - Alternatives: named, ordered choices between sub-routes
//! - Optional named sub-routes
//! - [`parse`] to extract a result map from a path
//! - [`assemble`] to build the path for a result map
//! - A [`RouteTable`] of named routes for resolving and reverse lookup
//!
//! ## Quick Start
//!
//! ```
//! use oxide_route::{assemble, one_of, param, parse, route};
//!
//! let route = route![
//!     "static",
//!     one_of(
//!         "choice",
//!         [
//!             ("foo", route!["my-foo"]),
//!             ("bar", route!["my-bar", param("bar-param")]),
//!             ("baz", route!["my-baz", param("baz-param").optional()]),
//!         ],
//!     ),
//! ];
//!
//! let data = parse("/static/my-bar/1234", &route).unwrap();
//! let choice = data["choice"].as_choice().unwrap();
//! assert_eq!(choice.result, "bar");
//! assert_eq!(choice.data["bar-param"].as_str(), Some("1234"));
//!
//! assert_eq!(assemble(&route, &data.into()).unwrap(), "static/my-bar/1234");
//! ```
//!
//! ## Result Shape
//!
//! A result map holds one key per named child of the route: a capture maps to
//! its segment, an alternative to `{ "result": branch, "data": {...} }` and an
//! optional named sub-route to its own nested map. Absent optional parts are
//! `null`. [`Value`] serializes to exactly this JSON shape and can be built
//! from it, so data can come straight from `serde_json::json!`:
//!
//! ```
//! use oxide_route::{assemble, route, Value};
//! use serde_json::json;
//!
//! let route = route!["static", route!["maybe"].optional("my-optional")];
//! let data = Value::try_from(json!({ "my-optional": {} }))?;
//! assert_eq!(assemble(&route, &data)?, "static/maybe");
//!
//! let data = Value::try_from(json!({ "my-optional": false }))?;
//! assert_eq!(assemble(&route, &data)?, "static");
//! # Ok::<(), oxide_route::RouteError>(())
//! ```

mod assemble;
mod error;
mod expr;
mod parse;
mod table;
mod value;

pub use assemble::assemble;
pub use error::{Result, RouteError};
pub use expr::{
    alternate, capture, fragments, one_of, param, Alternative, Capture, Expr, Fragments,
};
pub use parse::parse;
pub use table::{RouteMatch, RouteTable};
pub use value::{Choice, ResultMap, Value};
