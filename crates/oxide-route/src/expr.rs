//! Route expression tree.
//!
//! A route is a [`Fragments`] node: an ordered sequence of static segments,
//! captures, alternatives and nested fragments. Trees are built once with the
//! constructor functions below and then shared by [`parse`](crate::parse) and
//! [`assemble`](crate::assemble). Nothing here mutates a node after it has been
//! built: the `optional` variants return new copies so that one base node can
//! be reused in both its required and optional form.

use std::collections::BTreeSet;

use crate::error::{Result, RouteError};

/// A node of a route expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal segment. Matches exactly one equal segment and produces no data.
    Static(String),
    /// A named path parameter.
    Capture(Capture),
    /// A named choice between mutually exclusive sub-expressions.
    Alternative(Alternative),
    /// A sequence of sub-expressions matched back to back.
    Fragments(Fragments),
}

impl Expr {
    /// Returns the key this node contributes to its enclosing result map.
    ///
    /// Static segments and unnamed fragments have none.
    #[must_use]
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Capture(capture) => Some(&capture.ref_name),
            Self::Alternative(alternative) => Some(&alternative.ref_name),
            Self::Fragments(fragments) => fragments.ref_name(),
        }
    }

    /// Returns whether absence of this node yields `null` instead of a failure.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        match self {
            Self::Static(_) => false,
            Self::Capture(capture) => capture.is_optional,
            Self::Alternative(alternative) => alternative.is_optional,
            Self::Fragments(fragments) => fragments.is_optional(),
        }
    }

    fn validate_nested(&self) -> Result<()> {
        match self {
            Self::Static(_) | Self::Capture(_) => Ok(()),
            Self::Alternative(alternative) => {
                alternative
                    .branches
                    .iter()
                    .try_for_each(|(_, branch)| match branch {
                        // A branch's data is a scope of its own.
                        Self::Fragments(fragments) => fragments.validate(),
                        other => other.validate_nested(),
                    })
            }
            Self::Fragments(fragments) if fragments.is_optional() => fragments.validate(),
            Self::Fragments(fragments) => fragments
                .fragments
                .iter()
                .try_for_each(Self::validate_nested),
        }
    }
}

impl From<&str> for Expr {
    fn from(literal: &str) -> Self {
        Self::Static(String::from(literal))
    }
}

impl From<String> for Expr {
    fn from(literal: String) -> Self {
        Self::Static(literal)
    }
}

impl From<Capture> for Expr {
    fn from(capture: Capture) -> Self {
        Self::Capture(capture)
    }
}

impl From<Alternative> for Expr {
    fn from(alternative: Alternative) -> Self {
        Self::Alternative(alternative)
    }
}

impl From<Fragments> for Expr {
    fn from(fragments: Fragments) -> Self {
        Self::Fragments(fragments)
    }
}

/// A named path parameter, optionally preceded by a fixed leading segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    ref_name: String,
    leading_name: Option<String>,
    is_optional: bool,
}

/// Creates a required capture stored under `ref_name`.
///
/// # Example
///
/// ```
/// use oxide_route::{capture, parse, route};
///
/// let users = route!["users", capture("id")];
/// let data = parse("/users/42", &users).unwrap();
/// assert_eq!(data["id"].as_str(), Some("42"));
/// ```
#[must_use]
pub fn capture(ref_name: impl Into<String>) -> Capture {
    Capture {
        ref_name: ref_name.into(),
        leading_name: None,
        is_optional: false,
    }
}

/// Alias of [`capture`].
#[must_use]
pub fn param(ref_name: impl Into<String>) -> Capture {
    capture(ref_name)
}

impl Capture {
    /// Requires the literal segment `name` right before the captured value.
    #[must_use]
    pub fn leading(mut self, name: impl Into<String>) -> Self {
        self.leading_name = Some(name.into());
        self
    }

    /// Returns an optional copy of this capture.
    #[must_use]
    pub fn optional(&self) -> Self {
        Self {
            is_optional: true,
            ..self.clone()
        }
    }

    /// Key of the captured value in the result map.
    #[must_use]
    pub fn ref_name(&self) -> &str {
        &self.ref_name
    }

    /// Literal segment expected before the value, if any.
    #[must_use]
    pub fn leading_name(&self) -> Option<&str> {
        self.leading_name.as_deref()
    }

    /// Whether a missing value yields `null` instead of a failure.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Number of segments this capture spans when present.
    pub(crate) const fn width(&self) -> usize {
        if self.leading_name.is_some() {
            2
        } else {
            1
        }
    }
}

/// Mutually exclusive branches, tried in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    ref_name: String,
    branches: Vec<(String, Expr)>,
    is_optional: bool,
}

/// Creates a required alternative stored under `ref_name`.
///
/// Branches are tried in the order the iterator yields them; the first one
/// that matches wins.
///
/// # Example
///
/// ```
/// use oxide_route::{alternate, parse, route, Expr};
///
/// let docs = route![
///     "docs",
///     alternate("page", [("intro", Expr::from("intro")), ("faq", Expr::from("faq"))]),
/// ];
/// let data = parse("docs/faq", &docs).unwrap();
/// assert_eq!(data["page"].as_choice().unwrap().result, "faq");
/// ```
#[must_use]
pub fn alternate<I, K, E>(ref_name: impl Into<String>, branches: I) -> Alternative
where
    I: IntoIterator<Item = (K, E)>,
    K: Into<String>,
    E: Into<Expr>,
{
    Alternative {
        ref_name: ref_name.into(),
        branches: branches
            .into_iter()
            .map(|(key, branch)| (key.into(), branch.into()))
            .collect(),
        is_optional: false,
    }
}

/// Alias of [`alternate`].
#[must_use]
pub fn one_of<I, K, E>(ref_name: impl Into<String>, branches: I) -> Alternative
where
    I: IntoIterator<Item = (K, E)>,
    K: Into<String>,
    E: Into<Expr>,
{
    alternate(ref_name, branches)
}

impl Alternative {
    /// Creates a required alternative without branches.
    #[must_use]
    pub fn new(ref_name: impl Into<String>) -> Self {
        Self {
            ref_name: ref_name.into(),
            branches: Vec::new(),
            is_optional: false,
        }
    }

    /// Appends a branch after the existing ones.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, branch: impl Into<Expr>) -> Self {
        self.branches.push((key.into(), branch.into()));
        self
    }

    /// Returns an optional copy of this alternative.
    #[must_use]
    pub fn optional(&self) -> Self {
        Self {
            is_optional: true,
            ..self.clone()
        }
    }

    /// Key of the selection in the result map.
    #[must_use]
    pub fn ref_name(&self) -> &str {
        &self.ref_name
    }

    /// Branches in matching order.
    pub fn branches(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.branches
            .iter()
            .map(|(key, branch)| (key.as_str(), branch))
    }

    /// Looks up a branch by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.branches
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, branch)| branch)
    }

    /// Whether a failed match yields `null` instead of a failure.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.is_optional
    }
}

/// An ordered sequence of expressions.
///
/// A plain `Fragments` is required and shares its result map with whatever
/// encloses it. [`Fragments::optional`] turns it into a named sub-tree whose
/// result sits under its own key and whose absence yields `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    fragments: Vec<Expr>,
    ref_name: Option<String>,
}

/// Creates a required fragment sequence, skipping `None` children.
///
/// Use the [`route!`](crate::route) macro for children of mixed kinds.
#[must_use]
pub fn fragments<I>(children: I) -> Fragments
where
    I: IntoIterator,
    I::Item: Into<Option<Expr>>,
{
    Fragments::new(children.into_iter().filter_map(Into::into).collect())
}

impl Fragments {
    /// Creates a required fragment sequence from its children.
    #[must_use]
    pub const fn new(fragments: Vec<Expr>) -> Self {
        Self {
            fragments,
            ref_name: None,
        }
    }

    /// Returns a named optional copy of this sequence.
    #[must_use]
    pub fn optional(&self, ref_name: impl Into<String>) -> Self {
        Self {
            fragments: self.fragments.clone(),
            ref_name: Some(ref_name.into()),
        }
    }

    /// The children, in matching order.
    #[must_use]
    pub fn fragments(&self) -> &[Expr] {
        &self.fragments
    }

    /// Key of this sub-tree in its parent's result map, if it is named.
    #[must_use]
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }

    /// Named fragments are optional; unnamed ones are required.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.ref_name.is_some()
    }

    /// Keys of the result map this sequence produces, in child order.
    ///
    /// Unnamed nested sequences contribute their own keys.
    #[must_use]
    pub fn refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        collect_refs(&self.fragments, &mut refs);
        refs
    }

    /// Checks that no ref name is used twice within one result map.
    ///
    /// Matching and assembly do not depend on this; it is an opt-in check for
    /// route definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRef`] naming the first repeated key.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        if let Some(duplicate) = self.refs().into_iter().find(|name| !seen.insert(*name)) {
            return Err(RouteError::DuplicateRef(duplicate.to_string()));
        }
        self.fragments.iter().try_for_each(Expr::validate_nested)
    }
}

fn collect_refs<'a>(children: &'a [Expr], refs: &mut Vec<&'a str>) {
    for child in children {
        match child {
            Expr::Static(_) => {}
            Expr::Fragments(nested) if !nested.is_optional() => {
                collect_refs(&nested.fragments, refs);
            }
            named => refs.extend(named.ref_name()),
        }
    }
}

/// Builds a [`Fragments`] node from children of any expression kind.
///
/// ```
/// use oxide_route::{param, route};
///
/// let profile = route!["users", param("id"), route!["edit"].optional("edit")];
/// assert_eq!(profile.refs(), vec!["id", "edit"]);
/// ```
#[macro_export]
macro_rules! route {
    ($($child:expr),* $(,)?) => {
        $crate::Fragments::new(::std::vec![$($crate::Expr::from($child)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_returns_copy() {
        let base = capture("id");
        let optional = base.optional();
        assert!(!base.is_optional());
        assert!(optional.is_optional());
        assert_eq!(optional.ref_name(), "id");
    }

    #[test]
    fn test_expr_reports_optionality() {
        assert!(!Expr::from("static").is_optional());
        assert!(!Expr::from(capture("id")).is_optional());
        assert!(Expr::from(capture("id").optional()).is_optional());
        assert!(Expr::from(alternate("c", [("a", "a")]).optional()).is_optional());
        assert!(!Expr::from(route!["x"]).is_optional());
        assert!(Expr::from(route!["x"].optional("x")).is_optional());
    }

    #[test]
    fn test_leading_name_widens_capture() {
        let plain = capture("id");
        let led = capture("id").leading("users");
        assert_eq!(plain.width(), 1);
        assert_eq!(led.width(), 2);
        assert_eq!(led.leading_name(), Some("users"));
    }

    #[test]
    fn test_fragments_filters_missing_children() {
        let maybe_edit: Option<Expr> = None;
        let route = fragments([Some(Expr::from("users")), maybe_edit, Some(param("id").into())]);
        assert_eq!(route.fragments().len(), 2);
        assert_eq!(route.refs(), vec!["id"]);
    }

    #[test]
    fn test_named_fragments_are_optional() {
        let base = route!["maybe"];
        let named = base.optional("my-optional");
        assert!(!base.is_optional());
        assert!(named.is_optional());
        assert_eq!(named.ref_name(), Some("my-optional"));
        assert_eq!(named.fragments(), base.fragments());
    }

    #[test]
    fn test_alternative_keeps_insertion_order() {
        let choice = Alternative::new("choice")
            .option("foo", "my-foo")
            .option("bar", route!["my-bar", param("bar")])
            .option("baz", "my-baz");
        let keys: Vec<&str> = choice.branches().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["foo", "bar", "baz"]);
        assert_eq!(choice.get("baz"), Some(&Expr::from("my-baz")));
        assert!(choice.get("qux").is_none());
    }

    #[test]
    fn test_refs_flatten_unnamed_fragments() {
        let route = route![
            "a",
            route![param("x"), alternate("y", [("one", "1")])],
            route![param("z")].optional("group"),
        ];
        assert_eq!(route.refs(), vec!["x", "y", "group"]);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let route = route![param("id"), "x", param("id").optional()];
        assert_eq!(
            route.validate(),
            Err(RouteError::DuplicateRef("id".to_string()))
        );
    }

    #[test]
    fn test_validate_scopes() {
        // Named sub-trees and alternative branches each have their own scope.
        let route = route![
            param("id"),
            route![param("id")].optional("nested"),
            alternate("choice", [("a", route![param("id")])]),
        ];
        assert!(route.validate().is_ok());

        let inner_duplicate = route![route![param("x"), param("x")].optional("nested")];
        assert_eq!(
            inner_duplicate.validate(),
            Err(RouteError::DuplicateRef("x".to_string()))
        );

        let unnamed_duplicate = route![param("x"), route![param("x")]];
        assert!(unnamed_duplicate.validate().is_err());
    }
}
