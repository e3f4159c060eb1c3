//! Named route table.

use tracing::{debug, trace};

use crate::assemble::assemble;
use crate::error::{Result, RouteError};
use crate::expr::Fragments;
use crate::parse::parse;
use crate::value::{ResultMap, Value};

/// A route that matched a path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    /// Name the route was registered under.
    pub name: &'a str,
    /// Data extracted from the path.
    pub data: ResultMap,
}

/// An ordered set of named routes.
///
/// Paths resolve to the first route, in registration order, that matches
/// them. Names are used to assemble paths back.
///
/// # Example
///
/// ```
/// use oxide_route::{param, route, RouteTable, Value};
///
/// let table = RouteTable::new()
///     .with_route("home", route![])?
///     .with_route("user", route!["users", param("id")])?;
///
/// let found = table.resolve("/users/7").unwrap();
/// assert_eq!(found.name, "user");
///
/// let path = table.url_for("user", &Value::from(found.data))?;
/// assert_eq!(path, "users/7");
/// # Ok::<(), oxide_route::RouteError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, Fragments)>,
    validate_refs: bool,
}

impl RouteTable {
    /// Creates an empty table that accepts any route definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table that runs [`Fragments::validate`] on every
    /// route added to it.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            routes: Vec::new(),
            validate_refs: true,
        }
    }

    /// Registers `route` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRoute`] if the name is taken, and in a
    /// strict table any error from [`Fragments::validate`].
    pub fn add(&mut self, name: impl Into<String>, route: Fragments) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(RouteError::DuplicateRoute(name));
        }
        if self.validate_refs {
            route.validate()?;
        }
        debug!(route = %name, refs = ?route.refs(), "registered route");
        self.routes.push((name, route));
        Ok(())
    }

    /// Builder form of [`RouteTable::add`].
    ///
    /// # Errors
    ///
    /// Same as [`RouteTable::add`].
    pub fn with_route(mut self, name: impl Into<String>, route: Fragments) -> Result<Self> {
        self.add(name, route)?;
        Ok(self)
    }

    /// Returns the route registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Fragments> {
        self.routes
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, route)| route)
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Finds the first route matching `path`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let found = self.routes.iter().find_map(|(name, route)| {
            trace!(route = %name, path, "trying route");
            parse(path, route).map(|data| RouteMatch {
                name: name.as_str(),
                data,
            })
        });
        if found.is_none() {
            debug!(path, "no route matched");
        }
        found
    }

    /// Assembles the path of the route registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::RouteNotFound`] for an unknown name, otherwise any
    /// error from [`assemble`].
    pub fn url_for(&self, name: &str, data: &Value) -> Result<String> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::RouteNotFound(name.to_string()))?;
        assemble(route, data)
    }
}
