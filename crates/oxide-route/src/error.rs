//! Error types for route assembly and construction.

use thiserror::Error;

/// Route-specific errors.
///
/// Path matching never produces one of these: a path that does not match a
/// route yields `None`. Errors describe data or route definitions that do not
/// fit together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A required capture had no value to substitute.
    #[error("missing substitution at {0}")]
    MissingSubstitution(String),

    /// A capture slot held a value that cannot be written as a segment.
    #[error("invalid substitution at {0}: expected a string or a number")]
    InvalidSubstitution(String),

    /// A required alternative had no selected option.
    #[error("missing route option at {0}")]
    MissingOption(String),

    /// An alternative slot held something other than a `{ result, data }` selection.
    #[error("invalid route option at {0}: expected a selection with a `result` key")]
    InvalidOption(String),

    /// The selected option names no branch of the alternative.
    #[error("route alternative {result} not found for {ref_name}")]
    UnknownAlternative {
        /// Ref name of the alternative.
        ref_name: String,
        /// The branch key that was asked for.
        result: String,
    },

    /// Fragments containing captures or alternatives were assembled without data.
    #[error("expected data for route fragments containing alternatives and params")]
    MissingFragmentData,

    /// The same ref name is used twice within one result scope.
    #[error("duplicate ref name: {0}")]
    DuplicateRef(String),

    /// A route with this name is already registered.
    #[error("duplicate route name: {0}")]
    DuplicateRoute(String),

    /// Route name not found.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// The data cannot be represented as a route value.
    #[error("unsupported route data: {0}")]
    UnsupportedData(String),
}

/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;
