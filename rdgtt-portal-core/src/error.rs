//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Two route entries share the same path
    #[error("Duplicate route path: {0}")]
    DuplicateRoute(String),

    /// Two parameterised route entries match exactly the same set of paths
    #[error("Route {first} collides with {second}")]
    CollidingRoute { first: String, second: String },

    /// A route the shell relies on (`/` or `/dashboard`) is absent
    #[error("Required route missing: {0}")]
    MissingRoute(String),

    /// Route path is not absolute or contains an empty segment
    #[error("Invalid route path: {0}")]
    InvalidRoutePath(String),

    /// Translation catalog could not be read or parsed
    #[error("Catalog error ({language}): {message}")]
    Catalog { language: String, message: String },

    /// Dashboard feed could not be read or parsed
    #[error("Feed error: {0}")]
    Feed(String),

    /// Route table file could not be read or parsed
    #[error("Route table error: {0}")]
    RouteTable(String),
}

impl CoreError {
    /// Whether the error comes from an authoring mistake in an external input
    /// (route table, catalog, feed) rather than the environment.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Feed(_) | Self::Catalog { .. } => true,
            Self::DuplicateRoute(_)
            | Self::CollidingRoute { .. }
            | Self::MissingRoute(_)
            | Self::InvalidRoutePath(_)
            | Self::RouteTable(_) => false,
        }
    }

    /// Whether this error is a configuration fault that must abort startup.
    #[must_use]
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRoute(_)
                | Self::CollidingRoute { .. }
                | Self::MissingRoute(_)
                | Self::InvalidRoutePath(_)
                | Self::RouteTable(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
