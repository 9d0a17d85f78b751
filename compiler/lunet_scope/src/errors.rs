//! Errors raised by the environment layer.
//!
//! Scope operations themselves are total: reading an unbound name yields
//! nil and every write succeeds. Only the scope stack can refuse work.

use thiserror::Error;

/// Error returned when the environment refuses to open another scope.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    /// Opening a scope would exceed the configured nesting limit.
    #[error("scope nesting depth {depth} exceeds the limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}
