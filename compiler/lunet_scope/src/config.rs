//! Configuration for the environment's scope stack.

/// Nesting limit used by [`EnvConfig::bounded`].
///
/// Matches the recursion limit an interpreter uses where the native stack
/// cannot be grown on demand.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Policy knobs for an [`Environment`](crate::Environment).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Maximum number of scopes on the stack, base scope included.
    ///
    /// `None` means unbounded: deep chains rely on stack growth instead.
    pub max_depth: Option<usize>,
}

impl EnvConfig {
    /// Unbounded nesting.
    pub const fn unbounded() -> Self {
        EnvConfig { max_depth: None }
    }

    /// Nesting capped at [`DEFAULT_MAX_DEPTH`].
    pub const fn bounded() -> Self {
        EnvConfig {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
