//! Stack growth for the scope chain's recursive operations.
//!
//! `Scope::lookup`, `Scope::set` and `Scope::set_global` recurse once per
//! enclosing scope, and chain length follows the program's block nesting,
//! which `EnvConfig` leaves unbounded by default. Each recursive step goes
//! through [`ensure_sufficient_stack`]. Teardown does not recurse: `Scope`'s
//! `Drop` unlinks parents in a loop.

/// Run `f`, growing the stack first if little of it remains.
///
/// Native targets grow with `stacker`; wasm32 calls `f` directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated.
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each new stack segment.
    const SEGMENT_SIZE: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
