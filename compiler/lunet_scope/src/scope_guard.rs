//! RAII-style scope guards for environment management.
//!
//! The guard ensures `pop_scope()` is called when dropped, even during
//! unwinding, so an early `?` return out of a block body cannot leave a
//! stale scope on the stack.
//!
//! # Usage
//!
//! ```text
//! {
//!     let mut scoped = env.scoped()?;
//!     scoped.set_local("i", Value::from(0));
//!     run_block(&mut scoped)?;
//! } // pop_scope called here, even on panic
//!
//! env.with_scope(|scoped| {
//!     scoped.set_local("i", Value::from(0));
//!     run_block(scoped)
//! })?
//! ```

use std::ops::{Deref, DerefMut};

use crate::{Environment, ScopeError};

/// RAII guard that pops the scope it pushed when dropped.
///
/// Access the environment through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedEnvironment<'env> {
    env: &'env mut Environment,
}

impl Drop for ScopedEnvironment<'_> {
    fn drop(&mut self) {
        self.env.pop_scope();
    }
}

impl Deref for ScopedEnvironment<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl DerefMut for ScopedEnvironment<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

impl Environment {
    /// Push a scope and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> Result<ScopedEnvironment<'_>, ScopeError> {
        self.push_scope()?;
        Ok(ScopedEnvironment { env: self })
    }

    /// Run `f` inside a fresh block scope.
    ///
    /// The scope is popped when `f` returns or unwinds.
    pub fn with_scope<T, F>(&mut self, f: F) -> Result<T, ScopeError>
    where
        F: FnOnce(&mut ScopedEnvironment<'_>) -> T,
    {
        let mut scoped = self.scoped()?;
        Ok(f(&mut scoped))
    }
}
