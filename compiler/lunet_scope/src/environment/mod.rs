//! Environment for variable scoping in the interpreter.
//!
//! Keeps a stack of `LocalScope` handles, innermost on top, so entering and
//! leaving a block is a push and a pop. Each pushed scope is a child of the
//! one below it, so the stack always mirrors a single parent chain.

use lunet_value::Value;

use crate::{EnvConfig, LocalScope, Scope, ScopeError};

/// Environment for the interpreter using a scope stack.
pub struct Environment {
    /// Stack of scopes, with current scope at the top. Never empty.
    scopes: Vec<LocalScope<Scope>>,
    /// Root of the chain the stack is built on.
    global: LocalScope<Scope>,
    /// Chain depth of `scopes[0]`.
    base_depth: usize,
    config: EnvConfig,
}

impl Environment {
    /// Create a new environment with a fresh global scope.
    pub fn new() -> Self {
        Self::with_config(EnvConfig::default())
    }

    /// Create a new environment with a fresh global scope and the given policy.
    pub fn with_config(config: EnvConfig) -> Self {
        Self::with_global(LocalScope::new(Scope::new()), config)
    }

    /// Create an environment on top of a caller-owned scope.
    ///
    /// Normally `base` is the root. If it is nested, it becomes the
    /// environment's base scope and the root of its chain becomes the global.
    pub fn with_global(base: LocalScope<Scope>, config: EnvConfig) -> Self {
        Environment {
            global: base.root(),
            base_depth: base.depth(),
            scopes: vec![base],
            config,
        }
    }

    /// Current nesting depth: number of scopes in the current chain.
    #[inline]
    pub fn depth(&self) -> usize {
        self.base_depth + self.scopes.len() - 1
    }

    #[inline]
    pub fn config(&self) -> EnvConfig {
        self.config
    }

    /// The global (root) scope.
    #[inline]
    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    /// The innermost scope.
    #[inline]
    pub fn current(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Enter a new block scope.
    pub fn push_scope(&mut self) -> Result<(), ScopeError> {
        let depth = self.depth() + 1;
        check_depth(self.config, depth)?;
        let scope = self.current().child();
        self.scopes.push(scope);
        tracing::trace!(depth, "push scope");
        Ok(())
    }

    /// Leave the innermost block scope.
    ///
    /// Returns the popped scope, which stays alive for as long as a closure
    /// holds it. The base scope is never popped; `None` is returned instead.
    pub fn pop_scope(&mut self) -> Option<LocalScope<Scope>> {
        if self.scopes.len() > 1 {
            let popped = self.scopes.pop();
            tracing::trace!(depth = self.depth(), "pop scope");
            popped
        } else {
            None
        }
    }

    /// Resolve `name` from the innermost scope outward; nil if unbound.
    #[inline]
    pub fn get(&self, name: &str) -> Value {
        self.current().borrow().get(name)
    }

    /// Resolve `name`, distinguishing "unbound" from "bound to nil".
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.current().borrow().lookup(name)
    }

    /// Ordinary assignment (`x = v`): see [`Scope::set`].
    #[inline]
    pub fn set(&mut self, name: &str, value: Value) {
        self.current().borrow_mut().set(name, value);
    }

    /// Declaration (`local x = v`) in the innermost scope.
    #[inline]
    pub fn set_local(&mut self, name: &str, value: Value) {
        self.current().borrow_mut().set_local(name, value);
    }

    /// Write `name` straight into the global scope.
    pub fn set_global(&mut self, name: &str, value: Value) {
        tracing::trace!(name, "set global");
        self.current().borrow_mut().set_global(name, value);
    }

    /// Create a child environment for function calls.
    ///
    /// The child shares the global scope but has its own scope stack.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment::with_global(self.global.clone(), self.config)
    }

    /// Capture the current scope for a closure.
    ///
    /// The closure keeps the whole chain alive through this handle, so later
    /// writes to captured variables stay visible to it.
    #[inline]
    pub fn capture(&self) -> LocalScope<Scope> {
        self.current().clone()
    }

    /// Build the environment a closure body runs in.
    ///
    /// The body gets a fresh scope for its parameters and locals, nested
    /// inside the scope the closure captured.
    pub fn enter_closure(&self, captured: &LocalScope<Scope>) -> Result<Self, ScopeError> {
        let base_depth = captured.depth() + 1;
        check_depth(self.config, base_depth)?;
        tracing::trace!(depth = base_depth, "enter closure frame");
        Ok(Environment {
            scopes: vec![captured.child()],
            global: captured.root(),
            base_depth,
            config: self.config,
        })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

fn check_depth(config: EnvConfig, depth: usize) -> Result<(), ScopeError> {
    match config.max_depth {
        Some(limit) if depth > limit => {
            tracing::debug!(depth, limit, "scope depth limit reached");
            Err(ScopeError::DepthExceeded { depth, limit })
        }
        _ => Ok(()),
    }
}
