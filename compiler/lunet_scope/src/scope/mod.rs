//! Lexical scopes and the shared handle that links them.
//!
//! A `Scope` owns its bindings and points at its enclosing scope through a
//! `LocalScope` handle. Links only ever point outward, so a chain can never
//! form a reference cycle.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lunet_value::Value;

use crate::stack::ensure_sufficient_stack;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// This type wraps `Rc<RefCell<T>>` and enforces that all scope allocations
/// go through the `LocalScope::new()` factory method.
///
/// # Thread Safety
/// `LocalScope<T>` is NOT thread-safe. It uses `Rc` internally, so it is
/// neither `Send` nor `Sync`: hosts that evaluate concurrently must give
/// each thread its own scope chain.
///
/// # Lifetime
/// A child scope and every closure that captured a scope hold a clone of
/// its handle. The scope lives as long as the longest of those holders.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LocalScope<Scope> {
    /// Allocate a new scope whose parent is this one.
    #[inline]
    #[must_use]
    pub fn child(&self) -> Self {
        LocalScope::new(Scope::with_parent(self.clone()))
    }

    /// Walk up to the root (global) scope of this chain.
    #[must_use]
    pub fn root(&self) -> Self {
        let mut current = self.clone();
        loop {
            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Number of scopes in the chain, counting this one and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.borrow().parent.clone();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.borrow().parent.clone();
        }
        depth
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Default)]
pub struct Scope {
    /// Variable bindings local to this scope.
    bindings: FxHashMap<String, Value>,
    /// Enclosing scope; `None` for the root.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new root scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a new scope nested inside `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Returns `true` if this scope has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The enclosing scope, if any.
    #[inline]
    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Returns `true` if `name` is bound in this scope itself.
    #[inline]
    pub fn has_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings local to this scope.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over this scope's own bindings (no particular order).
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    ///
    /// This is how declarations introduce block-local variables.
    #[inline]
    pub fn set_local(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_owned(), value);
        }
    }

    /// Bind `name` in the root scope of this chain.
    ///
    /// Scopes between this one and the root are left untouched, even if they
    /// shadow `name`.
    pub fn set_global(&mut self, name: &str, value: Value) {
        match &self.parent {
            None => self.set_local(name, value),
            Some(parent) => {
                ensure_sufficient_stack(|| parent.borrow_mut().set_global(name, value));
            }
        }
    }

    /// Look up a variable by name.
    ///
    /// Returns `None` only when no scope in the chain binds `name`. A name
    /// explicitly bound to nil is found and yields `Some(Value::Nil)`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return ensure_sufficient_stack(|| parent.borrow().lookup(name));
        }
        None
    }

    /// Resolve `name`, innermost scope first, or nil if nothing binds it.
    #[inline]
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name).unwrap_or_default()
    }

    /// Assign to the nearest binding of `name`.
    ///
    /// Each scope checks its own bindings as the recursion moves outward; the
    /// first scope that binds `name` is updated. The recursion stops at the
    /// root, so a name that is bound nowhere gets created in the root scope.
    pub fn set(&mut self, name: &str, value: Value) {
        match &self.parent {
            Some(parent) if !self.bindings.contains_key(name) => {
                ensure_sufficient_stack(|| parent.borrow_mut().set(name, value));
            }
            _ => self.set_local(name, value),
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.bindings)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Unlinks the parent chain with a loop.
///
/// The implicit drop would recurse once per scope; a chain as deep as the
/// program's block nesting must not overflow the stack on teardown.
impl Drop for Scope {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(LocalScope(handle)) = parent {
            // Stop at the first ancestor someone else still holds.
            match Rc::try_unwrap(handle) {
                Ok(cell) => parent = cell.into_inner().parent.take(),
                Err(_) => break,
            }
        }
    }
}
