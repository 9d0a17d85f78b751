//! Host-facing member access over scope variables.
//!
//! Host bridges that expose script variables as named members (for example
//! `globals.score` in an embedding API) go through [`DynamicMembers`]
//! instead of reaching into scopes directly.
//!
//! Reads report a miss whenever the resolved value is nil, so the host can
//! fall back to its own resolution. Writes always succeed: the host value is
//! converted with `Into<Value>` and stored with ordinary assignment rules.

use lunet_value::Value;

use crate::{Environment, LocalScope, Scope};

/// Named-member access to a scope chain.
pub trait DynamicMembers {
    /// Read member `name`. `None` when it resolves to nil.
    fn try_get_member(&self, name: &str) -> Option<Value>;

    /// Write member `name` using assignment semantics.
    fn set_member<H: Into<Value>>(&mut self, name: &str, value: H);
}

#[inline]
fn non_nil(value: Value) -> Option<Value> {
    if value.is_nil() {
        None
    } else {
        Some(value)
    }
}

impl DynamicMembers for Scope {
    fn try_get_member(&self, name: &str) -> Option<Value> {
        non_nil(self.get(name))
    }

    fn set_member<H: Into<Value>>(&mut self, name: &str, value: H) {
        self.set(name, value.into());
    }
}

impl DynamicMembers for LocalScope<Scope> {
    fn try_get_member(&self, name: &str) -> Option<Value> {
        self.borrow().try_get_member(name)
    }

    fn set_member<H: Into<Value>>(&mut self, name: &str, value: H) {
        self.borrow_mut().set_member(name, value);
    }
}

impl DynamicMembers for Environment {
    fn try_get_member(&self, name: &str) -> Option<Value> {
        self.current().try_get_member(name)
    }

    fn set_member<H: Into<Value>>(&mut self, name: &str, value: H) {
        self.set(name, value.into());
    }
}
