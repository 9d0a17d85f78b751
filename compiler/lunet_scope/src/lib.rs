//! Lunet Scope - Lexical environment for the Lunet interpreter.
//!
//! Resolves variable names to values across nested blocks.
//!
//! # Architecture
//!
//! - `Scope`: one block's bindings plus a link to the enclosing scope
//! - `LocalScope<T>`: the single-threaded shared handle scopes are held by
//! - `Environment`: the evaluator's stack of scopes, with depth limits
//! - `ScopedEnvironment`: RAII guard that pops a block scope on drop
//! - `DynamicMembers`: named-member access for host bridges
//!
//! # Assignment Forms
//!
//! - `set_local`: declare in the innermost scope (shadows outer bindings)
//! - `set_global`: write into the root scope
//! - `set`: update the nearest existing binding, else create it in the root
//!
//! Reading an unbound name is not an error; it yields `Value::Nil`.

mod config;
mod environment;
mod errors;
mod members;
mod scope;
mod scope_guard;
mod stack;

use std::sync::Once;

pub use config::{EnvConfig, DEFAULT_MAX_DEPTH};
pub use environment::Environment;
pub use errors::ScopeError;
pub use lunet_value::Value;
pub use members::DynamicMembers;
pub use scope::{LocalScope, Scope};
pub use scope_guard::ScopedEnvironment;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that logs scope activity.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, for example
/// `RUST_LOG=lunet_scope=trace`. Only the first call has any effect. If the
/// host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Ok(filter) = EnvFilter::try_from_default_env() {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .try_init();
        }
    });
}
