//! Lunet Value - Runtime value representation for the Lunet interpreter.
//!
//! This crate provides:
//! - `Value`, the tagged runtime value stored in scopes
//! - The `Nil` sentinel returned for absent variables
//! - `From` conversions from host (Rust) values into `Value`
//!
//! Conversions are the boundary used by host bridges: anything implementing
//! `Into<Value>` can be written into a scope.

mod value;

pub use value::Value;
