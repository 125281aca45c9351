//! Preference scopes and caller-preference propagation
//!
//! A `PreferenceScope` is built once at process start (usually from
//! `LoggerConfig::preferences`) and passed by reference into each logging
//! call. Nested calls inherit the caller's settings through
//! `propagate_caller_preferences` instead of redeclaring them.

mod catalog;
mod scope;
mod propagate;

pub use catalog::{PreferenceVariable, CATALOG, lookup, is_catalog_variable};
pub use scope::{ActionPreference, PreferenceScope};
pub use propagate::{Invocation, propagate_caller_preferences};
