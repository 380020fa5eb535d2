//! Target context resolution
//!
//! Each target under `targets` in the system subtree references units
//! (environments, hosts, or any types named by `units.listing`) either one
//! at a time (`host.name = h1`) or as an ordered list
//! (`hosts.listing = h1,h2`). Resolution gives every declared target a
//! `context`: the system subtree without `targets`, plus the referenced
//! unit definitions merged in.

mod resolver;
mod units;

pub use resolver::{CONTEXT, TARGETS, TargetResolver, declared_targets, resolve_system};
pub(crate) use resolver::resolve_declared;
pub use units::{Cardinality, DEFAULT_UNIT_TYPES, UnitRegistry};
