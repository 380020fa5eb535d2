//! Layered configuration resolution for Wrench
//!
//! This crate turns a cascade of properties resources into per-target
//! deployment contexts:
//!
//! - **Property store**: flat, ordered key/value accumulator with defaults
//! - **Cascade**: ordered loading of client, instance, list, target and
//!   secrets resources
//! - **Tree**: nested configuration built from dotted keys
//! - **Targets**: context resolution against environment and host units
//!
//! # Architecture
//!
//! ```text
//!               wrench-cli
//!                   |
//!              wrench-core
//!                   |
//!               wrench-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use wrench_core::{GroupId, InstanceResolver};
//! use wrench_fs::DirectoryResources;
//!
//! let group = GroupId::new("com.example.app")?;
//! let resolved = InstanceResolver::new(group, DirectoryResources::new("resources")).resolve()?;
//! for (target, context) in resolved.contexts() {
//!     println!("{target}: {:?}", context.get("environment"));
//! }
//! ```

pub mod cascade;
pub mod error;
pub mod group;
pub mod listing;
pub mod resolver;
pub mod store;
pub mod targets;
pub mod tree;
pub mod versioning;

pub use cascade::{Cascade, ListStage, Profile};
pub use error::{Error, Result};
pub use group::GroupId;
pub use resolver::{ClientResolver, InstanceResolver, ResolvedInstance};
pub use store::PropertyStore;
pub use targets::{Cardinality, TargetResolver, UnitRegistry, resolve_system};
pub use tree::{Node, NodeExt, Value};
pub use versioning::shorten_version;
