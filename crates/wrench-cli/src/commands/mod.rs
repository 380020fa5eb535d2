//! Command implementations for wrench-cli

pub mod properties;
pub mod resolve;
pub mod source;
pub mod version;

pub use properties::run_properties;
pub use resolve::{run_resolve, run_targets, run_tree};
pub use version::run_shorten_version;
