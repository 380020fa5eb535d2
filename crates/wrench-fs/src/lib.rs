//! Resource loading and filesystem plumbing for Wrench
//!
//! Provides resource path handling, the properties format, resource loaders
//! over directory roots or memory, the upward secrets search, and output
//! rendering with atomic writes.

pub mod constants;
pub mod error;
pub mod format;
pub mod io;
pub mod path;
pub mod properties;
pub mod resource;
pub mod secrets;

pub use constants::ResourceName;
pub use error::{Error, Result};
pub use format::{OutputFormat, render};
pub use path::ResourcePath;
pub use properties::{Properties, load_file, parse_properties};
pub use resource::{DirectoryResources, MemoryResources, ResourceLoader};
pub use secrets::SecretsLocator;
