//! Resource loaders
//!
//! A resource loader maps a [`ResourcePath`] such as
//! `com/example/app/client.properties` to parsed [`Properties`]. The
//! directory loader searches an ordered list of roots, the way a class path
//! is searched; the memory loader serves fixed content for tests and
//! embedders.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::properties::{Properties, parse_properties};
use crate::{Error, ResourcePath, Result, io};

/// Loads named properties resources.
pub trait ResourceLoader {
    /// Load and parse the resource at `path`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ResourceNotFound`] when no resource exists at
    /// `path`, and with a parse or I/O error when one exists but is unusable.
    fn load(&self, path: &ResourcePath) -> Result<Properties>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
    fn load(&self, path: &ResourcePath) -> Result<Properties> {
        (**self).load(path)
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Box<T> {
    fn load(&self, path: &ResourcePath) -> Result<Properties> {
        (**self).load(path)
    }
}

/// Resources stored as files below one or more root directories.
///
/// Roots are searched in order; the first root containing the path wins.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResources {
    roots: Vec<PathBuf>,
}

impl DirectoryResources {
    /// Create a loader over a single root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Create a loader over several roots, searched in the given order.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured roots in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the file backing `path`, if any root has one.
    pub fn locate(&self, path: &ResourcePath) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| path.to_native_under(root))
            .find(|candidate| candidate.is_file())
    }

    fn load_from(&self, file: &Path, path: &ResourcePath) -> Result<Properties> {
        let content = io::read_text_if_exists(file)?.ok_or_else(|| Error::not_found(path.as_str()))?;
        parse_properties(path.as_str(), &content)
    }
}

impl ResourceLoader for DirectoryResources {
    fn load(&self, path: &ResourcePath) -> Result<Properties> {
        let file = self
            .locate(path)
            .ok_or_else(|| Error::not_found(path.as_str()))?;
        tracing::debug!(resource = %path, file = %file.display(), "Reading resource");
        self.load_from(&file, path)
    }
}

/// Resources held in memory as properties text, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: IndexMap<ResourcePath, String>,
}

impl MemoryResources {
    /// Create an empty in-memory loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content at the same path.
    pub fn insert(&mut self, path: impl Into<ResourcePath>, content: impl Into<String>) {
        self.entries.insert(path.into(), content.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<ResourcePath>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// True when a resource exists at `path`.
    pub fn contains(&self, path: &ResourcePath) -> bool {
        self.entries.contains_key(path)
    }
}

impl ResourceLoader for MemoryResources {
    fn load(&self, path: &ResourcePath) -> Result<Properties> {
        let content = self
            .entries
            .get(path)
            .ok_or_else(|| Error::not_found(path.as_str()))?;
        parse_properties(path.as_str(), content)
    }
}
