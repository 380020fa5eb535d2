//! Group identifiers

use std::str::FromStr;

use wrench_fs::ResourcePath;

use crate::{Error, Result};

/// A dotted namespace such as `com.example.app`.
///
/// The group selects the system subtree, scopes list keys
/// (`com.example.app.hosts`) and locates anchor resources
/// (`com/example/app/client.properties`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Validate and wrap a group identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupId`] for an empty identifier or one with
    /// empty segments.
    pub fn new(group: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let group_trimmed = group.trim();
        if group_trimmed.is_empty() || group_trimmed.split('.').any(str::is_empty) {
            return Err(Error::InvalidGroupId { group });
        }
        Ok(Self(group_trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The resource directory for this group.
    pub fn path(&self) -> ResourcePath {
        ResourcePath::from_dotted(&self.0)
    }

    /// A key scoped to this group, e.g. `com.example.app.hosts`.
    pub fn key(&self, suffix: &str) -> String {
        format!("{}.{}", self.0, suffix)
    }
}

impl FromStr for GroupId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
