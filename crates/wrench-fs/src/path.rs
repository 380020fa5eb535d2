//! Resource paths relative to a resource root

use std::path::{Path, PathBuf};

use crate::constants::PROPERTIES_SUFFIX;

/// A resource path normalized to forward slashes.
///
/// Resource paths are always relative to a resource root (the directory
/// analogue of a class path entry). Leading slashes, empty segments and
/// `.` segments are dropped so that `com//example/./app` and
/// `/com/example/app` name the same resource. `..` segments are dropped
/// too, so a resource never resolves outside its root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl ResourcePath {
    /// Create a new ResourcePath from any path-like input.
    pub fn new(path: impl AsRef<str>) -> Self {
        let normalized = path.as_ref().replace('\\', "/");
        let inner = normalized
            .split('/')
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .collect::<Vec<_>>()
            .join("/");
        Self { inner }
    }

    /// Convert a dotted name (`com.example.app`) into a path (`com/example/app`).
    pub fn from_dotted(dotted: &str) -> Self {
        Self::new(dotted.replace('.', "/"))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True for the empty path (the resource root itself).
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Join a properties resource named `stem` below this path.
    pub fn properties(&self, stem: &str) -> Self {
        self.join(&format!("{stem}{PROPERTIES_SUFFIX}"))
    }

    /// Get the parent path; the root has none.
    pub fn parent(&self) -> Option<Self> {
        if self.inner.is_empty() {
            return None;
        }
        match self.inner.rfind('/') {
            Some(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None => Some(Self {
                inner: String::new(),
            }),
        }
    }

    /// Get the last segment.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Resolve this resource below a filesystem root.
    pub fn to_native_under(&self, root: &Path) -> PathBuf {
        self.inner
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ResourcePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourcePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_single_segment_is_root() {
        let path = ResourcePath::new("hosts");
        assert_eq!(path.parent(), Some(ResourcePath::new("")));
        assert_eq!(ResourcePath::new("").parent(), None);
    }

    #[test]
    fn parent_segments_cannot_escape_the_root() {
        let path = ResourcePath::new("com/example/app").join("hosts/../../../x");
        assert_eq!(path.as_str(), "com/example/app/hosts/x");
        assert_eq!(ResourcePath::new("../../etc\\..\\passwd").as_str(), "etc/passwd");

        let root = Path::new("/srv/resources");
        assert!(ResourcePath::new("../../x").to_native_under(root).starts_with(root));
    }

    #[test]
    fn join_on_root_does_not_add_slash() {
        let root = ResourcePath::new("");
        assert_eq!(root.join("client.properties").as_str(), "client.properties");
    }
}
