//! [`TestResources`] builder for temporary resource roots.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wrench_fs::DirectoryResources;

/// A temporary directory used as a resource root.
///
/// Files are written relative to the root with `/`-separated paths, the
/// same form resource paths take.
///
/// # Example
///
/// ```rust,no_run
/// use wrench_test_utils::TestResources;
///
/// let resources = TestResources::new()
///     .with("com/example/app/client.properties", "com.example.app.name=demo\n");
/// resources.assert_file_exists("com/example/app/client.properties");
/// let loader = resources.loader();
/// ```
pub struct TestResources {
    temp_dir: TempDir,
}

impl Default for TestResources {
    fn default() -> Self {
        Self::new()
    }
}

impl TestResources {
    /// Create an empty temporary resource root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` below the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` at `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestResources::write: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestResources::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Builder form of [`write`](Self::write).
    pub fn with(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    /// Create an empty directory at `relative` and return its path.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// A directory loader rooted here.
    pub fn loader(&self) -> DirectoryResources {
        DirectoryResources::new(self.root())
    }

    /// Assert that `relative` exists below the root.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
