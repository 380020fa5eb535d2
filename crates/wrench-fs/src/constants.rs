//! Well-known resource names.

use std::path::Path;

/// File extension shared by every properties resource.
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Largest resource the loaders accept (1 MiB).
pub const MAX_RESOURCE_SIZE: u64 = 1_048_576;

/// Fixed resource names used by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName {
    /// `client.properties`, the client anchor
    Client,
    /// `instance.properties`, the instance anchor
    Instance,
    /// `target.properties`, the optional target anchor
    Target,
    /// `application.properties`, defaults for an instance
    Application,
    /// `secrets.properties`, searched upward from the secrets directory
    Secrets,
}

impl ResourceName {
    /// Get the string representation of the resource name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client.properties",
            Self::Instance => "instance.properties",
            Self::Target => "target.properties",
            Self::Application => "application.properties",
            Self::Secrets => "secrets.properties",
        }
    }

    /// The stage name without the suffix, e.g. `client`.
    pub fn stem(&self) -> &'static str {
        self.as_str()
            .strip_suffix(PROPERTIES_SUFFIX)
            .unwrap_or(self.as_str())
    }
}

impl AsRef<Path> for ResourceName {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
