//! Building resolvers from the source arguments

use wrench_core::{GroupId, InstanceResolver, ResolvedInstance};
use wrench_fs::DirectoryResources;

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// The group from `--group` or `WRENCH_GROUP`.
pub fn group(source: &SourceArgs) -> Result<GroupId> {
    let group = source
        .group
        .as_deref()
        .ok_or_else(|| CliError::user("No group given. Pass --group or set WRENCH_GROUP."))?;
    Ok(GroupId::new(group)?)
}

/// Resource roots in search order.
pub fn resources(source: &SourceArgs) -> DirectoryResources {
    for root in &source.resources {
        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "Resource root is not a directory");
        }
    }
    DirectoryResources::with_roots(source.resources.iter().cloned())
}

/// Run the instance resolution described by `source`.
pub fn resolve_instance(source: &SourceArgs) -> Result<ResolvedInstance> {
    let mut resolver = InstanceResolver::new(group(source)?, resources(source));
    if let Some(dir) = &source.secrets_dir {
        resolver = resolver.with_secrets_dir(dir);
    }
    Ok(resolver.resolve()?)
}
