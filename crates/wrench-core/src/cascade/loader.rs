use std::path::PathBuf;

use wrench_fs::{ResourceLoader, ResourceName, ResourcePath, SecretsLocator, load_file};

use super::{ListStage, Profile};
use crate::listing::{LISTING, split_listing};
use crate::{GroupId, PropertyStore, Result};

/// Derive the resource directory for a list key.
///
/// Dots become path separators and a trailing `listing` segment is dropped,
/// so `com.example.app.hosts.listing` and `com.example.app.hosts` both name
/// `com/example/app/hosts`.
pub fn list_resource_dir(key: &str) -> ResourcePath {
    let path = ResourcePath::from_dotted(key);
    if path.file_name() == Some(LISTING) {
        return path.parent().unwrap_or(path);
    }
    path
}

/// Loads the cascade stages for one profile into a store.
///
/// With a group id, anchors live at `<group path>/<stage>.properties` and
/// list keys are scoped as `<group>.<stage>`. Without one, every anchor
/// uses the configured resource path and list keys are the bare stage
/// names.
#[derive(Debug, Clone)]
pub struct Cascade<L> {
    resources: L,
    profile: Profile,
    group: Option<GroupId>,
    resource_path: Option<ResourcePath>,
    secrets_dir: Option<PathBuf>,
    secrets: SecretsLocator,
}

impl<L: ResourceLoader> Cascade<L> {
    /// Create a cascade reading from `resources`.
    pub fn new(resources: L, profile: Profile) -> Self {
        Self {
            resources,
            profile,
            group: None,
            resource_path: None,
            secrets_dir: None,
            secrets: SecretsLocator::new(),
        }
    }

    /// Scope anchors and list keys to a group.
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Anchor resource used when no group is configured.
    pub fn with_resource_path(mut self, path: impl Into<ResourcePath>) -> Self {
        self.resource_path = Some(path.into());
        self
    }

    /// Search for secrets starting at `dir`.
    pub fn with_secrets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.secrets_dir = Some(dir.into());
        self
    }

    /// Use a custom secrets locator.
    pub fn with_secrets_locator(mut self, locator: SecretsLocator) -> Self {
        self.secrets = locator;
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn group(&self) -> Option<&GroupId> {
        self.group.as_ref()
    }

    /// Run every stage in order, merging into `store`.
    ///
    /// Returns the resources that were loaded, in load order.
    ///
    /// # Errors
    ///
    /// Fails on a missing mandatory anchor, a missing list element resource,
    /// or any parse or I/O error. Missing optional anchors and a missing
    /// secrets file are skipped.
    pub fn load(&self, store: &mut PropertyStore) -> Result<Vec<String>> {
        let mut loaded = Vec::new();

        for (name, required) in self.profile.leading_anchors() {
            self.load_anchor(store, *name, *required, &mut loaded)?;
        }
        for stage in ListStage::ALL {
            self.load_list(store, stage, &mut loaded)?;
        }
        for (name, required) in self.profile.trailing_anchors() {
            self.load_anchor(store, *name, *required, &mut loaded)?;
        }
        self.load_secrets(store, &mut loaded)?;

        tracing::debug!(
            profile = ?self.profile,
            resources = loaded.len(),
            keys = store.len(),
            "Cascade complete"
        );
        Ok(loaded)
    }

    /// The anchor resource path for a stage, if one can be derived.
    pub fn anchor_path(&self, name: ResourceName) -> Option<ResourcePath> {
        match &self.group {
            Some(group) => Some(group.path().join(name.as_str())),
            None => self.resource_path.clone(),
        }
    }

    /// The key holding the element list for a list stage.
    ///
    /// Uses `<group>.<stage>` (or the bare stage name without a group) when
    /// the store has it, and `<key>.listing` otherwise.
    pub fn list_key(&self, store: &PropertyStore, stage: ListStage) -> String {
        let key = match &self.group {
            Some(group) => group.key(stage.name()),
            None => stage.name().to_string(),
        };
        if store.contains(&key) {
            key
        } else {
            format!("{key}.{LISTING}")
        }
    }

    fn load_anchor(
        &self,
        store: &mut PropertyStore,
        name: ResourceName,
        required: bool,
        loaded: &mut Vec<String>,
    ) -> Result<()> {
        let Some(path) = self.anchor_path(name) else {
            if required {
                return Err(wrench_fs::Error::not_found(format!("<unset> ({name})")).into());
            }
            tracing::debug!(stage = name.stem(), "No resource path for optional stage - skipping");
            return Ok(());
        };

        match self.resources.load(&path) {
            Ok(properties) => {
                let count = store.merge(properties);
                tracing::debug!(resource = %path, keys = count, stage = name.stem(), "Loaded anchor");
                loaded.push(path.to_string());
                Ok(())
            }
            Err(e) if e.is_resource_not_found() && !required => {
                tracing::debug!(resource = %path, stage = name.stem(), "Optional anchor not found - skipping");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn load_list(
        &self,
        store: &mut PropertyStore,
        stage: ListStage,
        loaded: &mut Vec<String>,
    ) -> Result<()> {
        let key = self.list_key(store, stage);
        let Some(value) = store.get(&key).map(str::to_string) else {
            tracing::debug!(%stage, %key, "No list defined - skipping");
            return Ok(());
        };

        let dir = list_resource_dir(&key);
        for element in split_listing(&value) {
            let path = dir.properties(element);
            let properties = self.resources.load(&path)?;
            let count = store.merge(properties);
            tracing::debug!(%stage, resource = %path, keys = count, "Loaded list element");
            loaded.push(path.to_string());
        }
        Ok(())
    }

    fn load_secrets(&self, store: &mut PropertyStore, loaded: &mut Vec<String>) -> Result<()> {
        let Some(dir) = &self.secrets_dir else {
            return Ok(());
        };
        if let Some(file) = self.secrets.locate(dir) {
            let count = store.merge(load_file(&file)?);
            tracing::debug!(path = %file.display(), keys = count, "Merged secrets");
            loaded.push(file.display().to_string());
        }
        Ok(())
    }
}
