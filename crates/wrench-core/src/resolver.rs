//! Instance and client resolution
//!
//! [`InstanceResolver`] runs the whole pipeline for a deployable instance:
//! application defaults, the instance cascade with secrets, the tree
//! builder, system selection and target resolution. [`ClientResolver`]
//! only runs the client cascade and hands back the flat store.

use std::path::PathBuf;

use indexmap::IndexMap;
use wrench_fs::{ResourceLoader, ResourceName, ResourcePath};

use crate::cascade::{Cascade, Profile};
use crate::targets::{CONTEXT, TARGETS, resolve_declared};
use crate::tree::{self, Node, NodeExt};
use crate::{GroupId, PropertyStore, Result};

/// Resolves the configuration of one deployable instance.
#[derive(Debug, Clone)]
pub struct InstanceResolver<L> {
    group: GroupId,
    resources: L,
    secrets_dir: Option<PathBuf>,
    defaults: Option<PropertyStore>,
    application_defaults: bool,
}

impl<L: ResourceLoader> InstanceResolver<L> {
    /// Create a resolver for `group` reading from `resources`.
    pub fn new(group: GroupId, resources: L) -> Self {
        Self {
            group,
            resources,
            secrets_dir: None,
            defaults: None,
            application_defaults: true,
        }
    }

    /// Search for a secrets file starting at `dir`.
    pub fn with_secrets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.secrets_dir = Some(dir.into());
        self
    }

    /// Use `defaults` as the defaults store. Application defaults, when
    /// enabled, are merged over it.
    pub fn with_defaults(mut self, defaults: PropertyStore) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Skip `<group>/application.properties`.
    pub fn without_application_defaults(mut self) -> Self {
        self.application_defaults = false;
        self
    }

    pub fn group(&self) -> &GroupId {
        &self.group
    }

    /// Run the full resolution.
    ///
    /// # Errors
    ///
    /// Propagates cascade, tree shape and target resolution errors. Nothing
    /// partially resolved is returned on failure.
    pub fn resolve(&self) -> Result<ResolvedInstance> {
        let defaults = self.load_defaults()?;
        let mut properties = PropertyStore::with_defaults(defaults);

        let cascade = Cascade::new(&self.resources, Profile::Instance).with_group(self.group.clone());
        let cascade = match &self.secrets_dir {
            Some(dir) => cascade.with_secrets_dir(dir),
            None => cascade,
        };
        let loaded = cascade.load(&mut properties)?;

        let tree = tree::build(&properties)?;
        let (system, target_names) = resolve_declared(tree::select_system(&tree, &self.group)?)?;

        let resolved = ResolvedInstance {
            group: self.group.clone(),
            properties,
            tree,
            system,
            target_names,
            loaded,
        };
        tracing::info!(
            group = %resolved.group,
            resources = resolved.loaded.len(),
            properties = resolved.properties.len(),
            targets = resolved.target_names().len(),
            "Resolved instance configuration"
        );
        Ok(resolved)
    }

    fn load_defaults(&self) -> Result<PropertyStore> {
        let mut defaults = self.defaults.clone().unwrap_or_default();
        if !self.application_defaults {
            return Ok(defaults);
        }

        let path = self.group.path().join(ResourceName::Application.as_str());
        match self.resources.load(&path) {
            Ok(properties) => {
                let count = defaults.merge(properties);
                tracing::debug!(resource = %path, keys = count, "Loaded application defaults");
            }
            Err(e) if e.is_resource_not_found() => {
                tracing::debug!(resource = %path, "No application defaults - skipping");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(defaults)
    }
}

/// The outcome of an instance resolution. Read-only.
#[derive(Debug, Clone)]
pub struct ResolvedInstance {
    group: GroupId,
    properties: PropertyStore,
    tree: Node,
    system: Node,
    target_names: Vec<String>,
    loaded: Vec<String>,
}

impl ResolvedInstance {
    pub fn group(&self) -> &GroupId {
        &self.group
    }

    /// The flat store after every cascade stage.
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// The whole tree, before target resolution.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// The resolved system subtree.
    pub fn system(&self) -> &Node {
        &self.system
    }

    /// The targets mapping, without its listing.
    pub fn targets(&self) -> Option<&Node> {
        self.system.node(TARGETS)
    }

    /// Names of the resolved targets, in declaration order: the order of
    /// `targets.listing` when present.
    pub fn target_names(&self) -> Vec<&str> {
        self.target_names.iter().map(String::as_str).collect()
    }

    pub fn target(&self, name: &str) -> Option<&Node> {
        self.targets()?.node(name)
    }

    /// The context of a resolved target.
    pub fn context(&self, name: &str) -> Option<&Node> {
        self.target(name)?.node(CONTEXT)
    }

    /// Every resolved context keyed by target name.
    pub fn contexts(&self) -> IndexMap<&str, &Node> {
        self.target_names()
            .into_iter()
            .filter_map(|name| self.context(name).map(|context| (name, context)))
            .collect()
    }

    /// Resources merged into the store, in load order.
    pub fn loaded_resources(&self) -> &[String] {
        &self.loaded
    }
}

/// Resolves client properties: the client cascade without the tree.
#[derive(Debug, Clone)]
pub struct ClientResolver<L> {
    resources: L,
    group: Option<GroupId>,
    resource_path: Option<ResourcePath>,
    secrets_dir: Option<PathBuf>,
    defaults: Option<PropertyStore>,
}

impl<L: ResourceLoader> ClientResolver<L> {
    /// Client properties anchored at `<group>/client.properties`.
    pub fn for_group(group: GroupId, resources: L) -> Self {
        Self {
            resources,
            group: Some(group),
            resource_path: None,
            secrets_dir: None,
            defaults: None,
        }
    }

    /// Client properties anchored at an explicit resource.
    pub fn for_resource(path: impl Into<ResourcePath>, resources: L) -> Self {
        Self {
            resources,
            group: None,
            resource_path: Some(path.into()),
            secrets_dir: None,
            defaults: None,
        }
    }

    pub fn with_secrets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.secrets_dir = Some(dir.into());
        self
    }

    pub fn with_defaults(mut self, defaults: PropertyStore) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Run the client cascade.
    ///
    /// # Errors
    ///
    /// Fails when the client anchor or a list element resource is missing,
    /// or on any parse or I/O error.
    pub fn resolve(&self) -> Result<PropertyStore> {
        let mut properties = match &self.defaults {
            Some(defaults) => PropertyStore::with_defaults(defaults.clone()),
            None => PropertyStore::new(),
        };

        let mut cascade = Cascade::new(&self.resources, Profile::Client);
        if let Some(group) = &self.group {
            cascade = cascade.with_group(group.clone());
        }
        if let Some(path) = &self.resource_path {
            cascade = cascade.with_resource_path(path.clone());
        }
        if let Some(dir) = &self.secrets_dir {
            cascade = cascade.with_secrets_dir(dir);
        }

        let loaded = cascade.load(&mut properties)?;
        tracing::info!(
            resources = loaded.len(),
            properties = properties.len(),
            "Resolved client properties"
        );
        Ok(properties)
    }
}
