use super::{Cardinality, UnitRegistry};
use crate::listing::{LISTING, split_listing};
use crate::tree::{Node, NodeExt, Value};
use crate::{Error, Result};

/// Key of the targets mapping in the system subtree.
pub const TARGETS: &str = "targets";

/// Key a resolved target stores its context under.
pub const CONTEXT: &str = "context";

const NAME: &str = "name";

/// Builds target contexts against one system subtree.
#[derive(Debug)]
pub struct TargetResolver<'a> {
    system: &'a Node,
    units: UnitRegistry,
}

impl<'a> TargetResolver<'a> {
    /// Create a resolver over `system`. Any `targets` entry in it is left
    /// out of the contexts this resolver builds.
    pub fn new(system: &'a Node) -> Result<Self> {
        Ok(Self {
            system,
            units: UnitRegistry::for_system(system)?,
        })
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    /// Give `target` its `context`.
    ///
    /// A target that already has a context is left untouched. This guard
    /// also stops re-entrant resolution from looping, so it stays even
    /// though units cannot reference targets today.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedUnit`] when a referenced unit has no
    /// definition, and [`Error::ConfigShape`] for a unit reference without
    /// a name or listing.
    pub fn resolve(&self, target_name: &str, target: &mut Node) -> Result<()> {
        if target.contains_key(CONTEXT) {
            tracing::debug!(target = target_name, "Context already resolved");
            return Ok(());
        }

        let mut context = self.system.clone();
        context.shift_remove(TARGETS);

        for unit_type in self.units.types() {
            if target.contains_key(&Cardinality::One.key(unit_type)) {
                self.resolve_units(target_name, unit_type, Cardinality::One, target, &mut context)?;
            } else if target.contains_key(&Cardinality::Many.key(unit_type)) {
                self.resolve_units(target_name, unit_type, Cardinality::Many, target, &mut context)?;
            }
        }

        tracing::debug!(target = target_name, keys = context.len(), "Resolved target context");
        target.insert(CONTEXT.to_string(), Value::Node(context));
        Ok(())
    }

    fn resolve_units(
        &self,
        target_name: &str,
        unit_type: &str,
        cardinality: Cardinality,
        target: &mut Node,
        context: &mut Node,
    ) -> Result<()> {
        let key = cardinality.key(unit_type);
        let entry_path = format!("{TARGETS}.{target_name}.{key}");

        match cardinality {
            Cardinality::One => {
                let entry = target
                    .get_mut(&key)
                    .and_then(Value::as_node_mut)
                    .ok_or_else(|| Error::shape(&entry_path, "expected a mapping with a name"))?;
                let unit_name = entry
                    .scalar(NAME)
                    .ok_or_else(|| Error::shape(&entry_path, "unit reference has no name"))?
                    .to_string();
                let unit = self.unit(target_name, unit_type, &unit_name)?;

                // Unit fields overwrite the target's own stub fields
                entry.extend(unit.clone());
                context.insert(key, Value::Node(entry.clone()));
            }
            Cardinality::Many => {
                let listing = target
                    .node(&key)
                    .ok_or_else(|| Error::shape(&entry_path, "expected a mapping with a listing"))?
                    .scalar(LISTING)
                    .ok_or_else(|| Error::shape(&entry_path, "unit list has no listing"))?;

                for (index, unit_name) in split_listing(listing).enumerate() {
                    let unit = self.unit(target_name, unit_type, unit_name)?;
                    let slot = format!("{unit_type}{index}");
                    // Types sharing an index space enrich the same slot
                    match context
                        .entry(slot.clone())
                        .or_insert_with(|| Value::Node(Node::new()))
                    {
                        Value::Node(accumulator) => accumulator.extend(unit.clone()),
                        Value::Scalar(_) => {
                            return Err(Error::shape(slot, "context slot for a unit list is a scalar"));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn unit(&self, target_name: &str, unit_type: &str, unit_name: &str) -> Result<&'a Node> {
        self.system
            .node(&Cardinality::Many.key(unit_type))
            .and_then(|units| units.node(unit_name))
            .ok_or_else(|| Error::UnresolvedUnit {
                target: target_name.to_string(),
                unit_type: unit_type.to_string(),
                unit: unit_name.to_string(),
            })
    }
}

/// Target names declared by a targets mapping.
///
/// `targets.listing` wins when present; otherwise every mapping-valued
/// child is a target, in insertion order.
pub fn declared_targets(targets: &Node) -> Vec<String> {
    match targets.scalar(LISTING) {
        Some(listing) => split_listing(listing).map(str::to_string).collect(),
        None => targets
            .iter()
            .filter(|(_, value)| value.is_node())
            .map(|(name, _)| name.clone())
            .collect(),
    }
}

/// Resolve every declared target of a system subtree.
///
/// Consumes the subtree and returns it with a `context` in each target and
/// the `listing` removed from `targets`. Nothing is returned on failure, so
/// a half-resolved subtree is never observable.
///
/// # Errors
///
/// Returns [`Error::MissingTargetDefinition`] for a declared target with no
/// mapping, plus any error from [`TargetResolver::resolve`].
pub fn resolve_system(system: Node) -> Result<Node> {
    resolve_declared(system).map(|(system, _)| system)
}

/// As [`resolve_system`], also returning the declared target names in
/// declaration order. The order is lost once `listing` is removed.
pub(crate) fn resolve_declared(mut system: Node) -> Result<(Node, Vec<String>)> {
    let Some((index, _, targets)) = system.shift_remove_full(TARGETS) else {
        tracing::debug!("No targets defined");
        return Ok((system, Vec::new()));
    };
    let Value::Node(mut targets) = targets else {
        return Err(Error::shape(TARGETS, "expected a mapping of targets"));
    };

    let names = declared_targets(&targets);
    {
        let resolver = TargetResolver::new(&system)?;
        for name in &names {
            let target = targets
                .get_mut(name)
                .and_then(Value::as_node_mut)
                .ok_or_else(|| Error::MissingTargetDefinition {
                    target: name.clone(),
                })?;
            resolver.resolve(name, target)?;
        }
    }

    targets.shift_remove(LISTING);
    system.shift_insert(index, TARGETS.to_string(), Value::Node(targets));
    tracing::debug!(targets = names.len(), "Resolved targets");
    Ok((system, names))
}
