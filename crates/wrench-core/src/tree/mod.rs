//! Nested configuration tree built from dotted keys
//!
//! Every flat key `a.b.c` becomes the path `root["a"]["b"]["c"]`. Each
//! level keeps the first-insertion order of its keys so rendered output
//! follows the order of the configuration files.

mod builder;
mod value;

pub use builder::{build, build_from};
pub use value::{Node, NodeExt, Value};

use crate::{Error, GroupId, Result};

/// Select the system subtree for `group` from the root of a tree.
///
/// A missing segment yields an empty subtree; a scalar on the way is a
/// shape conflict.
pub fn select_system(root: &Node, group: &GroupId) -> Result<Node> {
    let mut current = root;
    let mut walked = Vec::new();
    for segment in group.segments() {
        walked.push(segment);
        match current.get(segment) {
            Some(Value::Node(node)) => current = node,
            Some(Value::Scalar(_)) => {
                return Err(Error::shape(
                    walked.join("."),
                    format!("group {group} needs a mapping here but a scalar is defined"),
                ));
            }
            None => {
                tracing::debug!(%group, missing = %walked.join("."), "Group has no configuration");
                return Ok(Node::new());
            }
        }
    }
    Ok(current.clone())
}
