use super::{Node, Value};
use crate::{Error, PropertyStore, Result};

/// Build the nested tree from the effective keys of a store.
///
/// # Errors
///
/// Returns [`Error::ConfigShape`] when one key needs a mapping where
/// another key put a scalar, or when a key has an empty segment.
pub fn build(store: &PropertyStore) -> Result<Node> {
    build_from(store.iter())
}

/// Build the nested tree from ordered flat pairs.
pub fn build_from<'a, I>(pairs: I) -> Result<Node>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut root = Node::new();
    for (key, value) in pairs {
        insert(&mut root, key, value)?;
    }
    Ok(root)
}

fn insert(root: &mut Node, key: &str, value: &str) -> Result<()> {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::shape(key, "key has an empty path segment"));
    }
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(Error::shape(key, "key is empty"));
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Node(Node::new()))
        {
            Value::Node(node) => node,
            Value::Scalar(_) => {
                return Err(Error::shape(
                    parents[..=depth].join("."),
                    format!("key {key} needs a mapping here but a scalar is already defined"),
                ));
            }
        };
    }

    if current.get(*leaf).is_some_and(Value::is_node) {
        return Err(Error::shape(
            key,
            "scalar value would replace a mapping defined by longer keys",
        ));
    }
    current.insert((*leaf).to_string(), Value::Scalar(value.to_string()));
    Ok(())
}
