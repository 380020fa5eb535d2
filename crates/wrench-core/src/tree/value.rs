use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping level of the tree.
pub type Node = IndexMap<String, Value>;

/// A tree value: a string scalar or a nested mapping.
///
/// Serializes untagged, so a node renders as a plain map and a scalar as a
/// plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    Node(Node),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Scalar(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// Path lookups on a [`Node`].
pub trait NodeExt {
    /// Walk `path` segment by segment.
    fn lookup(&self, path: &[&str]) -> Option<&Value>;

    /// Walk a dotted path such as `environment.name`.
    fn lookup_dotted(&self, dotted: &str) -> Option<&Value> {
        let segments: Vec<&str> = dotted.split('.').collect();
        self.lookup(&segments)
    }

    /// A direct child scalar.
    fn scalar(&self, key: &str) -> Option<&str>;

    /// A direct child mapping.
    fn node(&self, key: &str) -> Option<&Node>;
}

impl NodeExt for Node {
    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(*first)?;
        for segment in rest {
            current = current.as_node()?.get(*segment)?;
        }
        Some(current)
    }

    fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn node(&self, key: &str) -> Option<&Node> {
        self.get(key).and_then(Value::as_node)
    }
}
