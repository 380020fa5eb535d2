use crate::listing::{LISTING, split_listing};
use crate::tree::{Node, NodeExt, Value};
use crate::{Error, Result};

/// Unit types recognized when the system declares no `units.listing`.
pub const DEFAULT_UNIT_TYPES: [&str; 2] = ["environment", "host"];

/// How a target refers to units of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `target.<type>.name` names a single unit.
    One,
    /// `target.<type>s.listing` names an ordered list of units.
    Many,
}

impl Cardinality {
    /// The key this form uses on a target, e.g. `host` or `hosts`.
    pub fn key(self, unit_type: &str) -> String {
        match self {
            Self::One => unit_type.to_string(),
            Self::Many => format!("{unit_type}s"),
        }
    }
}

/// The unit types of a system subtree, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistry {
    types: Vec<String>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self {
            types: DEFAULT_UNIT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl UnitRegistry {
    /// Read `units.listing` from the system, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// A `units.listing` that is a mapping rather than a scalar is a shape
    /// conflict.
    pub fn for_system(system: &Node) -> Result<Self> {
        match system.lookup(&["units", LISTING]) {
            None => Ok(Self::default()),
            Some(Value::Scalar(listing)) => Ok(Self {
                types: split_listing(listing).map(str::to_string).collect(),
            }),
            Some(Value::Node(_)) => Err(Error::shape(
                "units.listing",
                "expected a comma-separated list of unit types",
            )),
        }
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }
}
