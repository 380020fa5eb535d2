//! Flat property store with a defaults fallback
//!
//! The store is the single accumulator every cascade stage merges into.
//! Lookups consult the local values first and then the defaults store.
//! The defaults chain is exactly one level deep: a defaults store that has
//! its own defaults is flattened when it is attached.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Ordered string key/value store with an optional defaults level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    values: IndexMap<String, String>,
    defaults: Option<Box<PropertyStore>>,
}

impl PropertyStore {
    /// Create an empty store without defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that falls back to `defaults`.
    pub fn with_defaults(defaults: PropertyStore) -> Self {
        let flattened: IndexMap<String, String> = defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: IndexMap::new(),
            defaults: Some(Box::new(PropertyStore {
                values: flattened,
                defaults: None,
            })),
        }
    }

    /// The defaults store, if one is attached.
    pub fn defaults(&self) -> Option<&PropertyStore> {
        self.defaults.as_deref()
    }

    /// Look up a key locally, then in the defaults.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .or_else(|| self.defaults.as_ref().and_then(|d| d.get(key)))
    }

    /// True when a value is obtainable for `key`. Empty values count.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merge every pair from `source`; later values win.
    ///
    /// Returns the number of pairs merged.
    pub fn merge<I, K, V>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut count = 0;
        for (key, value) in source {
            self.set(key, value);
            count += 1;
        }
        count
    }

    /// Boolean accessor: exactly `true` is true, any other present value is
    /// false, and an absent key yields `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, |value| value == "true")
    }

    /// Integer accessor.
    ///
    /// # Errors
    ///
    /// A present value that is not a base-10 integer is an
    /// [`Error::ConfigFormat`]; it is never replaced by the default.
    pub fn get_integer(&self, key: &str, default: i64) -> Result<i64> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|source| Error::ConfigFormat {
                key: key.to_string(),
                value: value.to_string(),
                source,
            }),
        }
    }

    /// Effective pairs: local keys in insertion order, then keys that only
    /// the defaults define.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let local = self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let inherited = self
            .defaults
            .iter()
            .flat_map(|d| d.values.iter())
            .filter(|(k, _)| !self.values.contains_key(k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()));
        local.chain(inherited)
    }

    /// Effective keys in [`iter`](Self::iter) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Number of effective keys.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys defined locally, ignoring defaults.
    pub fn local_len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.merge(iter);
        store
    }
}
