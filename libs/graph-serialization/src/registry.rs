//! Per-type maps from wire field name to a decode-and-assign function.
//!
//! A child type's map starts as a copy of its parent's map, lifted through a
//! projection onto the embedded parent, and then gains the child's own entries.
//! Maps are built once per type and shared read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;
use crate::parse_node::ParseNode;

/// Decode one member and assign it to the target.
pub type FieldDeserializer<T> =
    Arc<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), ParseError> + Send + Sync>;

pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Start from every entry of `parent`, applied to the parent embedded in `T`.
    #[must_use]
    pub fn inherit<P: 'static>(parent: &FieldDeserializers<P>, project: fn(&mut T) -> &mut P) -> Self {
        let entries = parent
            .entries
            .iter()
            .map(|(name, entry)| {
                let entry = Arc::clone(entry);
                let lifted: FieldDeserializer<T> =
                    Arc::new(move |target: &mut T, node: &dyn ParseNode| entry(project(target), node));
                (*name, lifted)
            })
            .collect();
        Self { entries }
    }

    /// Add an entry, replacing any inherited entry of the same name in this map only.
    pub fn insert<F>(&mut self, name: &'static str, deserializer: F) -> &mut Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.entries.insert(name, Arc::new(deserializer));
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered wire names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort_unstable();
        f.debug_struct("FieldDeserializers")
            .field("names", &names)
            .finish()
    }
}
