//! Runtime type selection by `@odata.type` tag.
//!
//! A polymorphic base type owns one map from tag to constructor, built at first
//! use and never mutated afterwards. Resolution never fails on the tag itself:
//! a missing, `null`, malformed or unknown tag selects the base type so that
//! payloads carrying newer server-side subtypes still decode.

use std::collections::HashMap;
use std::fmt;

use crate::error::ParseError;
use crate::parsable::ODATA_TYPE_KEY;
use crate::parse_node::ParseNode;

pub struct DiscriminatorMap<T> {
    constructors: HashMap<&'static str, fn() -> T>,
}

impl<T> DiscriminatorMap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor for `tag`; a later registration of the same tag wins.
    #[must_use]
    pub fn with(mut self, tag: &'static str, constructor: fn() -> T) -> Self {
        self.constructors.insert(tag, constructor);
        self
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Known tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Construct the type named by the node's `@odata.type` member, or `fallback()`.
    ///
    /// # Errors
    /// Returns an error only if the node cannot be inspected for the member,
    /// i.e. it is not an object.
    pub fn resolve(&self, node: &dyn ParseNode, fallback: fn() -> T) -> Result<T, ParseError> {
        let Some(child) = node.child_node(ODATA_TYPE_KEY)? else {
            return Ok(fallback());
        };
        let tag = match child.string_value() {
            Ok(Some(tag)) => tag,
            Ok(None) => return Ok(fallback()),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable discriminator, using base type");
                return Ok(fallback());
            }
        };
        if let Some(constructor) = self.constructors.get(tag.as_str()) {
            Ok(constructor())
        } else {
            tracing::debug!(tag = %tag, "unknown discriminator, using base type");
            Ok(fallback())
        }
    }
}

impl<T> Default for DiscriminatorMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DiscriminatorMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscriminatorMap")
            .field("tags", &self.tags())
            .finish()
    }
}
