//! Renderer registry.
//!
//! Registration happens once, through [`RegistryBuilder`]. Calling
//! [`RegistryBuilder::freeze`] yields an immutable [`Registry`] that is shared
//! across expansion workers behind an `Arc` without locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::BlockRenderer;

/// Error returned when a renderer cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Empty tag name.
    #[error("block name must not be empty")]
    MissingName,
    /// Name already taken; the existing entry is kept.
    #[error("block '{name}' is already registered")]
    Duplicate { name: String },
    /// Descriptor is malformed.
    #[error("invalid descriptor for block '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

/// A registered renderer together with its attribute contract.
#[derive(Clone)]
pub struct BlockDescriptor {
    /// Name the block is registered under.
    pub name: String,
    /// Renderer invoked for each occurrence.
    pub renderer: Arc<dyn BlockRenderer>,
    /// Attributes that must be present.
    pub required: Vec<String>,
    /// Attributes that may be present.
    pub optional: Vec<String>,
}

impl BlockDescriptor {
    /// Build a descriptor from a renderer, taking its name and attribute lists.
    pub fn from_renderer(renderer: Arc<dyn BlockRenderer>) -> Self {
        Self {
            name: renderer.name().to_owned(),
            required: to_owned_list(renderer.required_attributes()),
            optional: to_owned_list(renderer.optional_attributes()),
            renderer,
        }
    }

    /// Required attributes absent from `attrs`.
    pub fn missing_required<'a>(&'a self, attrs: &crate::Attributes) -> Vec<&'a str> {
        self.required
            .iter()
            .map(String::as_str)
            .filter(|key| !attrs.contains(key))
            .collect()
    }
}

impl fmt::Debug for BlockDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDescriptor")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Append-only registry under construction.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagmark_expand::{Attributes, BlockRenderer, RegistryBuilder, RenderContext, RenderError};
///
/// struct Rule;
///
/// impl BlockRenderer for Rule {
///     fn name(&self) -> &str { "rule" }
///
///     fn render(&self, _: &Attributes, _: Option<&str>, _: &mut RenderContext) -> Result<String, RenderError> {
///         Ok("<hr>".to_owned())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// builder.register_renderer(Arc::new(Rule)).unwrap();
/// assert!(builder.register_renderer(Arc::new(Rule)).is_err());
///
/// let registry = builder.freeze();
/// assert!(registry.lookup("rule").is_some());
/// assert!(registry.lookup("RULE").is_some());
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    blocks: Vec<BlockDescriptor>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under `name`.
    ///
    /// `name` must be a non-empty word (letters, digits, underscore) so the
    /// locator can find it, and no attribute may be both required and
    /// optional. The first registration of a name wins.
    pub fn register(
        &mut self,
        name: &str,
        descriptor: BlockDescriptor,
    ) -> Result<(), RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }
        if !name.chars().all(|c: char| c.is_alphanumeric() || c == '_') {
            return Err(RegistrationError::InvalidDescriptor {
                name: name.to_owned(),
                reason: "name must contain only letters, digits and underscores".to_owned(),
            });
        }
        if let Some(both) = descriptor
            .required
            .iter()
            .find(|attr| descriptor.optional.contains(attr))
        {
            return Err(RegistrationError::InvalidDescriptor {
                name: name.to_owned(),
                reason: format!("attribute '{both}' is both required and optional"),
            });
        }
        if self.blocks.iter().any(|b| b.name == name) {
            return Err(RegistrationError::Duplicate {
                name: name.to_owned(),
            });
        }

        tracing::debug!(name, "Registered block");
        self.blocks.push(BlockDescriptor {
            name: name.to_owned(),
            ..descriptor
        });
        Ok(())
    }

    /// Register a renderer under its own name.
    pub fn register_renderer(
        &mut self,
        renderer: Arc<dyn BlockRenderer>,
    ) -> Result<(), RegistrationError> {
        let descriptor = BlockDescriptor::from_renderer(renderer);
        let name = descriptor.name.clone();
        self.register(&name, descriptor)
    }

    /// Remove a registered block. Returns `true` if it was present.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.name != name);
        self.blocks.len() != before
    }

    /// Whether a block with exactly this name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.iter().any(|b| b.name == name)
    }

    /// Finish registration.
    pub fn freeze(self) -> Registry {
        let index = self
            .blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name.clone(), i))
            .collect();
        Registry {
            blocks: self.blocks,
            index,
        }
    }
}

/// Frozen, lookup-only registry.
#[derive(Debug, Default)]
pub struct Registry {
    blocks: Vec<BlockDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Find the descriptor for a tag name.
    ///
    /// Tries an exact match first, then an ASCII case-insensitive one (in
    /// registration order).
    pub fn lookup(&self, name: &str) -> Option<&BlockDescriptor> {
        if let Some(&i) = self.index.get(name) {
            return self.blocks.get(i);
        }
        self.blocks
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
