//! Context propagation for validation calls
//!
//! A [`Context`] is an opaque channel for request-scoped data: cancellation
//! tokens, the current user, values other fields must agree with. The engine
//! passes it unchanged to every context-aware rule and every recursive
//! sub-validation; it never reads or mutates the contents itself. Rules that
//! perform external work are the ones responsible for honoring a cancelled
//! context and reporting it as an internal error.
//!
//! # Examples
//!
//! ```rust,ignore
//! let ctx = Context::builder()
//!     .with("expected", "good sample".to_string())
//!     .build();
//!
//! let rule = with_context(|ctx: &Context, value: &String| {
//!     match ctx.get::<String>("expected") {
//!         Some(expected) if expected == value => Ok(()),
//!         _ => Err(Violation::custom("unexpected value").into()),
//!     }
//! });
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// CONTEXT
// ============================================================================

/// An immutable key-value store propagated through a validation call.
///
/// Values are stored by name and retrieved by name plus type; a lookup with
/// the wrong type returns `None`. Contexts can chain to a parent, so a
/// scoped child sees its own entries first and falls back to the parent's.
#[derive(Default)]
pub struct Context {
    values: HashMap<String, Box<dyn Any + Send + Sync>>,
    parent: Option<Arc<Context>>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context chained to a parent.
    #[must_use]
    pub fn with_parent(parent: Arc<Self>) -> Self {
        Self {
            values: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Starts building a context fluently.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Stores a value under a name.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Box::new(value));
    }

    /// Looks up a value by name and type, falling back to the parent chain.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        match self.values.get(key) {
            Some(value) => value.downcast_ref::<T>(),
            None => self.parent.as_deref().and_then(|parent| parent.get(key)),
        }
    }

    /// True if a name is present here or in the parent chain.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
            || self
                .parent
                .as_deref()
                .is_some_and(|parent| parent.contains(key))
    }

    /// Number of entries stored directly in this context.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if this context stores no entries directly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .field("parent", &self.parent.is_some())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent construction for [`Context`].
#[derive(Default)]
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Creates a builder for an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Chains the context being built to a parent.
    #[must_use = "builder methods must be chained or built"]
    pub fn parent(mut self, parent: Arc<Context>) -> Self {
        self.context.parent = Some(parent);
        self
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Context {
        self.context
    }
}

impl fmt::Debug for ContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextBuilder")
            .field("context", &self.context)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
