//! EACH combinator - validates every element of a collection
//!
//! [`Each`] applies one rule chain to every element of a sequence or map,
//! running the full single-value pipeline per element (chain, then the
//! element's own self-validation). Failures are keyed by zero-based
//! position for sequences and by the original key for maps; clean elements
//! are omitted.
//!
//! An empty or nil collection never fails — `each` says nothing about the
//! collection itself. Put `required()` on the collection to demand
//! non-emptiness.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::foundation::{Context, Error, Errors, Rule, Validatable, apply_chain};

// ============================================================================
// EACH
// ============================================================================

/// Applies a rule chain to every element of a collection.
///
/// # Examples
///
/// ```rust,ignore
/// let tags = vec!["rust".to_string(), String::new()];
/// let err = validate(&tags, &[&each(chain![required()])]).unwrap_err();
/// assert_eq!(err.to_string(), "1: cannot be blank.");
/// ```
pub struct Each<U: ?Sized + 'static> {
    rules: Vec<Box<dyn Rule<U>>>,
}

impl<U: ?Sized + 'static> Each<U> {
    /// Creates an element-wise validator from a rule chain.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule<U>>>) -> Self {
        Self { rules }
    }

    fn check_element(&self, ctx: Option<&Context>, element: &U) -> Result<(), Error>
    where
        U: Validatable,
    {
        apply_chain(ctx, element, self.rules.iter().map(|rule| &**rule))
    }

    fn run_elements<'a>(
        &self,
        ctx: Option<&Context>,
        elements: impl Iterator<Item = (String, &'a U)>,
    ) -> Result<(), Error>
    where
        U: Validatable + 'a,
    {
        let mut errors = Errors::new();
        for (key, element) in elements {
            errors.insert(key, self.check_element(ctx, element).err());
        }
        if !errors.is_empty() {
            tracing::trace!(failed = errors.len(), "collection elements failed validation");
        }
        errors.into_result()
    }
}

impl<U: ?Sized + 'static> fmt::Debug for Each<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<U: Validatable + 'static> Rule<[U]> for Each<U> {
    fn check(&self, value: &[U]) -> Result<(), Error> {
        self.run_elements(
            None,
            value.iter().enumerate().map(|(i, v)| (i.to_string(), v)),
        )
    }

    fn check_with(&self, ctx: &Context, value: &[U]) -> Result<(), Error> {
        self.run_elements(
            Some(ctx),
            value.iter().enumerate().map(|(i, v)| (i.to_string(), v)),
        )
    }
}

impl<U: Validatable + 'static> Rule<Vec<U>> for Each<U> {
    fn check(&self, value: &Vec<U>) -> Result<(), Error> {
        Rule::<[U]>::check(self, value)
    }

    fn check_with(&self, ctx: &Context, value: &Vec<U>) -> Result<(), Error> {
        Rule::<[U]>::check_with(self, ctx, value)
    }
}

impl<K: fmt::Display + Send + Sync, U: Validatable + 'static> Rule<HashMap<K, U>> for Each<U> {
    fn check(&self, value: &HashMap<K, U>) -> Result<(), Error> {
        self.run_elements(None, value.iter().map(|(k, v)| (k.to_string(), v)))
    }

    fn check_with(&self, ctx: &Context, value: &HashMap<K, U>) -> Result<(), Error> {
        self.run_elements(Some(ctx), value.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

impl<K: fmt::Display + Send + Sync, U: Validatable + 'static> Rule<BTreeMap<K, U>> for Each<U> {
    fn check(&self, value: &BTreeMap<K, U>) -> Result<(), Error> {
        self.run_elements(None, value.iter().map(|(k, v)| (k.to_string(), v)))
    }

    fn check_with(&self, ctx: &Context, value: &BTreeMap<K, U>) -> Result<(), Error> {
        self.run_elements(Some(ctx), value.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

// A nil collection has no elements to fail.
impl<C, U: ?Sized + 'static> Rule<Option<C>> for Each<U>
where
    Each<U>: Rule<C>,
{
    fn check(&self, value: &Option<C>) -> Result<(), Error> {
        match value {
            Some(collection) => Rule::<C>::check(self, collection),
            None => Ok(()),
        }
    }

    fn check_with(&self, ctx: &Context, value: &Option<C>) -> Result<(), Error> {
        match value {
            Some(collection) => Rule::<C>::check_with(self, ctx, collection),
            None => Ok(()),
        }
    }
}

/// Creates an element-wise validator from a rule chain.
///
/// # Examples
///
/// ```rust,ignore
/// let scores = vec![10_u32, 0, 200];
/// let rule = each(chain![required(), max(100_u32)]);
/// ```
#[must_use]
pub fn each<U: ?Sized + 'static>(rules: Vec<Box<dyn Rule<U>>>) -> Each<U> {
    Each::new(rules)
}

// ============================================================================
// TESTS
// ============================================================================
