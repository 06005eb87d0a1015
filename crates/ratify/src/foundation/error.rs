//! Error types for validation failures
//!
//! Failures come in two disjoint categories: **violations** (the data is
//! invalid; show it to the user, do not blindly retry) and **internal
//! errors** (the validation process itself malfunctioned; retrying the same
//! input may succeed). Composite values aggregate per-part failures into an
//! [`Errors`] map with a stable, lexicographically ordered rendering.
//!
//! All violation string fields use `Cow<'static, str>` for zero-allocation
//! in the common case of static codes and messages.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

// ============================================================================
// VIOLATION
// ============================================================================

/// A leaf validation failure.
///
/// Carries an immutable `code` for programmatic matching and translation,
/// a human-readable `message`, and structured parameters. The message can
/// be replaced per rule instance; the code cannot.
///
/// Displays as its message alone — the enclosing [`Errors`] map supplies
/// the key context.
///
/// # Examples
///
/// ```rust,ignore
/// let violation = Violation::new("length_out_of_range", "the length must be between 5 and 50")
///     .with_param("min", "5")
///     .with_param("max", "50");
/// assert_eq!(violation.code(), "length_out_of_range");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Violation {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    /// Ordered key-value pairs, typically 0-3 entries.
    params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl Violation {
    /// Creates a new violation with a code and message.
    ///
    /// Static strings allocate nothing; dynamic strings allocate once.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates an ad-hoc violation with the `custom` code.
    ///
    /// Intended for predicate adapters (`by`, `with_context`) that have no
    /// rule kind of their own.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter, used for programmatic inspection and translation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping the code and params intact.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// The immutable failure code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

// ============================================================================
// INTERNAL ERROR
// ============================================================================

/// A failure of the validation process itself, as opposed to invalid input.
///
/// A rule whose own machinery fails (an external lookup, a poisoned
/// resource) must wrap the fault explicitly — the aggregation layer treats
/// every other error as a validation failure. Callers use
/// [`Error::is_internal`] to decide on retry semantics.
#[derive(Debug, thiserror::Error)]
#[error("{inner}")]
pub struct InternalError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl InternalError {
    /// Wraps an operational fault.
    pub fn new(inner: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    /// The wrapped fault.
    #[must_use]
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync) {
        self.inner.as_ref()
    }
}

// ============================================================================
// ERROR NODE
// ============================================================================

/// A node in a validation error tree.
///
/// Either a leaf [`Violation`], a composite [`Errors`] map (when the failed
/// part is itself a record, map, or collection), or an [`InternalError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data is invalid.
    #[error(transparent)]
    Violation(#[from] Violation),
    /// A composite sub-part failed; failures are keyed by sub-part.
    #[error(transparent)]
    Map(#[from] Errors),
    /// The validator malfunctioned; the input may well be valid.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Creates a leaf failure.
    pub fn failure(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Violation(Violation::new(code, message))
    }

    /// Wraps an operational fault as an internal error.
    pub fn internal(inner: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Internal(InternalError::new(inner))
    }

    /// Replaces the message of a leaf failure, keeping its code.
    ///
    /// Composite and internal errors pass through unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Self::Violation(v) => Self::Violation(v.with_message(message)),
            other => other,
        }
    }

    /// Returns true if this node is an internal error.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// The failure code of a leaf violation, if this is one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Violation(v) => Some(v.code()),
            _ => None,
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Violation(v) => serializer.serialize_str(v.message()),
            Self::Map(m) => m.serialize(serializer),
            Self::Internal(e) => serializer.serialize_str(&e.to_string()),
        }
    }
}

// ============================================================================
// ERRORS MAP
// ============================================================================

/// An ordered identifier-to-failure aggregation.
///
/// Keys are field names, display names, map keys, or collection positions
/// rendered as strings; an absent key means "no failure for that part".
/// The backing `BTreeMap` makes lexicographic key order structural, so
/// formatting and serialization are deterministic regardless of insertion
/// order.
///
/// # Formatting
///
/// The rendering is part of the observable contract: entries in key order,
/// `key: message` for leaves, `key: (nested rendering)` for composite
/// sub-maps, joined by `; `, terminated by `.` when non-empty. An empty map
/// renders as the empty string.
///
/// ```text
/// 0: (City: cannot be blank; Street: cannot be blank.); 2: (Zip: must be in a valid format.).
/// ```
#[derive(Debug, Default)]
pub struct Errors(BTreeMap<String, Error>);

impl Errors {
    /// Creates an empty aggregation.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records the outcome for one identifier.
    ///
    /// `None` is the no-failure marker and leaves the map untouched, so
    /// collecting `validate(..).err()` per part and filtering afterwards
    /// needs no branching at the call site.
    ///
    /// An identifier recorded twice keeps the latest failure.
    pub fn insert(&mut self, key: impl Into<String>, error: impl Into<Option<Error>>) {
        if let Some(error) = error.into() {
            self.0.insert(key.into(), error);
        } else {
            self.0.remove(&key.into());
        }
    }

    /// The failure recorded for an identifier, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Error> {
        self.0.get(key)
    }

    /// Number of failed parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no part failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in lexicographic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Error> {
        self.0.iter()
    }

    /// Drops no-failure entries and collapses an all-pass aggregation.
    ///
    /// Returns no error at all — not an empty map — when nothing remains,
    /// so callers get a single truthiness check.
    #[must_use]
    pub fn filter(self) -> Option<Error> {
        if self.0.is_empty() {
            None
        } else {
            Some(Error::Map(self))
        }
    }

    /// Like [`Errors::filter`], shaped for `?` propagation.
    pub fn into_result(self) -> Result<(), Error> {
        match self.filter() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// True if any node in the tree is an internal error.
    #[must_use]
    pub fn any_internal(&self) -> bool {
        self.0.values().any(|e| match e {
            Error::Internal(_) => true,
            Error::Map(nested) => nested.any_internal(),
            Error::Violation(_) => false,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Error>)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, Option<Error>)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (key, error) in iter {
            errors.insert(key, error);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = (&'a String, &'a Error);
    type IntoIter = btree_map::Iter<'a, String, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        for (i, (key, error)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match error {
                Error::Map(nested) => write!(f, "{key}: ({nested})")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        write!(f, ".")
    }
}

impl std::error::Error for Errors {}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, error) in &self.0 {
            map.serialize_entry(key, error)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
