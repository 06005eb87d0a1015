//! Record field validation
//!
//! A [`Field`] descriptor binds one field of a record to a rule chain: a
//! display name fixed at configuration time, a typed accessor, and the
//! chain. [`RecordRules`] is an ordered, reusable set of descriptors;
//! [`validate_record`] runs one set against one record instance.
//!
//! Every field is attempted regardless of earlier failures — only a
//! chain's own short-circuit stops work within a single field. Per-field
//! failures aggregate into an [`Errors`] map keyed by field name.
//!
//! # Embedded records
//!
//! [`RecordRules::embed`] flattens another record's descriptors into the
//! parent's field-name space, the way an embedded sub-record's fields read
//! as if declared on the parent. A name declared at two depths resolves
//! deterministically to the shallower declaration; ties go to the first
//! declaration.
//!
//! # Examples
//!
//! ```rust,ignore
//! impl Validatable for Customer {
//!     fn validate(&self) -> Result<(), Error> {
//!         validate_record(self, [
//!             field("Name", |c: &Customer| &c.name, chain![required(), length(5, 20)]),
//!             field("Email", |c: &Customer| &c.email, chain![required(), email()]),
//!             // Address validates by its own rules.
//!             field("Address", |c: &Customer| &c.address, chain![]),
//!         ])
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::foundation::{Context, Error, Errors, Rule, Validatable, apply_chain};

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

type FieldRunner<T> = Box<dyn Fn(Option<&Context>, &T) -> Result<(), Error> + Send + Sync>;

/// Binds one field of a record to a rule chain.
///
/// The name doubles as the display name in the aggregated errors. A
/// descriptor is complete at construction, immutable, and reusable across
/// calls.
pub struct Field<T: ?Sized + 'static> {
    name: Cow<'static, str>,
    depth: usize,
    run: FieldRunner<T>,
}

impl<T: ?Sized + 'static> Field<T> {
    /// The field's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Embedding depth: 0 for directly declared fields.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("depth", &self.depth)
            .finish()
    }
}

/// Creates a field descriptor.
///
/// A bare descriptor (`chain![]`) runs no rules but still triggers the
/// field value's own self-validation, which is how nested records recurse.
///
/// # Examples
///
/// ```rust,ignore
/// field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)])
/// ```
pub fn field<T, U, F>(
    name: impl Into<Cow<'static, str>>,
    accessor: F,
    rules: Vec<Box<dyn Rule<U>>>,
) -> Field<T>
where
    T: ?Sized + 'static,
    U: Validatable + ?Sized + 'static,
    F: Fn(&T) -> &U + Send + Sync + 'static,
{
    Field {
        name: name.into(),
        depth: 0,
        run: Box::new(move |ctx: Option<&Context>, target: &T| {
            apply_chain(ctx, accessor(target), rules.iter().map(|rule| &**rule))
        }),
    }
}

// ============================================================================
// RECORD RULES
// ============================================================================

/// An ordered, immutable, reusable set of field descriptors for one record
/// type.
///
/// Build it once as shared configuration and call
/// [`validate`](RecordRules::validate) per instance; the set holds no
/// per-call state.
pub struct RecordRules<T: ?Sized + 'static> {
    fields: Vec<Field<T>>,
}

impl<T: ?Sized + 'static> RecordRules<T> {
    /// Creates an empty descriptor set.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field descriptor.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<U, F>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
        rules: Vec<Box<dyn Rule<U>>>,
    ) -> Self
    where
        U: Validatable + ?Sized + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        self.fields.push(field(name, accessor, rules));
        self
    }

    /// Flattens an embedded sub-record's descriptors into this set.
    ///
    /// The inner record's field names land directly in the parent's name
    /// space, one embedding level deeper. When a name is declared at both
    /// levels, the shallower declaration owns the name in the result.
    #[must_use = "builder methods must be chained or built"]
    pub fn embed<U, F>(mut self, accessor: F, inner: RecordRules<U>) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> &U + Clone + Send + Sync + 'static,
    {
        for inner_field in inner.fields {
            let accessor = accessor.clone();
            let run = inner_field.run;
            self.fields.push(Field {
                name: inner_field.name,
                depth: inner_field.depth + 1,
                run: Box::new(move |ctx: Option<&Context>, target: &T| {
                    run(ctx, accessor(target))
                }),
            });
        }
        self
    }

    /// Number of descriptors, embedded ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the set holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a record instance against this set.
    pub fn validate(&self, target: &T) -> Result<(), Error> {
        self.run(None, target)
    }

    /// Validates a record instance with a propagated context.
    pub fn validate_with(&self, ctx: &Context, target: &T) -> Result<(), Error> {
        self.run(Some(ctx), target)
    }

    fn run(&self, ctx: Option<&Context>, target: &T) -> Result<(), Error> {
        // Shallower declarations win a name; ties go to the first declared.
        let mut outcomes: BTreeMap<&str, (usize, Option<Error>)> = BTreeMap::new();
        for field in &self.fields {
            let result = (field.run)(ctx, target).err();
            match outcomes.get_mut(field.name.as_ref()) {
                Some((depth, slot)) => {
                    if field.depth < *depth {
                        *depth = field.depth;
                        *slot = result;
                    }
                }
                None => {
                    outcomes.insert(field.name.as_ref(), (field.depth, result));
                }
            }
        }

        let mut errors = Errors::new();
        for (name, (_, outcome)) in outcomes {
            errors.insert(name, outcome);
        }
        if !errors.is_empty() {
            tracing::trace!(
                fields = self.fields.len(),
                failed = errors.len(),
                "record validation failed"
            );
        }
        errors.into_result()
    }
}

impl<T: ?Sized + 'static> Default for RecordRules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> fmt::Debug for RecordRules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRules")
            .field("fields", &self.fields)
            .finish()
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates a record against a list of field descriptors.
///
/// Returns the filtered per-field [`Errors`] map, or `Ok` when every field
/// passed.
pub fn validate_record<T: ?Sized + 'static>(
    target: &T,
    fields: impl IntoIterator<Item = Field<T>>,
) -> Result<(), Error> {
    RecordRules {
        fields: fields.into_iter().collect(),
    }
    .validate(target)
}

/// Validates a record with a propagated context.
pub fn validate_record_with<T: ?Sized + 'static>(
    ctx: &Context,
    target: &T,
    fields: impl IntoIterator<Item = Field<T>>,
) -> Result<(), Error> {
    RecordRules {
        fields: fields.into_iter().collect(),
    }
    .validate_with(ctx, target)
}

// ============================================================================
// TESTS
// ============================================================================
