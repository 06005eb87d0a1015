//! Map key validation
//!
//! [`MapRules`] is the map-shaped sibling of record validation: descriptors
//! bind explicit keys — no name resolution involved — to rule chains, and
//! the whole set is itself a [`Rule`] over `HashMap` / `BTreeMap`, so map
//! validation nests inside chains and inside other map rules.
//!
//! A described key missing from the map fails with "required key is
//! missing" unless its descriptor is [`KeyRule::optional`]; a map key no
//! descriptor mentions fails with "key not expected" unless the set allows
//! it via [`MapRules::allow_extra_keys`].
//!
//! # Examples
//!
//! ```rust,ignore
//! let settings_rules = map_rules(vec![
//!     key("Name", chain![required(), length(5, 20)]),
//!     key("Email", chain![required(), email()]),
//! ]);
//! validate(&settings, &[&settings_rules])?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::foundation::{Context, Error, Errors, Rule, Validatable, Violation, apply_chain};

// ============================================================================
// KEY DESCRIPTOR
// ============================================================================

type KeyRunner<V> = Box<dyn Fn(Option<&Context>, &V) -> Result<(), Error> + Send + Sync>;

/// Binds one map key to a rule chain.
pub struct KeyRule<K, V: ?Sized + 'static> {
    key: K,
    optional: bool,
    run: KeyRunner<V>,
}

impl<K, V: ?Sized + 'static> KeyRule<K, V> {
    /// Marks the key as allowed to be absent.
    ///
    /// The chain still runs when the key is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The key this descriptor validates.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: fmt::Debug, V: ?Sized + 'static> fmt::Debug for KeyRule<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRule")
            .field("key", &self.key)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Creates a key descriptor.
///
/// The bound value runs the full single-value pipeline: the chain, then
/// the value's own self-validation.
pub fn key<K, V>(key: K, rules: Vec<Box<dyn Rule<V>>>) -> KeyRule<K, V>
where
    V: Validatable + ?Sized + 'static,
{
    KeyRule {
        key,
        optional: false,
        run: Box::new(move |ctx: Option<&Context>, value: &V| {
            apply_chain(ctx, value, rules.iter().map(|rule| &**rule))
        }),
    }
}

// ============================================================================
// MAP RULES
// ============================================================================

/// An ordered set of key descriptors, usable as a rule over maps.
pub struct MapRules<K, V: ?Sized + 'static> {
    keys: Vec<KeyRule<K, V>>,
    allow_extra: bool,
}

impl<K, V: ?Sized + 'static> MapRules<K, V> {
    /// Creates a map validator from key descriptors.
    #[must_use]
    pub fn new(keys: Vec<KeyRule<K, V>>) -> Self {
        Self {
            keys,
            allow_extra: false,
        }
    }

    /// Tolerates map keys no descriptor mentions.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_extra_keys(mut self) -> Self {
        self.allow_extra = true;
        self
    }
}

impl<K, V> MapRules<K, V>
where
    K: fmt::Display + PartialEq + Send + Sync,
    V: Validatable + Send + Sync + 'static,
{
    fn run_entries(&self, ctx: Option<&Context>, entries: &[(&K, &V)]) -> Result<(), Error> {
        let mut errors = Errors::new();

        for descriptor in &self.keys {
            match entries.iter().find(|(k, _)| *k == &descriptor.key) {
                Some((_, value)) => {
                    errors.insert(descriptor.key.to_string(), (descriptor.run)(ctx, *value).err());
                }
                None if descriptor.optional => {}
                None => {
                    errors.insert(
                        descriptor.key.to_string(),
                        Error::from(Violation::new("key_missing", "required key is missing")),
                    );
                }
            }
        }

        if !self.allow_extra {
            for (map_key, _) in entries {
                if !self.keys.iter().any(|descriptor| &descriptor.key == *map_key) {
                    errors.insert(
                        map_key.to_string(),
                        Error::from(Violation::new("key_unexpected", "key not expected")),
                    );
                }
            }
        }

        if !errors.is_empty() {
            tracing::trace!(
                descriptors = self.keys.len(),
                failed = errors.len(),
                "map validation failed"
            );
        }
        errors.into_result()
    }
}

impl<K: fmt::Debug, V: ?Sized + 'static> fmt::Debug for MapRules<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRules")
            .field("keys", &self.keys)
            .field("allow_extra", &self.allow_extra)
            .finish()
    }
}

impl<K, V, S> Rule<HashMap<K, V, S>> for MapRules<K, V>
where
    K: fmt::Display + PartialEq + Send + Sync,
    V: Validatable + Send + Sync + 'static,
    S: Send + Sync,
{
    fn check(&self, value: &HashMap<K, V, S>) -> Result<(), Error> {
        self.run_entries(None, &value.iter().collect::<Vec<_>>())
    }

    fn check_with(&self, ctx: &Context, value: &HashMap<K, V, S>) -> Result<(), Error> {
        self.run_entries(Some(ctx), &value.iter().collect::<Vec<_>>())
    }
}

impl<K, V> Rule<BTreeMap<K, V>> for MapRules<K, V>
where
    K: fmt::Display + PartialEq + Send + Sync,
    V: Validatable + Send + Sync + 'static,
{
    fn check(&self, value: &BTreeMap<K, V>) -> Result<(), Error> {
        self.run_entries(None, &value.iter().collect::<Vec<_>>())
    }

    fn check_with(&self, ctx: &Context, value: &BTreeMap<K, V>) -> Result<(), Error> {
        self.run_entries(Some(ctx), &value.iter().collect::<Vec<_>>())
    }
}

/// Creates a map validator from key descriptors.
#[must_use]
pub fn map_rules<K, V: ?Sized + 'static>(keys: Vec<KeyRule<K, V>>) -> MapRules<K, V> {
    MapRules::new(keys)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain;
    use crate::foundation::validate;
    use crate::rules::{length, required};

    fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn name_email_rules() -> MapRules<String, String> {
        map_rules(vec![
            key("Name".to_string(), chain![required(), length(5, 20)]),
            key("Email".to_string(), chain![required()]),
        ])
    }

    #[test]
    fn keys_validate_in_descriptor_order_keyed_by_key() {
        let map = settings(&[("Name", "Bob"), ("Email", "")]);
        let err = validate(&map, &[&name_email_rules()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Email: cannot be blank; Name: the length must be between 5 and 20."
        );
    }

    #[test]
    fn missing_key_is_reported() {
        let map = settings(&[("Name", "Alice Liddell")]);
        let err = validate(&map, &[&name_email_rules()]).unwrap_err();
        assert_eq!(err.to_string(), "Email: required key is missing.");
    }

    #[test]
    fn optional_key_may_be_absent() {
        let rules = map_rules(vec![
            key("Name".to_string(), chain![required()]),
            key("Nickname".to_string(), chain![length(2, 10)]).optional(),
        ]);

        let map = settings(&[("Name", "Alice")]);
        assert!(validate(&map, &[&rules]).is_ok());

        // Present optional keys still validate.
        let map = settings(&[("Name", "Alice"), ("Nickname", "a")]);
        let err = validate(&map, &[&rules]).unwrap_err();
        assert_eq!(err.to_string(), "Nickname: the length must be between 2 and 10.");
    }

    #[test]
    fn unexpected_key_is_reported() {
        let map = settings(&[("Name", "Alice Liddell"), ("Email", "a@b.c"), ("Extra", "x")]);
        let err = validate(&map, &[&name_email_rules()]).unwrap_err();
        assert_eq!(err.to_string(), "Extra: key not expected.");
    }

    #[test]
    fn allow_extra_keys_tolerates_them() {
        let map = settings(&[("Name", "Alice Liddell"), ("Email", "a@b.c"), ("Extra", "x")]);
        let rules = name_email_rules().allow_extra_keys();
        assert!(validate(&map, &[&rules]).is_ok());
    }

    #[test]
    fn nested_map_rules_compose() {
        let mut inner = HashMap::new();
        inner.insert("City".to_string(), String::new());

        let mut outer = HashMap::new();
        outer.insert("Address".to_string(), inner);

        let rules = map_rules(vec![key(
            "Address".to_string(),
            chain![map_rules(vec![key("City".to_string(), chain![required()])])],
        )]);

        let err = validate(&outer, &[&rules]).unwrap_err();
        assert_eq!(err.to_string(), "Address: (City: cannot be blank.).");
    }

    #[test]
    fn btree_maps_work_too() {
        let mut map = BTreeMap::new();
        map.insert("Name".to_string(), String::new());

        let rules = map_rules(vec![key("Name".to_string(), chain![required()])]);
        let err = validate(&map, &[&rules]).unwrap_err();
        assert_eq!(err.to_string(), "Name: cannot be blank.");
    }
}
