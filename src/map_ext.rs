use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::into_optional::IntoOptional;

/// Coalescing assignment into map slots.
///
/// A map of `V` has no way to hold a key bound to "no value", so
/// coalescing `None` into a vacant key leaves it vacant. Use a map of
/// `Option<V>` when that state matters:
///
/// ```
/// use std::collections::HashMap;
/// use optional_helpers::MapExt;
///
/// let mut params: HashMap<&str, Option<&str>> = HashMap::new();
/// params.coalesce_assign("key1", Some(None));
/// assert_eq!(Some(&None), params.get("key1"));
/// ```
pub trait MapExt<K, V> {
    /// Binds `key` to `value` if `key` has no entry yet. An existing entry
    /// is never touched.
    fn coalesce_assign(&mut self, key: K, value: impl IntoOptional<V>);
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn coalesce_assign(&mut self, key: K, value: impl IntoOptional<V>) {
        if let hash_map::Entry::Vacant(slot) = self.entry(key) {
            if let Some(value) = value.into_optional() {
                slot.insert(value);
                log::trace!("coalesced value into vacant hash map slot");
            }
        }
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn coalesce_assign(&mut self, key: K, value: impl IntoOptional<V>) {
        if let btree_map::Entry::Vacant(slot) = self.entry(key) {
            if let Some(value) = value.into_optional() {
                slot.insert(value);
                log::trace!("coalesced value into vacant btree map slot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesce_into_vacant_and_occupied() {
        let parameter1: Option<String> = None;
        let parameter2: Option<String> = Some("foo".to_string());

        let mut parameters: HashMap<&str, String> = HashMap::new();
        parameters.coalesce_assign("key1", parameter1.clone());
        parameters.coalesce_assign("key2", parameter2.clone());

        assert_eq!(None, parameters.get("key1"));
        assert!(!parameters.contains_key("key1"));
        assert_eq!(parameter1.as_ref(), parameters.get("key1"));
        assert_eq!(parameter2.as_ref(), parameters.get("key2"));

        parameters.coalesce_assign("key2", "bar".to_string());
        parameters.coalesce_assign("key2", None);
        assert_eq!(Some("foo"), parameters.get("key2").map(String::as_str));
    }

    #[test]
    fn nullable_values_keep_the_key() {
        let mut parameters: HashMap<&str, Option<u32>> = HashMap::new();
        parameters.coalesce_assign("key1", Some(None));
        assert!(parameters.contains_key("key1"));
        assert_eq!(Some(&None), parameters.get("key1"));

        parameters.coalesce_assign("key1", Some(Some(4)));
        assert_eq!(Some(&None), parameters.get("key1"));
    }

    #[test]
    fn btree_map() {
        let mut map: BTreeMap<i32, &str> = BTreeMap::new();
        map.coalesce_assign(1, "one");
        map.coalesce_assign(1, "uno");
        map.coalesce_assign(2, None);

        assert_eq!(Some(&"one"), map.get(&1));
        assert!(!map.contains_key(&2));
    }
}
