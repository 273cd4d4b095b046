//! Map combinators over `HashMap`

use crate::error::Result;
use crate::guards::ensure_min_count;
use std::collections::HashMap;
use std::hash::Hash;

/// Merge two or more maps; later maps win on key collisions
///
/// ```
/// use std::collections::HashMap;
/// use toolbelt::collection::map_merge;
///
/// let defaults = HashMap::from([("port", 80), ("workers", 4)]);
/// let overrides = HashMap::from([("port", 8080)]);
///
/// let merged = map_merge(&[&defaults, &overrides]).unwrap();
/// assert_eq!(merged["port"], 8080);
/// assert_eq!(merged["workers"], 4);
/// ```
pub fn map_merge<K, V>(maps: &[&HashMap<K, V>]) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    ensure_min_count("maps", maps, 2)?;
    let mut merged = HashMap::new();
    for map in maps {
        merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Ok(merged)
}

/// Entries for which `predicate(key, value)` holds
pub fn map_filter<K, V, F>(map: &HashMap<K, V>, mut predicate: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Same keys, values transformed by `f`
pub fn map_values<K, V, U, F>(map: &HashMap<K, V>, mut f: F) -> HashMap<K, U>
where
    K: Eq + Hash + Clone,
    F: FnMut(&V) -> U,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Swap keys and values
///
/// When several keys share a value, the greatest key wins so the result does
/// not depend on hash iteration order.
pub fn map_invert<K, V>(map: &HashMap<K, V>) -> HashMap<V, K>
where
    K: Ord + Clone,
    V: Eq + Hash + Clone,
{
    let mut inverted: HashMap<V, K> = HashMap::with_capacity(map.len());
    for (k, v) in map {
        match inverted.get(v) {
            Some(existing) if existing >= k => {}
            _ => {
                inverted.insert(v.clone(), k.clone());
            }
        }
    }
    inverted
}

/// Bucket `items` by `key_fn`, keeping input order inside each bucket
pub fn group_by<T, K, F>(items: &[T], mut key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}
