//! Set algebra over `HashSet`

use crate::error::Result;
use crate::guards::ensure_min_count;
use std::collections::HashSet;
use std::hash::Hash;

/// Union of two or more sets
///
/// ```
/// use std::collections::HashSet;
/// use toolbelt::collection::set_union;
///
/// let a: HashSet<i32> = [1, 2].into();
/// let b: HashSet<i32> = [2, 3].into();
/// assert_eq!(set_union(&[&a, &b]).unwrap(), [1, 2, 3].into());
/// assert!(set_union(&[&a]).is_err());
/// ```
pub fn set_union<T: Eq + Hash + Clone>(sets: &[&HashSet<T>]) -> Result<HashSet<T>> {
    ensure_min_count("sets", sets, 2)?;
    Ok(sets.iter().flat_map(|set| set.iter().cloned()).collect())
}

/// Elements present in every one of two or more sets
pub fn set_intersection<T: Eq + Hash + Clone>(sets: &[&HashSet<T>]) -> Result<HashSet<T>> {
    ensure_min_count("sets", sets, 2)?;
    let mut ordered: Vec<&HashSet<T>> = sets.to_vec();
    ordered.sort_by_key(|set| set.len());
    let Some((smallest, rest)) = ordered.split_first() else {
        return Ok(HashSet::new());
    };
    Ok(smallest
        .iter()
        .filter(|item| rest.iter().all(|set| set.contains(*item)))
        .cloned()
        .collect())
}

/// Elements of `a` that are not in `b`
pub fn set_difference<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.difference(b).cloned().collect()
}

/// Elements in exactly one of `a` and `b`; commutative
pub fn set_symmetric_difference<T: Eq + Hash + Clone>(
    a: &HashSet<T>,
    b: &HashSet<T>,
) -> HashSet<T> {
    a.symmetric_difference(b).cloned().collect()
}

/// Whether every element of `subset` is in `superset`
pub fn is_subset<T: Eq + Hash>(subset: &HashSet<T>, superset: &HashSet<T>) -> bool {
    subset.is_subset(superset)
}

/// Whether `superset` contains every element of `subset`
///
/// Every set is a superset of itself and of the empty set.
pub fn is_superset<T: Eq + Hash>(superset: &HashSet<T>, subset: &HashSet<T>) -> bool {
    superset.is_superset(subset)
}

pub fn is_disjoint<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> bool {
    a.is_disjoint(b)
}
