//! In-process realization of the group-by-key shuffle primitive
//!
//! The pipeline only requires the grouping contract: all records sharing a
//! key are delivered together to exactly one reducer invocation before the
//! next round begins. Here the groups are formed in one hash pass and the
//! reducers run data-parallel over the groups; the collect at the end is
//! the implicit barrier between rounds.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Group keyed records, delivering all values of one key together.
pub fn group_by_key<K, V>(records: impl IntoIterator<Item = (K, V)>) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash,
{
    let mut groups: FxHashMap<K, Vec<V>> = FxHashMap::default();
    for (key, value) in records {
        groups.entry(key).or_default().push(value);
    }
    groups.into_iter().collect()
}

/// Apply a record-emitting reducer to every group in parallel.
pub fn reduce_groups<K, V, R, F>(groups: Vec<(K, Vec<V>)>, reducer: F) -> Vec<R>
where
    K: Send,
    V: Send,
    R: Send,
    F: Fn(&K, Vec<V>) -> Vec<R> + Sync,
{
    groups
        .into_par_iter()
        .flat_map_iter(|(key, values)| reducer(&key, values))
        .collect()
}

/// Fallible variant of [`reduce_groups`]; the first reducer error aborts
/// the round.
pub fn try_reduce_groups<K, V, R, E, F>(groups: Vec<(K, Vec<V>)>, reducer: F) -> Result<Vec<R>, E>
where
    K: Send,
    V: Send,
    R: Send,
    E: Send,
    F: Fn(&K, Vec<V>) -> Result<Vec<R>, E> + Sync,
{
    let nested: Vec<Vec<R>> = groups
        .into_par_iter()
        .map(|(key, values)| reducer(&key, values))
        .collect::<Result<_, E>>()?;
    Ok(nested.into_iter().flatten().collect())
}
