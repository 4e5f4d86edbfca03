//! Associative maps keyed by graph items.
//!
//! Every view in this crate is parameterized over map *types* and borrows
//! map *values*: a filter map, direction map or flow map is owned by the
//! caller and lent to the view for as long as the view lives.
//! The blanket impls below make `&M` a [ReadMap] and `&mut M` a [WriteMap]
//! whenever `M` is one, which is what lets a caller hand `&mut my_filter`
//! to a filtering view and get it back untouched by ownership afterwards.

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Read interface of an associative map.
pub trait ReadMap<K> {
    type Value: Clone;

    fn get(&self, k: &K) -> Self::Value;
}

/// Write interface of an associative map.
pub trait WriteMap<K>: ReadMap<K> {
    fn set(&mut self, k: &K, v: Self::Value);
}

impl<K, M> ReadMap<K> for &M
where
    M: ReadMap<K> + ?Sized,
{
    type Value = M::Value;

    fn get(&self, k: &K) -> Self::Value {
        (**self).get(k)
    }
}

impl<K, M> ReadMap<K> for &mut M
where
    M: ReadMap<K> + ?Sized,
{
    type Value = M::Value;

    fn get(&self, k: &K) -> Self::Value {
        (**self).get(k)
    }
}

impl<K, M> WriteMap<K> for &mut M
where
    M: WriteMap<K> + ?Sized,
{
    fn set(&mut self, k: &K, v: Self::Value) {
        (**self).set(k, v)
    }
}

/// A hash-backed map with a default value for absent keys.
///
/// The workhorse map of the crate: it is keyed by the item handles
/// themselves, so the same type serves as node map, arc map or edge map of
/// any graph or view whose handles it is instantiated with.
#[derive(Clone)]
pub struct HashedMap<K, V> {
    items: HashMap<K, V, RandomState>,
    default: V,
}

impl<K, V> HashedMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new(default: V) -> Self {
        Self {
            items: HashMap::with_hasher(RandomState::new()),
            default,
        }
    }
}

impl<K, V> ReadMap<K> for HashedMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    type Value = V;

    fn get(&self, k: &K) -> V {
        self.items.get(k).unwrap_or(&self.default).clone()
    }
}

impl<K, V> WriteMap<K> for HashedMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn set(&mut self, k: &K, v: V) {
        self.items.insert(k.clone(), v);
    }
}

/// A map that yields the same value for every key.
///
/// The filtering views use `ConstMap::new(true)` for the dimension a
/// caller does not want to filter.
#[derive(Clone)]
pub struct ConstMap<K, V> {
    value: V,
    _keys: PhantomData<fn(K)>,
}

impl<K, V> ConstMap<K, V>
where
    V: Clone,
{
    pub fn new(value: V) -> Self {
        Self {
            value,
            _keys: PhantomData,
        }
    }
}

impl<K, V> ReadMap<K> for ConstMap<K, V>
where
    V: Clone,
{
    type Value = V;

    fn get(&self, _k: &K) -> V {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn hashed_map_defaults_and_overrides() {
        let mut m = HashedMap::new(0i64);
        assert_eq!(m.get(&NodeId(7)), 0);
        m.set(&NodeId(7), 42);
        assert_eq!(m.get(&NodeId(7)), 42);
        assert_eq!(m.get(&NodeId(8)), 0);
    }

    #[test]
    fn const_map_is_constant() {
        let m: ConstMap<NodeId, bool> = ConstMap::new(true);
        assert!(m.get(&NodeId(0)));
        assert!(m.get(&NodeId(usize::MAX)));
    }

    #[test]
    fn borrowed_maps_are_maps() {
        fn reads<M: ReadMap<NodeId, Value = bool>>(m: M) -> bool {
            m.get(&NodeId(3))
        }
        fn writes<M: WriteMap<NodeId, Value = bool>>(mut m: M) {
            m.set(&NodeId(3), true);
        }
        let mut m = HashedMap::new(false);
        assert!(!reads(&m));
        writes(&mut m);
        assert!(reads(&m));
    }
}
