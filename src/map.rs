pub mod builder;

use parking_lot::RwLock;
use std::hash::{BuildHasher, Hash, Hasher};

use hashbrown::hash_map::{DefaultHashBuilder, HashMap};

/// A concurrent hashmap split into reader/writer locked shards.
///
/// Every key lives in exactly one shard, so for a single key this behaves like one map behind one
/// [`RwLock`]: lookups share the lock, inserts hold it exclusively for the duration of the write.
/// Locks are never held across an await point.
pub struct ShardedMap<K, V, S = DefaultHashBuilder> {
    build_hasher: S,
    shards: Box<[Shard<K, V, S>]>,
}

pub(crate) struct Shard<K, V, S> {
    table: RwLock<HashMap<K, V, S>>,
}

impl<K, V> ShardedMap<K, V> {
    pub fn new() -> Self {
        builder::MapBuilder::new().build(Default::default())
    }
}

impl<K, V> Default for ShardedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ShardedMap<K, V, S> {
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.table.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.table.read().is_empty())
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl<K, V, S> ShardedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    V: Clone,
{
    /// Insert a value, returning the one it replaced.
    ///
    /// Last writer wins, there is no compare step.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.shard(&key).table.write().insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.shard(key).table.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.shard(key).table.read().contains_key(key)
    }

    pub(crate) fn shard(&self, key: &K) -> &Shard<K, V, S> {
        let hash = hash_key(&self.build_hasher, key);

        // the shard tables hash with the same hasher and bucket on the low bits,
        // pick the shard from the high bits so entries still spread inside a shard
        let idx = (hash >> 32) as usize & (self.shards.len() - 1);
        &self.shards[idx]
    }
}

pub(crate) fn hash_key<K, S>(build_hasher: &S, key: &K) -> u64
where
    K: Hash,
    S: BuildHasher,
{
    let mut hasher = build_hasher.build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

fn available_parallelism() -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static AVAILABLE_PARALLELISM: AtomicUsize = AtomicUsize::new(0);
    let mut ap = AVAILABLE_PARALLELISM.load(Ordering::Relaxed);
    if ap == 0 {
        ap = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        AVAILABLE_PARALLELISM.store(ap, Ordering::Relaxed);
    }
    ap
}
