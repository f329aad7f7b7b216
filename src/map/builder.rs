use super::{available_parallelism, Shard, ShardedMap};

use hashbrown::HashMap;
use parking_lot::RwLock;

use std::hash::BuildHasher;

#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    pub(crate) shards: Option<usize>,
    pub(crate) estimated_size: Option<usize>,
}

impl MapBuilder {
    pub fn new() -> Self {
        MapBuilder {
            shards: None,
            estimated_size: None,
        }
    }

    /// Number of shards, rounded up to the next power of two
    pub fn shards(mut self, shards: usize) -> Self {
        self.shards = Some(shards);
        self
    }

    pub fn estimated_size(mut self, estimated_size: usize) -> Self {
        self.estimated_size = Some(estimated_size);
        self
    }

    pub fn build<K, V, S: BuildHasher + Clone>(self, build_hasher: S) -> ShardedMap<K, V, S> {
        let shards = self
            .shards
            .unwrap_or_else(|| available_parallelism() * 4)
            .max(1)
            .next_power_of_two();

        let per_shard = match self.estimated_size {
            Some(estimated_size) if estimated_size > shards => (estimated_size / shards) * 2,
            _ => 0,
        };

        let shards = (0..shards)
            .map(|_| Shard {
                table: RwLock::new(HashMap::with_capacity_and_hasher(
                    per_shard,
                    build_hasher.clone(),
                )),
            })
            .collect();

        ShardedMap {
            shards,
            build_hasher,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hashbrown::hash_map::DefaultHashBuilder;

    #[test]
    fn test_shards_round_to_power_of_two() {
        let map = MapBuilder::new()
            .shards(5)
            .build::<u8, u8, DefaultHashBuilder>(Default::default());

        assert_eq!(map.shard_count(), 8);
    }

    #[test]
    fn test_zero_shards_still_builds() {
        let map = MapBuilder::new()
            .shards(0)
            .build::<u8, u8, DefaultHashBuilder>(Default::default());

        assert_eq!(map.shard_count(), 1);
        map.insert(1, 1);
        assert_eq!(map.get(&1), Some(1));
    }

    #[test]
    fn test_default_shards() {
        let map = MapBuilder::new()
            .estimated_size(10_000)
            .build::<u8, u8, DefaultHashBuilder>(Default::default());

        assert!(map.shard_count().is_power_of_two());
        assert!(map.shard_count() >= 4);
    }
}
