use std::sync::Arc;
use std::time::Duration;

use crate::map::builder::MapBuilder;

use super::UserLookupCache;

/// How long a fill waits before producing a record
pub const DEFAULT_FILL_LATENCY: Duration = Duration::from_millis(500);

/// Configures a [`UserLookupCache`]. The defaults match [`UserLookupCache::new`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    map: MapBuilder,
    fill_latency: Duration,
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheBuilder {
    pub fn new() -> Self {
        CacheBuilder {
            map: MapBuilder::new(),
            fill_latency: DEFAULT_FILL_LATENCY,
        }
    }

    pub fn fill_latency(mut self, fill_latency: Duration) -> Self {
        self.fill_latency = fill_latency;
        self
    }

    /// See [`MapBuilder::shards`]
    pub fn shards(mut self, shards: usize) -> Self {
        self.map = self.map.shards(shards);
        self
    }

    pub fn estimated_size(mut self, estimated_size: usize) -> Self {
        self.map = self.map.estimated_size(estimated_size);
        self
    }

    pub fn build(self) -> UserLookupCache {
        UserLookupCache {
            map: Arc::new(self.map.build(Default::default())),
            fill_latency: self.fill_latency,
        }
    }
}
