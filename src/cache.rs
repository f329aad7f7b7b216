pub mod builder;
mod fill;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::map::ShardedMap;
use crate::user::User;
use builder::CacheBuilder;
use fill::Fill;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

#[derive(Clone)]
/// A read-through cache of user records keyed by id.
///
/// Clones share the same underlying map. Records are never evicted.
pub struct UserLookupCache {
    map: Arc<ShardedMap<i64, Arc<User>>>,
    fill_latency: Duration,
}

impl Default for UserLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

impl UserLookupCache {
    /// An empty cache with the default 500ms fill latency
    pub fn new() -> Self {
        CacheBuilder::new().build()
    }

    pub fn builder() -> CacheBuilder {
        CacheBuilder::new()
    }

    /// Look up a user, filling the cache on a miss.
    ///
    /// Ids `<= 0` are rejected with [`Error::InvalidArgument`] before anything else happens.
    /// A hit returns the cached record without waiting on anything but the shard's read lock.
    /// A miss waits out the fill latency without holding any lock, then inserts a fresh record.
    /// If `ctx` is done first the call returns its cause and the cache is left untouched.
    ///
    /// ### Note
    /// Concurrent misses on the same id are not coalesced, each one waits and inserts its own
    /// record and the last insert stays in the cache.
    pub async fn get_user_info(&self, ctx: &Context, id: i64) -> Result<Arc<User>> {
        if id <= 0 {
            return Err(Error::InvalidArgument(id));
        }

        if let Some(user) = self.map.get(&id) {
            trace!(id, "cache hit");
            return Ok(user);
        }

        trace!(id, "cache miss");

        if let Some(cause) = ctx.err() {
            return Err(cause.into());
        }

        Fill::new(self.fill_latency, ctx.done()).await?;

        let user = Arc::new(User::placeholder(id));

        if self.map.insert(id, user.clone()).is_some() {
            debug!(id, "fill replaced a concurrently filled record");
        } else {
            debug!(id, "filled");
        }

        Ok(user)
    }

    /// Try to get a record from the cache without filling
    pub fn get(&self, id: i64) -> Option<Arc<User>> {
        self.map.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.map.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn fill_latency(&self) -> Duration {
        self.fill_latency
    }
}
