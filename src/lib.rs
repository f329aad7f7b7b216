//! An in-memory, read-through cache of user records with cancellable fills.
//!
//! # Quick Start
//! ```no_run
//! use std::time::Duration;
//! use user_cache::{Context, UserLookupCache};
//!
//! # async fn run() -> user_cache::Result<()> {
//! let cache = UserLookupCache::new();
//! let ctx = Context::background().with_timeout(Duration::from_secs(1));
//!
//! // the first lookup of an id waits out the fill, later ones are served from the cache
//! let user = cache.get_user_info(&ctx, 42).await?;
//! assert_eq!(user.username, "User_42");
//! # Ok(())
//! # }
//! ```

pub mod cache;
#[doc(inline)]
pub use cache::UserLookupCache;

/// Cancellation signal and deadline carried into lookups.
pub mod context;
#[doc(inline)]
pub use context::Context;

pub mod error;
#[doc(inline)]
pub use error::{ContextError, Error, Result};

/// The sharded reader/writer locked map backing the cache.
pub mod map;
#[doc(inline)]
pub use map::ShardedMap;

pub mod service;
#[doc(inline)]
pub use service::UserService;

pub mod user;
#[doc(inline)]
pub use user::{get_user_by_id, Profile, User};

#[doc(hidden)]
pub mod constants_for_benchmarking;
