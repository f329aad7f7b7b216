use crate::context::Context;
use crate::error::Result;
use crate::user::User;
use crate::UserLookupCache;

use std::future::Future;
use std::sync::Arc;

/// A `UserService` is anything that maps an id to a user record asynchronously.
///
/// Code that only needs lookups should depend on this rather than on [`UserLookupCache`] so it
/// can be handed a stand-in.
pub trait UserService {
    fn get_user_info(
        &self,
        ctx: &Context,
        id: i64,
    ) -> impl Future<Output = Result<Arc<User>>> + Send;
}

impl UserService for UserLookupCache {
    fn get_user_info(
        &self,
        ctx: &Context,
        id: i64,
    ) -> impl Future<Output = Result<Arc<User>>> + Send {
        UserLookupCache::get_user_info(self, ctx, id)
    }
}
