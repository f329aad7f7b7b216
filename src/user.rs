use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// A cached user record. Never mutated once built, the cache hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The record a fill produces for `id`, stamped with the current time
    pub fn placeholder(id: i64) -> Self {
        User {
            id,
            username: placeholder_username(id),
            created_at: Utc::now(),
        }
    }
}

pub fn placeholder_username(id: i64) -> String {
    format!("User_{id}")
}

/// The flat profile returned by [`get_user_by_id`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

/// Stub lookup with no cache and no latency
pub fn get_user_by_id(id: i64) -> Result<Profile> {
    if id <= 0 {
        return Err(Error::InvalidArgument(id));
    }

    Ok(Profile {
        id,
        name: "TestUser".to_string(),
    })
}
