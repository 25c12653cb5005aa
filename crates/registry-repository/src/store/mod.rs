//! Row-level user storage.
//!
//! A `UserStore` persists `(id, name, dob)` rows and nothing else. It
//! reports absence as `None`/`false`; turning that into a domain
//! `NotFound` is the repository's job.

mod postgres;

#[cfg(any(test, feature = "test-support"))]
mod memory;

pub use postgres::PostgresUserStore;

#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryUserStore;

use async_trait::async_trait;
use registry_core::{Interface, NewUser, RegistryResult, User, UserId};

/// Low-level user data access object.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Inserts a row and returns it with the store-assigned id.
    async fn insert(&self, user: &NewUser) -> RegistryResult<User>;

    /// Finds a row by primary key.
    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>>;

    /// Returns every row in ascending id order.
    async fn find_all(&self) -> RegistryResult<Vec<User>>;

    /// Replaces name and dob of an existing row. `None` when no row matched.
    async fn update(&self, id: UserId, user: &NewUser) -> RegistryResult<Option<User>>;

    /// Deletes a row by primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> RegistryResult<bool>;
}
