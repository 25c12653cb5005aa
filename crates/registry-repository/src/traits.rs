//! Repository trait definitions.

use async_trait::async_trait;
use registry_core::{Interface, RegistryResult, User, UserId};

/// User repository trait.
///
/// Dates cross this boundary as `YYYY-MM-DD` text and are converted to the
/// store's date type here. Missing rows surface as `RegistryError::NotFound`.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Creates a user. Fails with `InvalidDate` when `dob` is malformed.
    async fn create(&self, name: &str, dob: &str) -> RegistryResult<User>;

    /// Fetches a user by ID.
    async fn get_by_id(&self, id: UserId) -> RegistryResult<User>;

    /// Lists all users in id order.
    async fn list(&self) -> RegistryResult<Vec<User>>;

    /// Replaces name and dob of an existing user.
    async fn update(&self, id: UserId, name: &str, dob: &str) -> RegistryResult<User>;

    /// Deletes a user by ID.
    async fn delete(&self, id: UserId) -> RegistryResult<()>;
}
