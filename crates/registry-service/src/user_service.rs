//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UserWithAgeResponse};
use async_trait::async_trait;
use registry_core::{Interface, RegistryResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user. Fails with `Validation` when the name is empty.
    async fn create_user(&self, request: CreateUserRequest) -> RegistryResult<UserResponse>;

    /// Gets a user by ID, with the derived age.
    async fn get_user_by_id(&self, id: UserId) -> RegistryResult<UserWithAgeResponse>;

    /// Lists all users in id order, with the derived age.
    async fn list_users(&self) -> RegistryResult<Vec<UserWithAgeResponse>>;

    /// Replaces a user's name and date of birth.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistryResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RegistryResult<()>;
}
