//! Repository layer implementation over a `UserStore`.
//!
//! Implements the [`UserRepository`] domain interface on top of a
//! [`UserStore`]:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn UserRepository>
//! UserRepositoryImpl          ← date conversion, not-found mapping
//!   ↓ Arc<dyn UserStore>
//! PostgresUserStore / InMemoryUserStore
//! ```
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserStore`]: crate::store::UserStore

use crate::{store::UserStore, traits::UserRepository};
use async_trait::async_trait;
use registry_core::{DateCodec, NewUser, RegistryError, RegistryResult, User, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

const RESOURCE: &str = "User";

/// Repository implementation that orchestrates [`UserStore`] access.
///
/// [`UserStore`]: crate::store::UserStore
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    #[shaku(inject)]
    user_store: Arc<dyn UserStore>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` over the given store.
    #[must_use]
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, name: &str, dob: &str) -> RegistryResult<User> {
        debug!("Repository: create user {}", name);
        let dob = DateCodec::parse(dob)?;
        self.user_store.insert(&NewUser::new(name, dob)).await
    }

    async fn get_by_id(&self, id: UserId) -> RegistryResult<User> {
        debug!("Repository: get_by_id {}", id);
        self.user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, id))
    }

    async fn list(&self) -> RegistryResult<Vec<User>> {
        debug!("Repository: list");
        self.user_store.find_all().await
    }

    async fn update(&self, id: UserId, name: &str, dob: &str) -> RegistryResult<User> {
        debug!("Repository: update user {}", id);
        let dob = DateCodec::parse(dob)?;
        self.user_store
            .update(id, &NewUser::new(name, dob))
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, id))
    }

    async fn delete(&self, id: UserId) -> RegistryResult<()> {
        debug!("Repository: delete user {}", id);
        if self.user_store.delete(id).await? {
            Ok(())
        } else {
            Err(RegistryError::not_found(RESOURCE, id))
        }
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
