//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UserWithAgeResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use registry_core::{AgePolicy, Clock, RegistryError, RegistryResult, UserId};
use registry_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Shaku-injectable user service.
///
/// Holds no state of its own beyond its collaborators and the age policy,
/// which is supplied as a component parameter.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    clock: Arc<dyn Clock>,
    age_policy: AgePolicy,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        age_policy: AgePolicy,
    ) -> Self {
        Self {
            user_repository,
            clock,
            age_policy,
        }
    }

    /// Component parameters for wiring through a Shaku module.
    #[must_use]
    pub fn parameters(age_policy: AgePolicy) -> UserServiceImplParameters {
        UserServiceImplParameters { age_policy }
    }

    fn require_name(name: &str) -> RegistryResult<()> {
        if name.is_empty() {
            return Err(RegistryError::validation("name is required"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: CreateUserRequest) -> RegistryResult<UserResponse> {
        debug!("Creating user: {}", request.name);

        Self::require_name(&request.name)?;

        let user = self
            .user_repository
            .create(&request.name, &request.dob)
            .await?;

        info!("User created: {}", user.id);
        Ok(UserResponse::from(user))
    }

    async fn get_user_by_id(&self, id: UserId) -> RegistryResult<UserWithAgeResponse> {
        debug!("Getting user: {}", id);

        let user = self.user_repository.get_by_id(id).await?;
        Ok(UserWithAgeResponse::from_user(
            user,
            self.clock.today(),
            self.age_policy,
        ))
    }

    async fn list_users(&self) -> RegistryResult<Vec<UserWithAgeResponse>> {
        debug!("Listing users");

        let users = self.user_repository.list().await?;
        // One reading of the clock so every row in a listing agrees on "today".
        let today = self.clock.today();
        Ok(users
            .into_iter()
            .map(|user| UserWithAgeResponse::from_user(user, today, self.age_policy))
            .collect())
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistryResult<UserResponse> {
        debug!("Updating user: {}", id);

        Self::require_name(&request.name)?;

        let user = self
            .user_repository
            .update(id, &request.name, &request.dob)
            .await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: UserId) -> RegistryResult<()> {
        debug!("Deleting user: {}", id);

        self.user_repository.delete(id).await?;

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("age_policy", &self.age_policy)
            .finish_non_exhaustive()
    }
}
