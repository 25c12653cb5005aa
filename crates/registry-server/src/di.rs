//! Dependency injection module using Shaku.
//!
//! `RegistryModule` wires the full stack for a single process:
//! Postgres pool → user store → repository → service, plus the system clock.

use registry_config::UserConfig;
use registry_core::SystemClock;
use registry_repository::{
    DatabasePool, DatabasePoolInterface, PostgresUserStore, UserRepositoryImpl,
};
use registry_service::UserServiceImpl;
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub RegistryModule {
        components = [
            DatabasePool,
            PostgresUserStore,
            UserRepositoryImpl,
            SystemClock,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module around an already-connected pool.
#[must_use]
pub fn build_module(db_pool: DatabasePool, users: &UserConfig) -> Arc<RegistryModule> {
    let module = RegistryModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.into_parameters())
        .with_component_parameters::<UserServiceImpl>(UserServiceImpl::parameters(
            users.age_policy,
        ))
        .build();

    Arc::new(module)
}

/// Trait for resolving the database pool.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for RegistryModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
