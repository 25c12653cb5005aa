//! Postgres user store.

use super::UserStore;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use chrono::NaiveDate;
use registry_core::{NewUser, RegistryResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// `UserStore` over the `users` table.
#[derive(Component, Clone)]
#[shaku(interface = UserStore)]
pub struct PostgresUserStore {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PostgresUserStore {
    /// Creates a new Postgres user store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    dob: NaiveDate,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            dob: row.dob,
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, user: &NewUser) -> RegistryResult<User> {
        debug!("Inserting user: {}", user.name);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, dob)
            VALUES ($1, $2)
            RETURNING id, name, dob
            "#,
        )
        .bind(&user.name)
        .bind(user.dob)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, dob
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> RegistryResult<Vec<User>> {
        debug!("Listing all users");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, dob
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: UserId, user: &NewUser) -> RegistryResult<Option<User>> {
        debug!("Updating user: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $1, dob = $2
            WHERE id = $3
            RETURNING id, name, dob
            "#,
        )
        .bind(&user.name)
        .bind(user.dob)
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> RegistryResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PostgresUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresUserStore").finish_non_exhaustive()
    }
}
