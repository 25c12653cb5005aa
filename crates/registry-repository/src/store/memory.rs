//! In-memory user store for tests.

use super::UserStore;
use async_trait::async_trait;
use registry_core::{NewUser, RegistryError, RegistryResult, User, UserId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Rows {
    next_id: i32,
    users: BTreeMap<UserId, User>,
}

/// `UserStore` held in a `BTreeMap`, assigning ids like a `SERIAL` column.
///
/// `set_failing(true)` makes every call return a `Database` error, for
/// exercising the error paths of upper layers.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    rows: Mutex<Rows>,
    failing: AtomicBool,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent calls fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of rows currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    /// Returns `true` when no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Rows> {
        self.rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check(&self) -> RegistryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RegistryError::Database("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &NewUser) -> RegistryResult<User> {
        self.check()?;
        let mut rows = self.lock();
        rows.next_id += 1;
        let user = user.clone().with_id(UserId::new(rows.next_id));
        rows.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> RegistryResult<Option<User>> {
        self.check()?;
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_all(&self) -> RegistryResult<Vec<User>> {
        self.check()?;
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn update(&self, id: UserId, user: &NewUser) -> RegistryResult<Option<User>> {
        self.check()?;
        let mut rows = self.lock();
        Ok(rows.users.get_mut(&id).map(|existing| {
            existing.name.clone_from(&user.name);
            existing.dob = user.dob;
            existing.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> RegistryResult<bool> {
        self.check()?;
        Ok(self.lock().users.remove(&id).is_some())
    }
}
