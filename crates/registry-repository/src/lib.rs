//! # Registry Repository
//!
//! Three-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface, YYYY-MM-DD text in)
//! UserRepositoryImpl            (date conversion, not-found mapping)
//!   ↓  Arc<dyn UserStore>       (row-level interface)
//! PostgresUserStore             (SQLx, parameterized queries)
//!   ↓
//! Postgres
//! ```

pub mod pool;
pub mod store;
pub mod traits;
pub mod r#impl;

pub use pool::*;
pub use store::{PostgresUserStore, UserStore};
pub use traits::*;
pub use r#impl::UserRepositoryImpl;

#[cfg(any(test, feature = "test-support"))]
pub use store::InMemoryUserStore;
