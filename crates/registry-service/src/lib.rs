//! # Registry Service
//!
//! User lifecycle service for the user registry: enforces the domain
//! invariants the repository does not, and derives `age` at read time.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::{UserServiceImpl, UserServiceImplParameters};
pub use user_service::*;
