//! # Registry Core
//!
//! Core types, traits, and error definitions for the user registry.
//! This crate provides the foundational pieces shared by every layer:
//! the unified error type, the `YYYY-MM-DD` date codec, age derivation
//! and the injected clock.

pub mod age;
pub mod clock;
pub mod date;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use age::*;
pub use clock::*;
pub use date::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
