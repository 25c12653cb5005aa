//! Result type aliases for the user registry.

use crate::RegistryError;

/// A specialized `Result` type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
