//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;

/// A strongly-typed wrapper for store-assigned user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Wraps a raw store key.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parses a user ID from a path segment.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        s.parse::<i32>().map(Self)
    }

    /// Returns the raw store key.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
