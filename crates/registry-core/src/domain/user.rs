//! User entity.

use crate::{AgePolicy, DateCodec, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted user row.
///
/// `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub dob: NaiveDate,
}

impl User {
    /// Returns the date of birth in wire format.
    #[must_use]
    pub fn dob_text(&self) -> String {
        DateCodec::format(self.dob)
    }

    /// Derives the age as of `today` under the given policy.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate, policy: AgePolicy) -> i32 {
        policy.age_on(self.dob, today)
    }
}

/// Mutable fields of a user, as written on insert and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: NaiveDate,
}

impl NewUser {
    /// Creates a new set of user fields.
    #[must_use]
    pub fn new(name: impl Into<String>, dob: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dob,
        }
    }

    /// Attaches a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            dob: self.dob,
        }
    }
}
