//! User-related DTOs.

use chrono::NaiveDate;
use registry_core::rules::iso_date;
use registry_core::{AgePolicy, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
///
/// Missing members deserialize to empty strings so that they are reported
/// by field validation rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 50, message = "name must be between 2 and 50 characters"))]
    #[schema(example = "Ann", min_length = 2, max_length = 50)]
    pub name: String,

    #[validate(custom(function = "iso_date"))]
    #[schema(example = "1990-05-02", format = Date)]
    pub dob: String,
}

impl CreateUserRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
        }
    }
}

/// Request to replace a user's name and date of birth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "name must be between 2 and 50 characters"))]
    #[schema(example = "Ann", min_length = 2, max_length = 50)]
    pub name: String,

    #[validate(custom(function = "iso_date"))]
    #[schema(example = "1990-05-02", format = Date)]
    pub dob: String,
}

impl UpdateUserRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
        }
    }
}

/// User response DTO, returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "1990-05-02")]
    pub dob: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            dob: user.dob_text(),
            id: user.id,
            name: user.name,
        }
    }
}

/// User response with the derived `age`, returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserWithAgeResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "1990-05-02")]
    pub dob: String,
    #[schema(example = 36)]
    pub age: i32,
}

impl UserWithAgeResponse {
    /// Builds the response, deriving `age` as of `today`.
    #[must_use]
    pub fn from_user(user: User, today: NaiveDate, policy: AgePolicy) -> Self {
        Self {
            age: user.age_on(today, policy),
            dob: user.dob_text(),
            id: user.id,
            name: user.name,
        }
    }
}
