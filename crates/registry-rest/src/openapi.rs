//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use registry_core::{ErrorResponse, FieldError, UserId};
use registry_service::{CreateUserRequest, UpdateUserRequest, UserResponse, UserWithAgeResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the user registry API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry API",
        version = "0.1.0",
        description = "CRUD service for users with a derived age",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            UserId,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserWithAgeResponse,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }

    #[test]
    fn test_openapi_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "User Registry API");
    }
}
