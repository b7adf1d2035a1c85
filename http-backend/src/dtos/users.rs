use crate::models::User;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const REQUIRED_FIELDS_MESSAGE: &str = "name and email are required";

/// Body of `POST /users`. Missing and `null` fields both land as `None`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Returns `(name, email)` once both are present and non-empty.
    pub fn into_fields(self) -> Result<(String, String), AppError> {
        self.validate()
            .map_err(|_| AppError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(AppError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: user.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
