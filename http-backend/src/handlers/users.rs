use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::dtos::{CreateUserRequest, UserResponse};
use crate::models::User;
use crate::startup::AppState;
use service_core::error::AppError;

pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON body";

#[tracing::instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;

    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // Non-JSON submissions carry no fields at all.
        Err(JsonRejection::MissingJsonContentType(_)) => CreateUserRequest::default(),
        Err(rejection) => {
            tracing::warn!("Rejected create-user body: {}", rejection.body_text());
            return Err(AppError::BadRequest(MALFORMED_BODY_MESSAGE.to_string()));
        }
    };

    let (name, email) = request.into_fields()?;

    let user = User::new(name, email);
    state.users.insert(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
