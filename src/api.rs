//! HTTP surface: three routes over the user store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::error::{ApiError, ApiResult};
use crate::store::UserStore;
use crate::user::{CreateUserRequest, User};

async fn list_users(State(store): State<UserStore>) -> Json<Vec<User>> {
    Json(store.list())
}

async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    // A non-numeric segment can never match an assigned id, so it takes the
    // same NotFound path as an absent one.
    let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;
    store.get(id).map(Json)
}

async fn create_user(
    State(store): State<UserStore>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = store.create(req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Build the HTTP API router over the given store.
pub fn build_router(store: UserStore) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .with_state(store)
}
