use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use guap_core::categories::{Category, NewCategory};

async fn list_categories(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_categories(&user.id)?;
    Ok(Json(categories))
}

async fn get_misc_category_id(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<String>>> {
    Ok(Json(state.category_service.get_misc_category_id()?))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let created = state
        .category_service
        .create_category(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn hide_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.category_service.hide_category(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn unhide_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state
        .category_service
        .unhide_category(&user.id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/misc", get(get_misc_category_id))
        .route(
            "/categories/{id}/hidden",
            post(hide_category).delete(unhide_category),
        )
}
