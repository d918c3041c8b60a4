use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use guap_core::constants::PAYMENT_SOURCE_COLORS;
use guap_core::payment_sources::{NewPaymentSource, PaymentSource};

async fn list_payment_sources(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<PaymentSource>>> {
    let sources = state.payment_source_service.get_payment_sources(&user.id)?;
    Ok(Json(sources))
}

async fn create_payment_source(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<NewPaymentSource>,
) -> ApiResult<(StatusCode, Json<PaymentSource>)> {
    let created = state
        .payment_source_service
        .create_payment_source(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_payment_source(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state
        .payment_source_service
        .delete_payment_source(&user.id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_colors() -> Json<Vec<&'static str>> {
    Json(PAYMENT_SOURCE_COLORS.to_vec())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/payment-sources",
            get(list_payment_sources).post(create_payment_source),
        )
        .route("/payment-sources/colors", get(list_colors))
        .route("/payment-sources/{id}", delete(delete_payment_source))
}
