use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use guap_core::dashboard::DashboardView;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardQuery {
    budget_id: Option<String>,
    year: Option<i32>,
}

async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<DashboardView>> {
    let view = state.dashboard_service.get_dashboard(
        &user.id,
        query.budget_id.as_deref().filter(|id| !id.is_empty()),
        query.year,
    )?;
    Ok(Json(view))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
