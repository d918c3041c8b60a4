use std::sync::Arc;

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use guap_core::budgets::{Budget, BudgetWithNetIncome, NewBudget};
use guap_core::dashboard::BudgetDetailView;
use serde::Deserialize;

#[derive(Deserialize)]
struct IncomeUpdate {
    income: f64,
}

async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state.budget_service.get_budgets(&user.id)?;
    Ok(Json(budgets))
}

async fn list_budgets_with_net_income(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<BudgetWithNetIncome>>> {
    let budgets = state.budget_service.get_budgets_with_net_income(&user.id)?;
    Ok(Json(budgets))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<NewBudget>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let created = state.budget_service.create_budget(&user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Budget>> {
    let budget = state
        .budget_service
        .get_budget(&user.id, &id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(budget))
}

async fn get_budget_detail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<BudgetDetailView>> {
    let detail = state
        .dashboard_service
        .get_budget_detail(&user.id, &id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(detail))
}

async fn update_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<IncomeUpdate>,
) -> ApiResult<Json<Budget>> {
    let updated = state
        .budget_service
        .update_budget_income(&user.id, &id, payload.income)
        .await?;
    Ok(Json(updated))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/with-net-income", get(list_budgets_with_net_income))
        .route("/budgets/{id}", get(get_budget).delete(delete_budget))
        .route("/budgets/{id}/income", put(update_income))
        .route("/budgets/{id}/detail", get(get_budget_detail))
}
