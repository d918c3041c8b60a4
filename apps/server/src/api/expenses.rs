use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use guap_core::expenses::{Expense, ExpenseCategoryUpdate, NewExpense};

async fn list_expenses(
    Path(budget_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state
        .expense_service
        .get_expenses_by_budget_id(&user.id, &budget_id)?;
    Ok(Json(expenses))
}

async fn add_expense(
    Path(budget_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let created = state
        .expense_service
        .add_expense(&user.id, &budget_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_expense_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ExpenseCategoryUpdate>,
) -> ApiResult<Json<Expense>> {
    let updated = state
        .expense_service
        .update_expense_category(&user.id, &id, payload.category_id)
        .await?;
    Ok(Json(updated))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/budgets/{id}/expenses",
            get(list_expenses).post(add_expense),
        )
        .route("/expenses/{id}/category", put(update_expense_category))
        .route("/expenses/{id}", delete(delete_expense))
}
