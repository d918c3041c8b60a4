use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use guap_core::imports::{
    ColumnMapping, ColumnOption, ImportLog, ImportPreview, ImportResult, ImportRow, ParsedCsv,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct CsvUpload {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedCsvResponse {
    #[serde(flatten)]
    parsed: ParsedCsv,
    columns: Vec<ColumnOption>,
}

#[derive(Deserialize)]
struct PreviewRequest {
    content: String,
    mapping: ColumnMapping,
}

#[derive(Deserialize)]
struct ImportRequest {
    rows: Vec<ImportRow>,
    filename: Option<String>,
}

async fn parse_csv(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CsvUpload>,
) -> ApiResult<Json<ParsedCsvResponse>> {
    let parsed = state.import_service.parse_csv(payload.content.as_bytes())?;
    let columns = parsed.column_options();
    Ok(Json(ParsedCsvResponse { parsed, columns }))
}

async fn preview_import(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<PreviewRequest>,
) -> ApiResult<Json<ImportPreview>> {
    let preview = state.import_service.preview_import(
        &user.id,
        payload.content.as_bytes(),
        &payload.mapping,
    )?;
    Ok(Json(preview))
}

async fn import_expenses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ImportRequest>,
) -> ApiResult<Json<ImportResult>> {
    let result = state
        .import_service
        .import_expenses(&user.id, payload.rows, payload.filename)
        .await?;
    Ok(Json(result))
}

async fn import_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<ImportLog>>> {
    Ok(Json(state.import_service.get_import_history(&user.id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/imports/parse", post(parse_csv))
        .route("/imports/preview", post(preview_import))
        .route("/imports", post(import_expenses))
        .route("/imports/history", get(import_history))
}
