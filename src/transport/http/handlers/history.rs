use crate::transport::http::types::{ApiResponse, AppState, HistoryResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Guess history for the current puzzle, oldest first", body = ApiResponse)
    )
)]
pub async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.game.snapshot().await;
    (
        StatusCode::OK,
        Json(ApiResponse::ok(HistoryResponse::from(snapshot))),
    )
}
