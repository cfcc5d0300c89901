use crate::transport::http::types::{ApiResponse, AppState, ChangePuzzleRequest, PuzzleResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/puzzle",
    responses(
        (status = 200, description = "Current puzzle", body = ApiResponse)
    )
)]
pub async fn current_puzzle_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stamp = state.game.current_puzzle().await;
    (
        StatusCode::OK,
        Json(ApiResponse::ok(PuzzleResponse {
            puzzle_id: stamp.puzzle_id.get(),
            generation: stamp.generation,
        })),
    )
}

#[utoipa::path(
    post,
    path = "/api/puzzle",
    request_body = ChangePuzzleRequest,
    responses(
        (status = 200, description = "Puzzle changed and history cleared", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse)
    )
)]
pub async fn change_puzzle_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChangePuzzleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(r)) => r,
        // An empty body means "pick one for me".
        Err(JsonRejection::MissingJsonContentType(_)) => ChangePuzzleRequest::default(),
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(format!("Invalid puzzle payload: {}", e))),
            )
                .into_response();
        }
    };

    let stamp = state.game.change_puzzle(request.puzzle_id).await;

    (
        StatusCode::OK,
        Json(ApiResponse::ok(PuzzleResponse {
            puzzle_id: stamp.puzzle_id.get(),
            generation: stamp.generation,
        })),
    )
        .into_response()
}
