use crate::transport::http::types::{ApiResponse, AppState, SubmitGuessRequest, SubmitGuessResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/guesses",
    request_body = SubmitGuessRequest,
    responses(
        (status = 202, description = "Row reserved; the outcome arrives asynchronously", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse)
    )
)]
pub async fn submit_guess_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitGuessRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(format!("Invalid guess payload: {}", e))),
            )
                .into_response();
        }
    };

    // The session task runs on its own; the caller polls /api/history for the outcome.
    let handle = state.game.submit_guess(&request.guess).await;
    let ticket = handle.ticket;

    (
        StatusCode::ACCEPTED,
        Json(ApiResponse::ok(SubmitGuessResponse {
            row: ticket.index,
            puzzle_id: ticket.puzzle_id.get(),
            generation: ticket.generation,
        })),
    )
        .into_response()
}
