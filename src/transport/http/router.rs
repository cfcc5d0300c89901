use crate::transport::http::handlers::{guess, health, history, puzzle};
use crate::transport::http::types::{
    ApiResponse, ChangePuzzleRequest, HistoryResponse, HistoryRowView, PuzzleResponse, RowStatus,
    SubmitGuessRequest, SubmitGuessResponse,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        guess::submit_guess_handler,
        puzzle::current_puzzle_handler,
        puzzle::change_puzzle_handler,
        history::history_handler
    ),
    components(schemas(
        ApiResponse,
        SubmitGuessRequest,
        SubmitGuessResponse,
        ChangePuzzleRequest,
        PuzzleResponse,
        HistoryResponse,
        HistoryRowView,
        RowStatus
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/guesses", post(guess::submit_guess_handler))
        .route(
            "/api/puzzle",
            get(puzzle::current_puzzle_handler).post(puzzle::change_puzzle_handler),
        )
        .route("/api/history", get(history::history_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
