// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use jotto_client::infra::{config, telemetry};
use jotto_client::transport;
use jotto_client::{GameService, HttpScoringClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    // --- Scoring client ---
    let client = HttpScoringClient::from_env()?;
    tracing::info!(service_url = client.service_url(), "scoring service configured");

    // --- Game state ---
    let initial_puzzle = config::default_puzzle()?;
    let game = GameService::new(initial_puzzle, Arc::new(client));
    tracing::info!(puzzle_id = %initial_puzzle, "game initialized");

    let app_state = transport::http::AppState { game };

    // --- API Server Initialization ---
    let addr = config::api_addr()?;
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            // In-flight guesses are abandoned; nothing is persisted.
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
