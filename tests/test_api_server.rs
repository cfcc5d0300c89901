//! Drives the HTTP front end end-to-end against a scripted scoring service.

mod common;

use common::{puzzle, ScriptedScoringClient};
use jotto_client::{transport, GameService};
use serde_json::{json, Value};
use std::sync::Arc;

async fn start_api(game: GameService) -> String {
    let router = transport::http::create_router(transport::http::AppState { game });
    // Bind to an ephemeral port to avoid conflicts if an API server is already running.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn history(client: &reqwest::Client, base_url: &str) -> Value {
    let body = client
        .get(format!("{}/api/history", base_url))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert!(body["success"].as_bool().unwrap_or(false));
    body["data"].clone()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn guesses_and_puzzle_changes_over_http() {
    let scoring = Arc::new(ScriptedScoringClient::new());
    let crazy_reply = scoring.expect("crazy");
    let cargo_reply = scoring.expect("cargo");
    let game = GameService::new(puzzle(16952), scoring.clone());
    let base_url = start_api(game.clone()).await;
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(health["data"]["puzzle_id"], json!(16952));

    for (i, guess) in ["crazy", "cargo"].iter().enumerate() {
        let resp = client
            .post(format!("{}/api/guesses", base_url))
            .json(&json!({ "guess": guess }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::ACCEPTED);
        let body = resp.json::<Value>().await.unwrap();
        assert_eq!(body["data"]["row"], json!(i));
        assert_eq!(body["data"]["puzzle_id"], json!(16952));
    }

    let pending = history(&client, &base_url).await;
    assert_eq!(pending["rows"][0]["status"], json!("pending"));
    assert_eq!(pending["rows"][1]["guess"], json!("cargo"));

    // Answer the second guess first, then the first.
    cargo_reply.send(Ok("guess 5 5".into())).unwrap();
    crazy_reply.send(Ok("guess 3 1".into())).unwrap();

    let mut resolved = Value::Null;
    for _ in 0..50 {
        resolved = history(&client, &base_url).await;
        let rows = resolved["rows"].as_array().cloned().unwrap_or_default();
        if rows.iter().all(|r| r["status"] != json!("pending")) {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }
    assert_eq!(resolved["rows"][0]["guess"], json!("crazy"));
    assert_eq!(resolved["rows"][0]["primary"], json!("3"));
    assert_eq!(resolved["rows"][0]["secondary"], json!("1"));
    assert_eq!(resolved["rows"][1]["primary"], json!("you win!"));
    assert_eq!(resolved["rows"][1]["secondary"], json!(""));
    assert_eq!(resolved["rows"][1]["status"], json!("win"));

    // Explicit puzzle change clears the table.
    let changed = client
        .post(format!("{}/api/puzzle", base_url))
        .json(&json!({ "puzzle_id": 42 }))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(changed["data"]["puzzle_id"], json!(42));
    let cleared = history(&client, &base_url).await;
    assert_eq!(cleared["puzzle_id"], json!(42));
    assert_eq!(cleared["rows"], json!([]));

    // A non-positive request picks a random puzzle.
    let random = client
        .post(format!("{}/api/puzzle", base_url))
        .json(&json!({ "puzzle_id": 0 }))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert!(random["data"]["puzzle_id"].as_u64().unwrap() >= 1);
    assert_eq!(random["data"]["generation"], json!(2));

    let current = client
        .get(format!("{}/api/puzzle", base_url))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(current["data"], random["data"]);
}

#[tokio::test]
async fn bad_guess_payload_is_rejected() {
    let game = GameService::new(puzzle(1), Arc::new(ScriptedScoringClient::new()));
    let base_url = start_api(game.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/guesses", base_url))
        .json(&json!({ "word": "crazy" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(game.snapshot().await.rows.is_empty());
}
