//! `HttpScoringClient` against an in-process stand-in for the scoring service.

mod common;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::puzzle;
use jotto_client::{parse, HttpScoringClient, Outcome, ScoringClient, ScoringError};
use std::collections::HashMap;
use std::time::Duration;

async fn jotto_stub(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    let guess = params.get("guess").map(String::as_str).unwrap_or_default();
    let puzzle = params.get("puzzle").map(String::as_str).unwrap_or_default();

    if puzzle.parse::<i64>().map(|n| n <= 0).unwrap_or(true) {
        return (
            StatusCode::OK,
            "error 1 Non-number puzzle ID.\n".to_string(),
        );
    }
    match guess {
        "cargo" => (StatusCode::OK, "guess 5 5\n".to_string()),
        "crazy" => (StatusCode::OK, "\n   \nguess 3 1\ntrailing noise\n".to_string()),
        // Echo the decoded guess back so the test can check encoding.
        "c*azy" | "a b&c" => (StatusCode::OK, format!("error 2 {}", guess)),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "guess 1 1".to_string()),
        "" => (StatusCode::OK, String::new()),
        _ => (StatusCode::OK, "guess 0 0".to_string()),
    }
}

async fn start_stub() -> String {
    let router = Router::new().route("/6.005/jotto.py", get(jotto_stub));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}/6.005/jotto.py", port)
}

fn client_for(url: &str) -> HttpScoringClient {
    HttpScoringClient::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn returns_first_non_blank_line() {
    let client = client_for(&start_stub().await);

    assert_eq!(client.submit("cargo", puzzle(16952)).await.unwrap(), "guess 5 5");
    assert_eq!(client.submit("crazy", puzzle(16952)).await.unwrap(), "guess 3 1");
}

#[tokio::test]
async fn query_values_are_encoded() {
    let client = client_for(&start_stub().await);

    let reply = client.submit("c*azy", puzzle(16952)).await.unwrap();
    assert_eq!(reply, "error 2 c*azy");
    let reply = client.submit("a b&c", puzzle(16952)).await.unwrap();
    assert_eq!(
        parse(&reply).unwrap(),
        Outcome::ServiceError {
            code: 2,
            detail: "a b&c".to_string()
        }
    );
}

#[tokio::test]
async fn empty_body_is_left_to_the_parser() {
    let client = client_for(&start_stub().await);

    let reply = client.submit("", puzzle(16952)).await.unwrap();
    assert_eq!(reply, "");
    assert!(parse(&reply).is_err());
}

#[tokio::test]
async fn failure_status_is_a_transport_failure() {
    let client = client_for(&start_stub().await);

    let err = client.submit("boom", puzzle(16952)).await.unwrap_err();
    assert!(matches!(err, ScoringError::Transport(_)), "{:?}", err);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(&format!("http://127.0.0.1:{}/jotto.py", port));
    let err = client.submit("crazy", puzzle(1)).await.unwrap_err();
    assert!(matches!(err, ScoringError::Transport(_)), "{:?}", err);
}

#[tokio::test]
async fn malformed_target_is_an_address_failure() {
    for target in ["not a url", "http://", "://jotto.py"] {
        let client = client_for(target);
        let err = client.submit("crazy", puzzle(1)).await.unwrap_err();
        assert!(
            matches!(err, ScoringError::Address { .. }),
            "{} -> {:?}",
            target,
            err
        );
    }
}
