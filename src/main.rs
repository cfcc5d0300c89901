//! Terminal front end.
//!
//! Every line typed is either a guess or a `/command`. Each guess is scored in
//! its own task, so the table is re-printed whenever a reply lands, in whatever
//! order the replies arrive.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use jotto_client::infra::{config, telemetry};
use jotto_client::transport::terminal::{self, Command};
use jotto_client::{GameService, HttpScoringClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let client = HttpScoringClient::from_env()?;
    tracing::info!(service_url = client.service_url(), "scoring service configured");

    let game = GameService::new(config::default_puzzle()?, Arc::new(client));

    // Renderer: redraw on every change to rows or puzzle.
    let mut changes = game.subscribe();
    let renderer_game = game.clone();
    let renderer = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = renderer_game.snapshot().await;
            println!("\n{}", terminal::render(&snapshot));
        }
    });

    println!("{}", terminal::help_text());
    println!("\n{}", terminal::render(&game.snapshot().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match terminal::parse_command(&line) {
            Command::Guess(guess) => {
                // Scoring happens in the background; the handle is not awaited.
                game.submit_guess(&guess).await;
            }
            Command::NewPuzzle(requested) => {
                let stamp = game.change_puzzle(requested).await;
                tracing::info!(puzzle_id = %stamp.puzzle_id, "new puzzle");
            }
            Command::Show => println!("{}", terminal::render(&game.snapshot().await)),
            Command::Help => println!("{}", terminal::help_text()),
            Command::Quit => break,
            Command::Empty => {}
        }
    }

    renderer.abort();
    Ok(())
}
