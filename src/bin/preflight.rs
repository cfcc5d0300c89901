use jotto_client::infra::config;
use jotto_client::infra::telemetry;
use jotto_client::{parse, HttpScoringClient, PuzzleId, ScoringClient};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--puzzle <n>] [--guess <word>]\n\
         \n\
         Reads env vars (all optional):\n\
           JOTTO_SERVICE_URL, JOTTO_REQUEST_TIMEOUT_SECS, JOTTO_DEFAULT_PUZZLE\n"
    );
    std::process::exit(2);
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let puzzle = match flag_value(&args, "--puzzle") {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .and_then(PuzzleId::new)
            .ok_or_else(|| anyhow::anyhow!("--puzzle must be a positive integer, got {:?}", raw))?,
        None => config::default_puzzle()?,
    };
    let guess = flag_value(&args, "--guess").unwrap_or("crazy");

    // Force-read config (nice error messages if invalid)
    let timeout = config::request_timeout()?;
    let client = HttpScoringClient::from_env()?;

    println!("> Preflight:");
    println!("  JOTTO_SERVICE_URL={}", client.service_url());
    println!("  JOTTO_REQUEST_TIMEOUT_SECS={}", timeout.as_secs());
    println!("  probe: puzzle={} guess={:?}", puzzle, guess);

    let raw = client
        .submit(guess, puzzle)
        .await
        .map_err(|e| anyhow::anyhow!("scoring service probe failed: {}", e))?;
    println!("  raw reply: {:?}", raw);

    let outcome = parse(&raw).map_err(|e| anyhow::anyhow!("scoring service reply unusable: {}", e))?;
    let (primary, secondary) = outcome.columns();
    println!("  parsed: {:?} -> [{}] [{}]", outcome, primary, secondary);

    println!("> Preflight OK.");
    Ok(())
}
