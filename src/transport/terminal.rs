//! Line-oriented terminal front end: command parsing and table rendering.

use crate::app::HistorySnapshot;

pub const GUESS_HEADER: &str = "Your Guess";
pub const COMMON_HEADER: &str = "Number of Letters in Common";
pub const POSITION_HEADER: &str = "Number of Letters in Position";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    /// `None` asks for a random puzzle.
    NewPuzzle(Option<i64>),
    Show,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Command::Guess(line.to_string());
    };

    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match name {
        "new" | "puzzle" => Command::NewPuzzle(parse_puzzle_request(arg)),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => Command::Help,
    }
}

/// Reads a typed puzzle number. Blank, non-numeric or non-positive input means
/// "random", which the puzzle context decides.
pub fn parse_puzzle_request(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

pub fn help_text() -> &'static str {
    "Type a guess and press enter.\n\
     /new [n]   start puzzle n (random if omitted)\n\
     /show      print the guess history\n\
     /quit      leave"
}

/// Renders the puzzle header and the three-column history table.
pub fn render(snapshot: &HistorySnapshot) -> String {
    let rows: Vec<(String, String, String)> = snapshot
        .rows
        .iter()
        .map(|r| {
            let (primary, secondary) = r.columns();
            (r.guess.clone(), primary, secondary)
        })
        .collect();

    let guess_w = rows
        .iter()
        .map(|r| r.0.chars().count())
        .chain([GUESS_HEADER.len()])
        .max()
        .unwrap_or(GUESS_HEADER.len());
    let common_w = rows
        .iter()
        .map(|r| r.1.chars().count())
        .chain([COMMON_HEADER.len()])
        .max()
        .unwrap_or(COMMON_HEADER.len());

    let mut out = format!("Puzzle #{}\n", snapshot.puzzle.puzzle_id);
    out.push_str(&format!(
        "{:<gw$} | {:<cw$} | {}\n",
        GUESS_HEADER,
        COMMON_HEADER,
        POSITION_HEADER,
        gw = guess_w,
        cw = common_w
    ));
    for (guess, primary, secondary) in rows {
        let line = format!(
            "{:<gw$} | {:<cw$} | {}",
            guess,
            primary,
            secondary,
            gw = guess_w,
            cw = common_w
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
