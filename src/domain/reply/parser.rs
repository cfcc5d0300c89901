// Turns a raw scoring-service reply line into an `Outcome`.

use crate::domain::model::Outcome;

/// The reply that signals the guess matched the secret word exactly.
pub const VICTORY_REPLY: &str = "guess 5 5";

const MAX_SCORE: u8 = 5;
const MAX_ERROR_CODE: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    #[error("invalid response from the server: {0:?}")]
    MalformedReply(String),
}

/// Parses one reply from the scoring service.
///
/// Accepts `guess <c> <p>` with both digits in `0..=5` and `error <k> <detail...>`
/// with `k` in `0..=3`. `guess 5 5` is reported as [`Outcome::Win`].
pub fn parse(raw: &str) -> Result<Outcome, ReplyError> {
    let reply = raw.trim();
    if reply.is_empty() {
        return Err(malformed(raw));
    }

    if reply == VICTORY_REPLY {
        return Ok(Outcome::Win);
    }

    if let Some(rest) = reply.strip_prefix("guess ") {
        return parse_score(rest).ok_or_else(|| malformed(reply));
    }

    if let Some(rest) = reply.strip_prefix("error ") {
        return parse_error(rest).ok_or_else(|| malformed(reply));
    }

    Err(malformed(reply))
}

fn parse_score(rest: &str) -> Option<Outcome> {
    let (common, positions) = rest.split_once(' ')?;
    let common_letters = bounded_digit(common, MAX_SCORE)?;
    let correct_positions = bounded_digit(positions, MAX_SCORE)?;
    Some(Outcome::Score {
        common_letters,
        correct_positions,
    })
}

fn parse_error(rest: &str) -> Option<Outcome> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    let code = first
        .to_digit(10)
        .filter(|d| *d <= u32::from(MAX_ERROR_CODE))? as u8;

    // The code must stand alone: "error 12" or "error 1x" are not valid replies.
    let detail = match chars.next() {
        None => "",
        Some((idx, c)) if c.is_whitespace() => rest[idx..].trim(),
        Some(_) => return None,
    };

    Some(Outcome::ServiceError {
        code,
        detail: detail.to_string(),
    })
}

/// A single ASCII digit no larger than `max`.
fn bounded_digit(field: &str, max: u8) -> Option<u8> {
    match field.as_bytes() {
        [b] if b.is_ascii_digit() && b - b'0' <= max => Some(b - b'0'),
        _ => None,
    }
}

fn malformed(text: &str) -> ReplyError {
    ReplyError::MalformedReply(text.to_string())
}
