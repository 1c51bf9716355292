//! Move log read/write utilities.
//!
//! Serializes a game's per-ply records (`E2E4`, `D1xD7`, `E1OG1`) with a
//! dated header block and parses such text back, replaying every record
//! through a `Game` so the result is a verified final position.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_SHORT_CODE;
use crate::game_state::chess_types::{Color, PieceId, Square};
use crate::game_state::game::{ActivateResult, Game, GameOutcome};
use crate::moves::move_descriptions::{CAPTURE_MARKER, CASTLING_MARKER};

#[derive(Debug, Clone)]
pub struct MoveLogGame {
    pub headers: BTreeMap<String, String>,
    pub initial_code: String,
    pub records: Vec<String>,
    pub final_game: Game,
    pub result: String,
}

/// Result token for the current state of `game`.
pub fn result_token(game: &Game) -> &'static str {
    match game.move_result_state().outcome() {
        GameOutcome::Checkmate {
            winner: Color::Light,
        } => "1-0",
        GameOutcome::Checkmate { winner: Color::Dark } => "0-1",
        GameOutcome::Stalemate => "1/2-1/2",
        GameOutcome::Ongoing => "*",
    }
}

pub fn write_move_log(initial_code: &str, initial_turn: Color, records: &[String], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Tile Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    if initial_code != STARTING_POSITION_SHORT_CODE || initial_turn != Color::Light {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("Code".to_owned(), initial_code.to_owned());
        headers.insert("Turn".to_owned(), initial_turn.name().to_owned());
    }

    write_move_log_with_headers(records, &headers)
}

pub fn write_move_log_with_headers(records: &[String], headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    let mut parts = Vec::<String>::with_capacity(records.len() + 1);
    for (ply, record) in records.iter().enumerate() {
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", (ply / 2) + 1, record));
        } else {
            parts.push(record.clone());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    parts.push(result.to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');

    out
}

pub fn read_move_log(text: &str) -> Result<MoveLogGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut body = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else if !trimmed.is_empty() {
            body.push(trimmed);
        }
    }

    let initial_code = headers
        .get("Code")
        .cloned()
        .unwrap_or_else(|| STARTING_POSITION_SHORT_CODE.to_owned());
    let initial_turn = match headers.get("Turn").map(String::as_str) {
        None | Some("White") => Color::Light,
        Some("Black") => Color::Dark,
        Some(other) => return Err(format!("Invalid turn header: {other}")),
    };

    let mut game = Game::from_short_code(&initial_code, initial_turn).map_err(|e| e.to_string())?;
    let mut records = Vec::<String>::new();
    let mut result = "*".to_owned();

    for token in body.iter().flat_map(|line| line.split_whitespace()) {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            continue;
        }
        replay_record(&mut game, token)?;
        records.push(token.to_owned());
    }

    Ok(MoveLogGame {
        headers,
        initial_code,
        records,
        final_game: game,
        result,
    })
}

fn replay_record(game: &mut Game, record: &str) -> Result<(), String> {
    let (id, to) = parse_record(record)?;
    let from = game
        .board()
        .positions()
        .square(id)
        .ok_or_else(|| format!("Piece {id} is not on the board for record {record}"))?;

    match game.play(from, to) {
        ActivateResult::Move { .. } | ActivateResult::Capture { .. } => {}
        other => return Err(format!("Illegal record {record}: {other:?}")),
    }

    // The marker must agree with what the move actually did.
    match game.move_log().last() {
        Some(logged) if logged == record => Ok(()),
        Some(logged) => Err(format!("Record {record} replayed as {logged}")),
        None => Err(format!("Record {record} was not logged")),
    }
}

fn parse_record(record: &str) -> Result<(PieceId, Square), String> {
    if !record.is_ascii() || !(4..=5).contains(&record.len()) {
        return Err(format!("Invalid move record: {record}"));
    }

    let id: PieceId = record[..2].parse().map_err(|e| format!("{e} in record {record}"))?;
    let rest = &record[2..];
    let square_text = match rest.len() {
        2 => rest,
        _ if rest.starts_with(CAPTURE_MARKER) || rest.starts_with(CASTLING_MARKER) => &rest[1..],
        _ => return Err(format!("Invalid move record marker: {record}")),
    };
    let to: Square = square_text.parse().map_err(|e| format!("{e} in record {record}"))?;
    Ok((id, to))
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    let inner = line
        .strip_prefix('[')
        .and_then(|x| x.strip_suffix(']'))
        .ok_or_else(|| format!("Invalid header line: {line}"))?;
    let (key, rest) = inner
        .split_once(' ')
        .ok_or_else(|| format!("Invalid header line: {line}"))?;
    let value = rest
        .trim()
        .strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
        .ok_or_else(|| format!("Invalid header value: {line}"))?;
    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

fn is_move_number_token(token: &str) -> bool {
    token
        .strip_suffix('.')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
