//! PGN read/write utilities for saving and replaying games.
//!
//! Movetext is written in coordinate notation (`1. e2e4 e7e5`) so it can be
//! replayed against the legal move list without disambiguation. Games that
//! did not begin from the standard position carry `SetUp`/`FEN` headers.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::revert_move;
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::find_legal_move;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Result tag from the terminal flags; call after `get_valid_moves`.
pub fn game_result(game_state: &GameState) -> &'static str {
    if game_state.checkmate() {
        match game_state.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game_state.stalemate() || game_state.stalemate_by_repeat() {
        "1/2-1/2"
    } else {
        "*"
    }
}

/// The position the recorded history started from.
pub fn initial_position(game_state: &GameState) -> GameState {
    let mut initial = game_state.clone();
    while revert_move(&mut initial).is_some() {}
    initial.redo_stack.clear();
    initial
}

/// Exports `game_state`'s whole history with a dated header block.
pub fn write_pgn(game_state: &GameState, white: &str, black: &str) -> String {
    let initial = initial_position(game_state);
    let moves: Vec<Move> = game_state.move_log().copied().collect();

    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Sable Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), game_result(game_state).to_owned());

    let initial_fen = initial.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(&initial, &moves, &headers)
}

pub fn write_pgn_with_headers(
    initial_state: &GameState,
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // Numbering continues from the side that was to move initially.
    let black_first = initial_state.side_to_move() == Color::Black;
    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (i, mv) in moves.iter().enumerate() {
        let ply = i + usize::from(black_first);
        let lan = mv.long_algebraic();
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", ply / 2 + 1, lan));
        } else if i == 0 {
            movetext_parts.push(format!("{}... {}", ply / 2 + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

pub fn save_pgn(path: impl AsRef<Path>, pgn: &str) -> ChessResult<()> {
    fs::write(path, pgn)?;
    Ok(())
}

pub fn read_pgn(pgn: &str) -> ChessResult<PgnGame> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or_else(|| ChessError::InvalidFen("SetUp is present but FEN is missing".to_owned()))?;
        GameState::from_fen(fen)?
    } else {
        GameState::new_game()
    };

    let mut state = initial_state.clone();
    let mut moves = Vec::<Move>::new();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        let token = strip_move_number(token);
        if token.is_empty() {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }

        let legal = state.get_valid_moves();
        let mv = find_legal_move(&legal, cleaned)?;
        state.make_move(mv);
        moves.push(mv);
    }
    let _ = state.get_valid_moves();

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        initial_state,
        moves,
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let malformed = || ChessError::InvalidFen(format!("malformed PGN header: {line}"));
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(malformed());
    }
    let inner = &line[1..line.len() - 1];
    let (key, value_raw) = inner.split_once(' ').ok_or_else(malformed)?;
    let value_raw = value_raw.trim();

    if value_raw.len() < 2 || !value_raw.starts_with('"') || !value_raw.ends_with('"') {
        return Err(malformed());
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.trim().to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drops a leading `12.` or `12...` from a token.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = &token[digits..];
    if digits > 0 && rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
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

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
