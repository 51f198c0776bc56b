//! Single-line SAN move lists.
//!
//! `format_san_line` prints a history as `1. e4 e5 2. Nf3`, and
//! `replay_san_line` plays such a line through the reducer. Tokens are
//! matched against the notation of every legal move in the position, so
//! anything `generate_algebraic_notation` can write can be read back.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{build_move_record, is_promotion_move};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::utils::standard_algebraic::{generate_algebraic_notation, EN_PASSANT_SUFFIX};

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

pub fn format_san_line(moves: &[MoveRecord]) -> String {
    let mut out = String::new();
    let mut move_number = 1u32;

    for (index, record) in moves.iter().enumerate() {
        match record.piece.color {
            Color::White => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&format!("{move_number}. "));
            }
            Color::Black if index == 0 => out.push_str(&format!("{move_number}... ")),
            Color::Black => out.push(' '),
        }
        out.push_str(&record.notation);
        if record.piece.color == Color::Black {
            move_number += 1;
        }
    }
    out
}

/// Play every move of `line` from `start`.
pub fn replay_san_line(start: &GameState, line: &str) -> ChessResult<GameState> {
    let mut state = start.clone();

    for raw in line.split_whitespace() {
        let token = strip_move_number(raw);
        if token.is_empty() || token == "e.p." || RESULT_TOKENS.contains(&token) {
            continue;
        }
        if state.game_status.is_over() {
            return Err(san_error(raw, "the game is already over"));
        }
        state = play_san_token(&state, raw, token)?;
    }

    Ok(state)
}

fn play_san_token(state: &GameState, raw: &str, token: &str) -> ChessResult<GameState> {
    let wanted = normalize(token);
    let mut matches = Vec::new();

    for (from, to) in all_legal_moves(
        &state.board,
        state.current_player,
        &state.castling_rights,
        state.en_passant_target,
    ) {
        let promotions: Vec<Option<PieceKind>> = if is_promotion_move(&state.board, from, to) {
            PROMOTION_CHOICES.iter().copied().map(Some).collect()
        } else {
            vec![None]
        };

        for promotion in promotions {
            let Some(record) = build_move_record(
                &state.board,
                from,
                to,
                promotion,
                state.castling_rights,
                state.en_passant_target,
            ) else {
                continue;
            };
            let san = generate_algebraic_notation(&state.board, &record, GameStatus::Active);
            if normalize(&san) == wanted {
                matches.push((from, to, promotion));
            }
        }
    }

    match matches.as_slice() {
        [] => Err(san_error(raw, "no legal move matches")),
        [(from, to, promotion)] => {
            let next = state.make_move(*from, *to);
            Ok(match promotion {
                Some(kind) => next.complete_promotion(*kind),
                None => next,
            })
        }
        _ => Err(san_error(raw, "ambiguous move")),
    }
}

/// Drop a leading move number (`12.`, `3...`, `1.e4`).
fn strip_move_number(token: &str) -> &str {
    let after_digits = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() < token.len() && after_digits.starts_with('.') {
        after_digits.trim_start_matches('.')
    } else {
        token
    }
}

/// Comparable core of a SAN token: annotations, check marks, the en-passant
/// marker and the promotion `=` removed, zero-castling spelled with `O`.
fn normalize(token: &str) -> String {
    let core = token.strip_suffix(EN_PASSANT_SUFFIX).unwrap_or(token);
    let core = core.strip_suffix("e.p.").unwrap_or(core);
    let core = core.trim_end_matches(['+', '#', '!', '?']);
    let core = match core {
        "0-0" => "O-O",
        "0-0-0" => "O-O-O",
        other => other,
    };
    core.replace('=', "")
}

fn san_error(token: &str, reason: &str) -> ChessError {
    ChessError::InvalidSan {
        token: token.to_owned(),
        reason: reason.to_owned(),
    }
}
