//! Terminal-oriented Unicode board renderer.
//!
//! Draws the grid from white's side with rank 8 on top, which is simply row
//! order. Empty legal destinations of the current selection are drawn as
//! `×` so a text UI can show what a click would do.

use crate::game_state::chess_types::*;

const EMPTY_SQUARE: char = '·';
const DESTINATION_MARK: char = '×';

/// Render the board and a status line to a Unicode string.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board, &game_state.valid_moves);
    out.push('\n');
    out.push_str(&status_line(game_state));
    out
}

pub fn render_board(board: &Board, destinations: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for square in Square::all() {
        let rank_label = char::from(b'0' + square.rank_number());
        if square.col() == 0 {
            out.push(rank_label);
            out.push(' ');
        }

        let glyph = match board.piece_at(square) {
            Some(piece) => piece.symbol(),
            None if destinations.contains(&square) => DESTINATION_MARK,
            None => EMPTY_SQUARE,
        };
        out.push(glyph);

        if square.col() == 7 {
            out.push(' ');
            out.push(rank_label);
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out.push_str("  a b c d e f g h");

    out
}

fn status_line(game_state: &GameState) -> String {
    let side = game_state.current_player;
    match game_state.game_status {
        GameStatus::Active => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move, in check"),
        GameStatus::Checkmate => format!("checkmate, {} wins", side.opposite()),
        GameStatus::Stalemate => "stalemate".to_owned(),
    }
}
