//! Pawn destinations.
//!
//! Single and double pushes, diagonal captures, and the en-passant square.
//! Promotion is not expanded here: a push or capture onto the last rank is
//! one destination, and the state machine asks for the promotion piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::en_passant_capture_square;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let direction = color.pawn_direction();
    let unmoved = board.piece_at(from).is_some_and(|p| !p.has_moved);

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() && unmoved {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, color) {
        if board.is_opponent_piece(to, color) {
            out.push(to);
        } else if en_passant_target == Some(to) && is_en_passant_victim(board, from, to, color) {
            out.push(to);
        }
    }
}

/// Squares a pawn threatens, whether or not anything stands there.
pub fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let direction = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(direction, d_col))
}

fn is_en_passant_victim(board: &Board, from: Square, to: Square, color: Color) -> bool {
    matches!(
        board.piece_at(en_passant_capture_square(from, to)),
        Some(Piece { kind: PieceKind::Pawn, color: victim, .. }) if victim != color
    )
}
