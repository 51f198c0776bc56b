//! King destinations, castling included.
//!
//! Castling candidates are produced here rather than in the reducer so the
//! UI sees them like any other destination. The through-check rule is
//! answered by the oracle using a hypothetical king square; the board is
//! never modified for it.

use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::{step_targets, KING_OFFSETS};

pub fn generate_king_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling_rights: &CastlingRights,
    out: &mut Vec<Square>,
) {
    step_targets(board, from, color, &KING_OFFSETS, out);
    generate_castling_moves(board, from, color, castling_rights, out);
}

fn generate_castling_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling_rights: &CastlingRights,
    out: &mut Vec<Square>,
) {
    let Some(king) = board.piece_at(from) else {
        return;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return;
    }
    if from.row() != color.home_row() || from.col() != KING_HOME_COL {
        return;
    }

    let rights = castling_rights.for_color(color);
    if rights.king_side {
        if let Some(to) = castling_target(board, from, color, KING_SIDE_ROOK_COL) {
            out.push(to);
        }
    }
    if rights.queen_side {
        if let Some(to) = castling_target(board, from, color, QUEEN_SIDE_ROOK_COL) {
            out.push(to);
        }
    }
}

/// King destination for castling towards `rook_col`, when every condition
/// other than the right itself holds.
fn castling_target(board: &Board, king_from: Square, color: Color, rook_col: u8) -> Option<Square> {
    let rook_square = king_from.at_col(rook_col)?;
    match board.piece_at(rook_square) {
        Some(Piece {
            kind: PieceKind::Rook,
            color: rook_color,
            has_moved: false,
        }) if rook_color == color => {}
        _ => return None,
    }

    let step: i8 = if rook_col > king_from.col() { 1 } else { -1 };

    // Everything strictly between king and rook must be empty.
    let mut cursor = king_from.offset(0, step)?;
    while cursor != rook_square {
        if !board.is_empty(cursor) {
            return None;
        }
        cursor = cursor.offset(0, step)?;
    }

    // The king may not start on, pass through or land on an attacked square.
    let passed = king_from.offset(0, step)?;
    let landing = king_from.offset(0, 2 * step)?;
    for square in [king_from, passed, landing] {
        if is_king_in_check(board, color, Some(square)) {
            return None;
        }
    }

    Some(landing)
}
