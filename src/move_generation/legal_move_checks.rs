//! Attack detection and end-of-game classification.
//!
//! Everything here works by scanning the board: every opponent piece is asked
//! for its attack set and the king's square is looked up in it. That is
//! plenty for interactive play and keeps the oracle trivially correct.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::move_generation::legal_move_shared::{step_targets, KING_OFFSETS};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_attacks;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Is `color`'s king attacked?
///
/// `king_square_override` tests a hypothetical king square (used while
/// castling) without placing a piece there. A board without a king of
/// `color` is never in check.
pub fn is_king_in_check(board: &Board, color: Color, king_square_override: Option<Square>) -> bool {
    let Some(king_square) = king_square_override.or_else(|| board.find_king(color)) else {
        return false;
    };
    is_square_attacked(board, king_square, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, piece)| {
            targets.clear();
            attack_set(board, from, piece, &mut targets);
            targets.contains(&square)
        })
}

/// Squares attacked by `piece` standing on `from`.
///
/// Pawns threaten their diagonals regardless of occupancy, and kings only
/// their neighbours: castling never attacks anything.
pub fn attack_set(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => out.extend(pawn_attacks(from, piece.color)),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => step_targets(board, from, piece.color, &KING_OFFSETS, out),
    }
}

pub fn has_any_legal_moves(
    board: &Board,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| !get_valid_moves(board, from, color, castling_rights, en_passant_target).is_empty())
}

pub fn is_checkmate(
    board: &Board,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> bool {
    is_king_in_check(board, color, None) && !has_any_legal_moves(board, color, castling_rights, en_passant_target)
}

pub fn is_stalemate(
    board: &Board,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> bool {
    !is_king_in_check(board, color, None) && !has_any_legal_moves(board, color, castling_rights, en_passant_target)
}

/// Status for the side about to move. Mate and stalemate outrank check.
pub fn compute_game_status(
    board: &Board,
    color_to_move: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> GameStatus {
    let in_check = is_king_in_check(board, color_to_move, None);
    let can_move = has_any_legal_moves(board, color_to_move, castling_rights, en_passant_target);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Active,
    }
}
