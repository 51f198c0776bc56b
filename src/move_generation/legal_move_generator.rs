//! Legal destination generation.
//!
//! Dispatches to the per-piece generators for pseudo-legal destinations,
//! then filters them by simulating each move on a copy of the board and
//! discarding those that leave the mover's king attacked.
//!
//! The simulation only relocates the piece. En-passant removal and the
//! castling rook are not simulated: the filter only cares about the king's
//! own safety, and castling checks its path while generating.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations for the piece on `square` ignoring king safety. Empty when
/// the square is empty or holds a piece of the other color.
pub fn pseudo_legal_moves(
    board: &Board,
    square: Square,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };
    if piece.color != color {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, color, en_passant_target, &mut out),
        PieceKind::Knight => generate_knight_moves(board, square, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, square, color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, square, color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, square, color, &mut out),
        PieceKind::King => generate_king_moves(board, square, color, castling_rights, &mut out),
    }
    out
}

/// Legal destinations for the piece on `square`.
pub fn get_valid_moves(
    board: &Board,
    square: Square,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut moves = pseudo_legal_moves(board, square, color, castling_rights, en_passant_target);
    moves.retain(|&to| leaves_king_safe(board, square, to, color));
    moves
}

/// Would relocating the piece from `from` to `to` keep `color`'s king safe?
pub fn is_move_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    match board.piece_at(from) {
        Some(piece) if piece.color == color && from != to => leaves_king_safe(board, from, to, color),
        _ => false,
    }
}

/// Every legal `(from, to)` pair for `color`, in board order.
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Square>,
) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            get_valid_moves(board, from, color, castling_rights, en_passant_target)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

fn leaves_king_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut simulated = *board;
    let moving = simulated.take(from);
    simulated.set(to, moving);
    !is_king_in_check(&simulated, color, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    #[test]
    fn twenty_moves_from_the_start() {
        let moves = all_legal_moves(&Board::initial(), Color::White, &CastlingRights::all(), None);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn empty_or_enemy_square_yields_nothing() {
        let board = Board::initial();
        let rights = CastlingRights::none();
        assert!(get_valid_moves(&board, sq("e4"), Color::White, &rights, None).is_empty());
        assert!(get_valid_moves(&board, sq("e7"), Color::White, &rights, None).is_empty());
        assert_eq!(get_valid_moves(&board, sq("e2"), Color::White, &rights, None).len(), 2);
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let board = Board::empty()
            .with_piece(sq("e4"), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq("d4"), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq("a4"), Piece::new(PieceKind::Rook, Color::Black));
        assert!(!is_move_legal(&board, sq("d4"), sq("d5"), Color::White));
        assert!(is_move_legal(&board, sq("d4"), sq("a4"), Color::White));

        let moves = get_valid_moves(&board, sq("d4"), Color::White, &CastlingRights::none(), None);
        assert_eq!(moves, vec![sq("c4"), sq("b4"), sq("a4")]);
    }

    #[test]
    fn blocking_a_check_is_legal() {
        let board = Board::empty()
            .with_piece(sq("e4"), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq("a4"), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(sq("c5"), Piece::new(PieceKind::Bishop, Color::White));
        assert!(is_move_legal(&board, sq("c5"), sq("b4"), Color::White));
        assert!(!is_move_legal(&board, sq("c5"), sq("d6"), Color::White));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::moved(PieceKind::King, Color::White))
            .with_piece(sq("d8"), Piece::new(PieceKind::Rook, Color::Black));
        let moves = get_valid_moves(&board, sq("e1"), Color::White, &CastlingRights::none(), None);
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("f2")));
    }
}
