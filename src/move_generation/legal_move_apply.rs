//! Board-level realization of moves.
//!
//! Commit, undo and redo all go through `apply_record` / `unapply_record`,
//! so the rook relocation of castling, the en-passant removal and the
//! promotion substitution exist exactly once.

use chrono::Utc;

use crate::game_state::chess_rules::{
    KING_SIDE_ROOK_COL, KING_SIDE_ROOK_TARGET_COL, QUEEN_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_TARGET_COL,
};
use crate::game_state::chess_types::*;

/// Square of the pawn removed by an en-passant capture from `from` to `to`:
/// the destination file on the mover's origin rank.
#[inline]
pub const fn en_passant_capture_square(from: Square, to: Square) -> Square {
    from.with_col_of(to)
}

/// Pawn moving diagonally onto the current en-passant target.
pub fn is_en_passant_move(board: &Board, from: Square, to: Square, en_passant_target: Option<Square>) -> bool {
    en_passant_target == Some(to)
        && from.col() != to.col()
        && board.is_empty(to)
        && board.piece_at(from).is_some_and(|p| p.kind == PieceKind::Pawn)
}

/// Pawn moving onto its last rank.
pub fn is_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    board
        .piece_at(from)
        .is_some_and(|p| p.kind == PieceKind::Pawn && to.row() == p.color.promotion_row())
}

/// The square skipped by a double pawn push, `None` for every other move.
pub fn compute_en_passant_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece.kind != PieceKind::Pawn || from.row().abs_diff(to.row()) != 2 {
        return None;
    }
    Square::from_coords(((from.row() + to.row()) / 2) as i8, from.col() as i8)
}

/// Rights after `piece` moves from `from` to `to`, capturing `captured`.
///
/// Only ever clears rights. A king move clears both of its sides, a rook
/// leaving its corner clears that side, and taking the opponent's rook on
/// its corner clears the opponent's side.
pub fn update_castling_rights(
    rights: CastlingRights,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) -> CastlingRights {
    let mut next = rights;

    match piece.kind {
        PieceKind::King => {
            let side = next.for_color_mut(piece.color);
            side.king_side = false;
            side.queen_side = false;
        }
        PieceKind::Rook => clear_corner_right(&mut next, piece.color, from),
        _ => {}
    }

    if let Some(victim) = captured {
        if victim.kind == PieceKind::Rook && victim.color != piece.color {
            clear_corner_right(&mut next, victim.color, to);
        }
    }

    next
}

fn clear_corner_right(rights: &mut CastlingRights, color: Color, square: Square) {
    if square.row() != color.home_row() {
        return;
    }
    let side = rights.for_color_mut(color);
    match square.col() {
        KING_SIDE_ROOK_COL => side.king_side = false,
        QUEEN_SIDE_ROOK_COL => side.queen_side = false,
        _ => {}
    }
}

/// Rook corner and post-castle square for a king moving `king_from -> king_to`.
pub fn castling_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    let (home_col, target_col) = if king_to.col() > king_from.col() {
        (KING_SIDE_ROOK_COL, KING_SIDE_ROOK_TARGET_COL)
    } else {
        (QUEEN_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_TARGET_COL)
    };
    Some((king_from.at_col(home_col)?, king_from.at_col(target_col)?))
}

pub fn apply_castling_rook_move(board: &mut Board, king_from: Square, king_to: Square) {
    let Some((home, target)) = castling_rook_squares(king_from, king_to) else {
        return;
    };
    if let Some(rook) = board.take(home) {
        board.set(target, Some(rook.with_has_moved(true)));
    }
}

/// Puts the castled rook back on its corner as unmoved.
pub fn undo_castling_rook_move(board: &mut Board, king_from: Square, king_to: Square) {
    let Some((home, target)) = castling_rook_squares(king_from, king_to) else {
        return;
    };
    if let Some(rook) = board.take(target) {
        board.set(home, Some(rook.with_has_moved(false)));
    }
}

/// Describe the move `from -> to` as played from `board`, with every
/// snapshot undo will need. `None` when `from` is empty.
///
/// The notation is left empty; it depends on the resulting status, which
/// the caller computes after applying the record.
pub fn build_move_record(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> Option<MoveRecord> {
    let piece = board.piece_at(from)?;
    let is_en_passant = is_en_passant_move(board, from, to, en_passant_target);
    let en_passant_square = is_en_passant.then(|| en_passant_capture_square(from, to));
    let captured = match en_passant_square {
        Some(square) => board.piece_at(square),
        None => board.piece_at(to),
    };

    Some(MoveRecord {
        piece,
        from,
        to,
        captured,
        notation: String::new(),
        timestamp: Utc::now(),
        prev_has_moved: piece.has_moved,
        prev_captured_has_moved: captured.map(|p| p.has_moved),
        prev_castling_rights: castling_rights,
        prev_en_passant_target: en_passant_target,
        is_en_passant,
        en_passant_capture_square: en_passant_square,
        promotion,
    })
}

/// Realize `record` on `board`.
pub fn apply_record(board: &mut Board, record: &MoveRecord) {
    board.take(record.from);
    if let Some(square) = record.en_passant_capture_square.filter(|_| record.is_en_passant) {
        board.take(square);
    }
    if record.is_castling() {
        apply_castling_rook_move(board, record.from, record.to);
    }
    board.set(record.to, Some(record.placed_piece()));
}

/// Exact inverse of `apply_record`.
pub fn unapply_record(board: &mut Board, record: &MoveRecord) {
    board.take(record.to);
    board.set(record.from, Some(record.piece.with_has_moved(record.prev_has_moved)));

    let restored = record
        .captured
        .map(|p| p.with_has_moved(record.prev_captured_has_moved.unwrap_or(p.has_moved)));
    match record.en_passant_capture_square.filter(|_| record.is_en_passant) {
        Some(square) => board.set(square, restored),
        None => board.set(record.to, restored),
    }

    if record.is_castling() {
        undo_castling_rook_move(board, record.from, record.to);
    }
}

/// Castling rights and en-passant target once `record` has been played on
/// a position holding `rights`.
pub fn forward_state(rights: CastlingRights, record: &MoveRecord) -> (CastlingRights, Option<Square>) {
    (
        update_castling_rights(rights, record.piece, record.from, record.to, record.captured),
        compute_en_passant_target(record.piece, record.from, record.to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    #[test]
    fn double_push_sets_the_skipped_square() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(compute_en_passant_target(pawn, sq("d7"), sq("d5")), Some(sq("d6")));
        assert_eq!(compute_en_passant_target(pawn, sq("d7"), sq("d6")), None);

        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(compute_en_passant_target(rook, sq("a1"), sq("a3")), None);
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_target() {
        assert_eq!(en_passant_capture_square(sq("e5"), sq("d6")), sq("d5"));
        assert_eq!(en_passant_capture_square(sq("d4"), sq("e3")), sq("e4"));
    }

    #[test]
    fn king_move_clears_both_sides() {
        let king = Piece::new(PieceKind::King, Color::White);
        let rights = update_castling_rights(CastlingRights::all(), king, sq("e1"), sq("f1"), None);
        assert!(!rights.white.king_side && !rights.white.queen_side);
        assert_eq!(rights.black, CastlingRights::all().black);
    }

    #[test]
    fn rook_leaving_its_corner_clears_that_side() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let rights = update_castling_rights(CastlingRights::all(), rook, sq("h1"), sq("h3"), None);
        assert!(!rights.white.king_side);
        assert!(rights.white.queen_side);

        let elsewhere = update_castling_rights(CastlingRights::all(), rook.with_has_moved(true), sq("h3"), sq("a3"), None);
        assert_eq!(elsewhere, CastlingRights::all());
    }

    #[test]
    fn knight_taking_the_a8_rook_clears_black_queen_side() {
        let knight = Piece::moved(PieceKind::Knight, Color::White);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let rights = update_castling_rights(CastlingRights::all(), knight, sq("b6"), sq("a8"), Some(rook));
        assert!(!rights.black.queen_side);
        assert!(rights.black.king_side);
        assert_eq!(rights.white, CastlingRights::all().white);
    }

    #[test]
    fn castling_record_moves_and_restores_the_rook() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        let record = build_move_record(&board, sq("e1"), sq("g1"), None, CastlingRights::all(), None)
            .expect("king stands on e1");
        assert!(record.is_castling());

        let mut played = board;
        apply_record(&mut played, &record);
        assert_eq!(played.piece_at(sq("g1")), Some(Piece::moved(PieceKind::King, Color::White)));
        assert_eq!(played.piece_at(sq("f1")), Some(Piece::moved(PieceKind::Rook, Color::White)));
        assert!(played.is_empty(sq("h1")));

        unapply_record(&mut played, &record);
        assert_eq!(played, board);
    }

    #[test]
    fn en_passant_record_round_trips() {
        let board = Board::empty()
            .with_piece(sq("e5"), Piece::moved(PieceKind::Pawn, Color::White))
            .with_piece(sq("d5"), Piece::moved(PieceKind::Pawn, Color::Black));
        let record = build_move_record(&board, sq("e5"), sq("d6"), None, CastlingRights::none(), Some(sq("d6")))
            .expect("pawn stands on e5");
        assert!(record.is_en_passant);
        assert_eq!(record.en_passant_capture_square, Some(sq("d5")));
        assert_eq!(record.captured, Some(Piece::moved(PieceKind::Pawn, Color::Black)));

        let mut played = board;
        apply_record(&mut played, &record);
        assert!(played.is_empty(sq("d5")));
        assert!(played.is_empty(sq("e5")));
        assert!(played.piece_at(sq("d6")).is_some());

        unapply_record(&mut played, &record);
        assert_eq!(played, board);
    }

    #[test]
    fn promotion_record_places_the_new_piece() {
        let board = Board::empty()
            .with_piece(sq("e7"), Piece::moved(PieceKind::Pawn, Color::White))
            .with_piece(sq("d8"), Piece::new(PieceKind::Rook, Color::Black));
        let record = build_move_record(&board, sq("e7"), sq("d8"), Some(PieceKind::Knight), CastlingRights::all(), None)
            .expect("pawn stands on e7");

        let mut played = board;
        apply_record(&mut played, &record);
        assert_eq!(played.piece_at(sq("d8")), Some(Piece::moved(PieceKind::Knight, Color::White)));

        unapply_record(&mut played, &record);
        assert_eq!(played, board);
    }
}
