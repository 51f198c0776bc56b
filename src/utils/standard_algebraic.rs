//! Standard Algebraic Notation (SAN) generation.
//!
//! Notation is produced from the board as it stood BEFORE the move, since
//! disambiguation asks which other pieces could have reached the same
//! square. The check suffix comes from the status computed after the move
//! (or the promoted piece) is on the board.

use crate::game_state::chess_rules::KING_SIDE_ROOK_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::get_valid_moves;

pub const KING_SIDE_CASTLE: &str = "O-O";
pub const QUEEN_SIDE_CASTLE: &str = "O-O-O";
pub const EN_PASSANT_SUFFIX: &str = " e.p.";

/// SAN for `record` played from `board_before`, resulting in `result_status`
/// for the opponent.
pub fn generate_algebraic_notation(board_before: &Board, record: &MoveRecord, result_status: GameStatus) -> String {
    let mut san = if record.is_castling() {
        castle_notation(record)
    } else {
        match record.piece.kind {
            PieceKind::Pawn => pawn_notation(record),
            PieceKind::King => piece_notation(record, String::new()),
            _ => piece_notation(record, disambiguation(board_before, record)),
        }
    };

    match result_status {
        GameStatus::Checkmate => san.push('#'),
        GameStatus::Check => san.push('+'),
        GameStatus::Active | GameStatus::Stalemate => {}
    }
    san
}

fn castle_notation(record: &MoveRecord) -> String {
    // The king lands beside the corner it castled towards.
    if record.to.col() + 1 == KING_SIDE_ROOK_COL {
        KING_SIDE_CASTLE.to_owned()
    } else {
        QUEEN_SIDE_CASTLE.to_owned()
    }
}

fn pawn_notation(record: &MoveRecord) -> String {
    let mut san = String::with_capacity(10);
    if record.is_capture() || record.is_en_passant {
        san.push(record.from.file_char());
        san.push('x');
    }
    san.push_str(&record.to.to_string());

    if record.is_en_passant {
        san.push_str(EN_PASSANT_SUFFIX);
    }

    if record.to.row() == record.piece.color.promotion_row() {
        let letter = record
            .promotion
            .and_then(PieceKind::san_letter)
            .unwrap_or('Q');
        san.push('=');
        san.push(letter);
    }
    san
}

fn piece_notation(record: &MoveRecord, disambiguator: String) -> String {
    let mut san = String::with_capacity(8);
    if let Some(letter) = record.piece.kind.san_letter() {
        san.push(letter);
    }
    san.push_str(&disambiguator);
    if record.is_capture() {
        san.push('x');
    }
    san.push_str(&record.to.to_string());
    san
}

/// File, rank or full origin square, whichever is the first to single out
/// the mover among same-kind pieces that could legally reach `to`.
fn disambiguation(board: &Board, record: &MoveRecord) -> String {
    let color = record.piece.color;
    let rivals: Vec<Square> = board
        .pieces()
        .filter(|&(square, piece)| {
            square != record.from && piece.kind == record.piece.kind && piece.color == color
        })
        .filter(|&(square, _)| get_valid_moves(board, square, color, &CastlingRights::none(), None).contains(&record.to))
        .map(|(square, _)| square)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let from = record.from;
    if rivals.iter().all(|r| r.col() != from.col()) {
        from.file_char().to_string()
    } else if rivals.iter().all(|r| r.row() != from.row()) {
        from.rank_number().to_string()
    } else {
        from.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::generate_algebraic_notation;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::build_move_record;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    fn san(board: &Board, from: &str, to: &str, promotion: Option<PieceKind>, ep: Option<Square>, status: GameStatus) -> String {
        let record = build_move_record(board, sq(from), sq(to), promotion, CastlingRights::all(), ep)
            .expect("a piece should stand on the origin square");
        generate_algebraic_notation(board, &record, status)
    }

    fn kings(board: Board) -> Board {
        board
            .with_piece(sq("h1"), Piece::moved(PieceKind::King, Color::White))
            .with_piece(sq("h8"), Piece::moved(PieceKind::King, Color::Black))
    }

    #[test]
    fn pawn_pushes_and_captures() {
        let board = Board::initial();
        assert_eq!(san(&board, "e2", "e4", None, None, GameStatus::Active), "e4");

        let board = kings(Board::empty())
            .with_piece(sq("e4"), Piece::moved(PieceKind::Pawn, Color::White))
            .with_piece(sq("d5"), Piece::moved(PieceKind::Pawn, Color::Black));
        assert_eq!(san(&board, "e4", "d5", None, None, GameStatus::Active), "exd5");
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let board = kings(Board::empty())
            .with_piece(sq("e7"), Piece::moved(PieceKind::Pawn, Color::White))
            .with_piece(sq("d8"), Piece::moved(PieceKind::Rook, Color::Black));
        assert_eq!(san(&board, "e7", "e8", None, None, GameStatus::Active), "e8=Q");
        assert_eq!(san(&board, "e7", "e8", Some(PieceKind::Rook), None, GameStatus::Active), "e8=R");
        assert_eq!(san(&board, "e7", "d8", Some(PieceKind::Queen), None, GameStatus::Active), "exd8=Q");
    }

    #[test]
    fn en_passant_is_marked() {
        let board = kings(Board::empty())
            .with_piece(sq("e5"), Piece::moved(PieceKind::Pawn, Color::White))
            .with_piece(sq("d5"), Piece::moved(PieceKind::Pawn, Color::Black));
        assert_eq!(san(&board, "e5", "d6", None, Some(sq("d6")), GameStatus::Active), "exd6 e.p.");
    }

    #[test]
    fn knights_are_disambiguated_by_file() {
        let board = kings(Board::empty())
            .with_piece(sq("b1"), Piece::new(PieceKind::Knight, Color::White))
            .with_piece(sq("d1"), Piece::moved(PieceKind::Knight, Color::White));
        assert_eq!(san(&board, "b1", "c3", None, None, GameStatus::Active), "Nbc3");
        assert_eq!(san(&board, "d1", "c3", None, None, GameStatus::Active), "Ndc3");
        assert_eq!(san(&board, "b1", "a3", None, None, GameStatus::Active), "Na3");
    }

    #[test]
    fn rooks_on_one_file_use_the_rank() {
        let board = kings(Board::empty())
            .with_piece(sq("a1"), Piece::moved(PieceKind::Rook, Color::White))
            .with_piece(sq("a5"), Piece::moved(PieceKind::Rook, Color::White));
        assert_eq!(san(&board, "a1", "a3", None, None, GameStatus::Active), "R1a3");
    }

    #[test]
    fn full_square_when_file_and_rank_both_clash() {
        let board = kings(Board::empty())
            .with_piece(sq("d4"), Piece::moved(PieceKind::Queen, Color::White))
            .with_piece(sq("d6"), Piece::moved(PieceKind::Queen, Color::White))
            .with_piece(sq("f4"), Piece::moved(PieceKind::Queen, Color::White));
        assert_eq!(san(&board, "d4", "e5", None, None, GameStatus::Active), "Qd4e5");
    }

    #[test]
    fn pinned_rival_does_not_force_disambiguation() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::moved(PieceKind::King, Color::White))
            .with_piece(sq("e2"), Piece::moved(PieceKind::Knight, Color::White))
            .with_piece(sq("e8"), Piece::moved(PieceKind::Rook, Color::Black))
            .with_piece(sq("a8"), Piece::moved(PieceKind::King, Color::Black))
            .with_piece(sq("b1"), Piece::moved(PieceKind::Knight, Color::White));
        assert_eq!(san(&board, "b1", "c3", None, None, GameStatus::Active), "Nc3");
    }

    #[test]
    fn castling_and_king_moves() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq("a1"), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq("h1"), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        assert_eq!(san(&board, "e1", "g1", None, None, GameStatus::Active), "O-O");
        assert_eq!(san(&board, "e1", "c1", None, None, GameStatus::Check), "O-O-O+");
        assert_eq!(san(&board, "e1", "f2", None, None, GameStatus::Active), "Kf2");
    }

    #[test]
    fn check_and_mate_suffixes() {
        let board = kings(Board::empty()).with_piece(sq("a1"), Piece::moved(PieceKind::Rook, Color::White));
        assert_eq!(san(&board, "a1", "a8", None, None, GameStatus::Check), "Ra8+");
        assert_eq!(san(&board, "a1", "a8", None, None, GameStatus::Checkmate), "Ra8#");
        assert_eq!(san(&board, "a1", "a7", None, None, GameStatus::Stalemate), "Ra7");
    }
}
