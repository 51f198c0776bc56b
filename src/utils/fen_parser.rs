//! FEN-to-GameState parser.
//!
//! Builds a playable state from a Forsyth-Edwards Notation string. FEN does
//! not record which pieces have moved, so `has_moved` is inferred: pawns on
//! their starting row and other pieces on their home row count as unmoved,
//! everything else as moved. Castling still needs the matching right from
//! the castling field, and a king or rook off its starting square never
//! castles.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, side_to_move)?;

    let halfmove_clock = match halfmove_part {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid halfmove clock: {text}")))?,
        None => 0,
    };
    let fullmove_number = match fullmove_part {
        Some(text) => text
            .parse::<u16>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| invalid(&format!("invalid fullmove number: {text}")))?,
        None => 1,
    };

    let mut game_state = GameState::from_position(board, side_to_move, castling_rights, en_passant_target);
    game_state.initial_halfmove_clock = halfmove_clock;
    game_state.initial_fullmove_number = fullmove_number;
    Ok(game_state)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}' in board layout")))?;

            let square = Square::from_coords(row as i8, col as i8)
                .ok_or_else(|| invalid("board rank has too many files"))?;
            board.set(square, Some(infer_has_moved(square, kind, color)));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    validate_board(&board)?;
    Ok(board)
}

fn infer_has_moved(square: Square, kind: PieceKind, color: Color) -> Piece {
    let unmoved = match kind {
        PieceKind::Pawn => square.row() == color.pawn_start_row(),
        _ => square.row() == color.home_row(),
    };
    Piece {
        kind,
        color,
        has_moved: !unmoved,
    }
}

fn validate_board(board: &Board) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("{color} must have exactly one king, found {kings}")));
        }
    }

    let last_row = (BOARD_SIZE - 1) as u8;
    if board
        .pieces()
        .any(|(sq, p)| p.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == last_row))
    {
        return Err(invalid("pawns cannot stand on the first or last rank"));
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white.king_side = true,
            'Q' => rights.white.queen_side = true,
            'k' => rights.black.king_side = true,
            'q' => rights.black.queen_side = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target sits behind a pawn that just double-stepped, so it is on
/// rank 6 when white is to move and rank 3 when black is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
    let expected_rank = match side_to_move {
        Color::White => 6,
        Color::Black => 3,
    };
    if square.rank_number() != expected_rank {
        return Err(invalid(&format!(
            "en-passant square {square} is not on rank {expected_rank}"
        )));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    #[test]
    fn starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, GameState::new_game());
    }

    #[test]
    fn has_moved_is_inferred_from_placement() {
        let game_state = parse_fen("r3k2r/p7/8/3p4/8/6R1/1P6/R3K3 b Qkq - 3 20").expect("FEN should parse");
        let board = &game_state.board;
        assert!(!board.piece_at(sq("a7")).expect("pawn on a7").has_moved);
        assert!(board.piece_at(sq("d5")).expect("pawn on d5").has_moved);
        assert!(!board.piece_at(sq("b2")).expect("pawn on b2").has_moved);
        assert!(!board.piece_at(sq("a1")).expect("rook on a1").has_moved);
        assert!(board.piece_at(sq("g3")).expect("rook on g3").has_moved);
        assert!(!board.piece_at(sq("e8")).expect("king on e8").has_moved);
        assert_eq!(game_state.current_player, Color::Black);
        assert_eq!(game_state.initial_halfmove_clock, 3);
        assert_eq!(game_state.initial_fullmove_number, 20);
        assert!(game_state.castling_rights.white.queen_side);
        assert!(!game_state.castling_rights.white.king_side);
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").expect("four-field FEN should parse");
        assert_eq!(game_state.initial_halfmove_clock, 0);
        assert_eq!(game_state.initial_fullmove_number, 1);
    }

    #[test]
    fn status_is_computed_for_the_side_to_move() {
        let game_state = parse_fen("8/8/8/8/8/8/1q6/K1k5 w - - 0 1").expect("FEN should parse");
        assert!(game_state.is_in_check);
        assert_eq!(game_state.game_status, GameStatus::Checkmate);
    }

    #[test]
    fn en_passant_square_is_kept() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").expect("FEN should parse");
        assert_eq!(game_state.en_passant_target, Some(sq("f6")));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let bad = [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - x 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 0",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "4k3/8/8/8/8/8/8/8 w - - 0 1",
            "4k2P/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4KZ2 w - - 0 1",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
