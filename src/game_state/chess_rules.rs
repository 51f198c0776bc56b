//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position, the back
//! rank piece order, and the columns kings and rooks use while castling.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;
/// Column of the queen-side rook corner.
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;
/// Column of the king-side rook corner.
pub const KING_SIDE_ROOK_COL: u8 = 7;

/// Column the queen-side rook lands on after `O-O-O`.
pub const QUEEN_SIDE_ROOK_TARGET_COL: u8 = 3;
/// Column the king-side rook lands on after `O-O`.
pub const KING_SIDE_ROOK_TARGET_COL: u8 = 5;

/// Pieces allowed as the result of a promotion.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Back rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
