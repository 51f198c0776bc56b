//! Core value types shared by every layer of the rules engine.
//!
//! Squares are stored as zero-based `(row, col)` pairs where row 0 is rank 8
//! (the top of the grid as a renderer draws it) and col 0 is the a-file.
//! That inversion is used everywhere, so all rank arithmetic goes through
//! the helpers here rather than being repeated at call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// A board coordinate. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from grid coordinates, `None` when off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row < 0 || col < 0 || row >= BOARD_SIZE as i8 || col >= BOARD_SIZE as i8 {
            return None;
        }
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub const fn coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub const fn rank_number(self) -> u8 {
        BOARD_SIZE as u8 - self.row
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::from_coords(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Same row, column taken from `other`.
    #[inline]
    pub const fn with_col_of(self, other: Square) -> Square {
        Square {
            row: self.row,
            col: other.col,
        }
    }

    /// Same row, given column; `None` when `col` is off the board.
    #[inline]
    pub const fn at_col(self, col: u8) -> Option<Square> {
        Square::from_coords(self.row as i8, col as i8)
    }

    /// Square shade as drawn on a standard board (a1 is dark).
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.col + self.rank_number()) % 2 == 0
    }

    /// All 64 squares, rank 8 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square_to_algebraic(square)
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        algebraic_to_square(&value)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step. White moves towards row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns promote on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is stored separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case SAN letter; pawns have none.
    #[inline]
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Lower-case FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A piece on the board. `has_moved` is only changed by move application
/// and undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: true,
        }
    }

    #[inline]
    pub const fn with_has_moved(self, has_moved: bool) -> Self {
        Self { has_moved, ..self }
    }

    /// Unicode chess glyph for text rendering.
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// Castling permissions for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

/// Castling permissions for both colors. Only ever cleared while playing
/// forward; undo restores the snapshot stored on the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    pub const fn all() -> Self {
        let side = SideRights {
            king_side: true,
            queen_side: true,
        };
        Self {
            white: side,
            black: side,
        }
    }

    pub const fn none() -> Self {
        let side = SideRights {
            king_side: false,
            queen_side: false,
        };
        Self {
            white: side,
            black: side,
        }
    }

    #[inline]
    pub const fn for_color(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn for_color_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Outcome classification for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// True for both check and checkmate.
    #[inline]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

/// A pawn move onto the last rank waiting for the promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::{Color, Square};

    #[test]
    fn row_zero_is_rank_eight() {
        let a8 = Square::from_coords(0, 0).expect("a8 is on the board");
        let h1 = Square::from_coords(7, 7).expect("h1 is on the board");
        assert_eq!(a8.to_string(), "a8");
        assert_eq!(h1.to_string(), "h1");
        assert_eq!("e4".parse::<Square>().expect("e4 should parse").coords(), (4, 4));
    }

    #[test]
    fn off_board_coordinates_are_rejected() {
        assert!(Square::from_coords(-1, 4).is_none());
        assert!(Square::from_coords(8, 4).is_none());
        assert!(Square::from_coords(3, 8).is_none());
    }

    #[test]
    fn square_shades_match_a_standard_board() {
        let a1: Square = "a1".parse().expect("a1 should parse");
        let h1: Square = "h1".parse().expect("h1 should parse");
        assert!(!a1.is_light());
        assert!(h1.is_light());
    }

    #[test]
    fn pawn_geometry_per_color() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_start_row(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.home_row(), 0);
    }

    #[test]
    fn squares_serialize_as_tokens() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        let json = serde_json::to_string(&e4).expect("square should serialize");
        assert_eq!(json, "\"e4\"");
        let back: Square = serde_json::from_str(&json).expect("square should deserialize");
        assert_eq!(back, e4);
        assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
    }
}
