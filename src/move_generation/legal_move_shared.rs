use crate::game_state::chess_types::*;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walk each direction until the edge or the first occupied square. An
/// opponent piece ends the ray and is included; an own piece ends it and
/// is not.
pub fn cast_rays(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Single-step targets that are on the board and not held by `color`.
pub fn step_targets(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if !board.is_own_piece(to, color) {
                out.push(to);
            }
        }
    }
}
