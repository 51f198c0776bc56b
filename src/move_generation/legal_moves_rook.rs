//! Rook destinations.
//!
//! Orthogonal rays stopping at the first blocker; captures included.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{cast_rays, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    cast_rays(board, from, color, &ROOK_DIRECTIONS, out);
}
