//! Performance test (perft) node counting.
//!
//! Walks the legal move tree on bare boards, without going through the
//! reducer, and counts the leaves. Each promotion counts once per piece
//! choice so totals line up with published perft tables.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_record, build_move_record, forward_state, is_promotion_move};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy)]
struct PerftNode {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl PerftNode {
    fn from_game_state(game_state: &GameState) -> Self {
        Self {
            board: game_state.board,
            side_to_move: game_state.current_player,
            castling_rights: game_state.castling_rights,
            en_passant_target: game_state.en_passant_target,
        }
    }

    /// Every child position, one per legal move and promotion choice.
    fn children(&self) -> Vec<(String, PerftNode)> {
        let mut out = Vec::new();
        for (from, to) in all_legal_moves(
            &self.board,
            self.side_to_move,
            &self.castling_rights,
            self.en_passant_target,
        ) {
            let choices: Vec<Option<PieceKind>> = if is_promotion_move(&self.board, from, to) {
                PROMOTION_CHOICES.iter().copied().map(Some).collect()
            } else {
                vec![None]
            };

            for promotion in choices {
                let Some(record) = build_move_record(
                    &self.board,
                    from,
                    to,
                    promotion,
                    self.castling_rights,
                    self.en_passant_target,
                ) else {
                    continue;
                };

                let mut board = self.board;
                apply_record(&mut board, &record);
                let (castling_rights, en_passant_target) = forward_state(self.castling_rights, &record);

                let label = match promotion {
                    Some(kind) => format!("{from}{to}{}", kind.fen_char()),
                    None => format!("{from}{to}"),
                };
                out.push((
                    label,
                    PerftNode {
                        board,
                        side_to_move: self.side_to_move.opposite(),
                        castling_rights,
                        en_passant_target,
                    },
                ));
            }
        }
        out
    }

    fn count(&self, depth: u8) -> usize {
        if depth == 0 {
            return 1;
        }
        let children = self.children();
        if depth == 1 {
            return children.len();
        }
        children.iter().map(|(_, child)| child.count(depth - 1)).sum()
    }
}

/// Leaf count of the legal move tree `depth` plies deep.
pub fn perft(game_state: &GameState, depth: u8) -> usize {
    PerftNode::from_game_state(game_state).count(depth)
}

/// Per-root-move leaf counts, labelled in coordinate notation (`e2e4`,
/// `e7e8q`). Useful when hunting a generator bug against a reference engine.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    PerftNode::from_game_state(game_state)
        .children()
        .into_iter()
        .map(|(label, child)| (label, child.count(depth - 1)))
        .collect()
}
