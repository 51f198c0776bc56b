//! The game-state reducer.
//!
//! `dispatch` is a pure, total function over a closed set of actions. Every
//! call returns a new `GameState`; an action that has no legal effect
//! returns an unchanged copy instead of an error.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{
    apply_record, build_move_record, forward_state, is_promotion_move, unapply_record,
};
use crate::move_generation::legal_move_checks::compute_game_status;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::utils::standard_algebraic::generate_algebraic_notation;

/// Everything a UI can ask of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectSquare(Square),
    MakeMove { from: Square, to: Square },
    RequestPromotion { from: Square, to: Square },
    CompletePromotion(PieceKind),
    CancelPromotion,
    UndoMove,
    RedoMove,
    ResetGame,
    SetValidMoves(Vec<Square>),
    UpdateGameStatus(GameStatus),
}

pub fn dispatch(state: &GameState, action: Action) -> GameState {
    match action {
        Action::SelectSquare(square) => select_square(state, square),
        Action::MakeMove { from, to } => make_move(state, from, to),
        Action::RequestPromotion { from, to } => request_promotion(state, from, to),
        Action::CompletePromotion(kind) => complete_promotion(state, kind),
        Action::CancelPromotion => GameState {
            pending_promotion: None,
            selected_square: None,
            valid_moves: Vec::new(),
            ..state.clone()
        },
        Action::UndoMove => undo_move(state),
        Action::RedoMove => redo_move(state),
        Action::ResetGame => GameState::new_game(),
        Action::SetValidMoves(valid_moves) => GameState {
            valid_moves,
            ..state.clone()
        },
        Action::UpdateGameStatus(game_status) => GameState {
            game_status,
            is_in_check: game_status.is_check(),
            ..state.clone()
        },
    }
}

/// Legal destinations for the piece on `square`, in the position `state`
/// holds.
fn legal_destinations(state: &GameState, square: Square) -> Vec<Square> {
    get_valid_moves(
        &state.board,
        square,
        state.current_player,
        &state.castling_rights,
        state.en_passant_target,
    )
}

fn clear_selection(state: &GameState) -> GameState {
    GameState {
        selected_square: None,
        valid_moves: Vec::new(),
        ..state.clone()
    }
}

fn select_square(state: &GameState, square: Square) -> GameState {
    if state.pending_promotion.is_some() {
        return state.clone();
    }

    if let Some(selected) = state.selected_square {
        if state.valid_moves.contains(&square) {
            return make_move(state, selected, square);
        }
    }

    if state.board.is_own_piece(square, state.current_player) {
        return GameState {
            selected_square: Some(square),
            valid_moves: legal_destinations(state, square),
            ..state.clone()
        };
    }

    clear_selection(state)
}

fn make_move(state: &GameState, from: Square, to: Square) -> GameState {
    if state.pending_promotion.is_some() || !state.board.is_own_piece(from, state.current_player) {
        return state.clone();
    }

    let legal = if state.selected_square == Some(from) {
        state.valid_moves.clone()
    } else {
        legal_destinations(state, from)
    };
    if !legal.contains(&to) {
        return state.clone();
    }

    if is_promotion_move(&state.board, from, to) {
        return GameState {
            pending_promotion: Some(PendingPromotion {
                from,
                to,
                color: state.current_player,
            }),
            selected_square: Some(from),
            valid_moves: legal,
            ..state.clone()
        };
    }

    commit_move(state, from, to, None)
}

fn request_promotion(state: &GameState, from: Square, to: Square) -> GameState {
    if state.pending_promotion.is_some()
        || !state.board.is_own_piece(from, state.current_player)
        || !is_promotion_move(&state.board, from, to)
        || !legal_destinations(state, from).contains(&to)
    {
        return state.clone();
    }

    GameState {
        pending_promotion: Some(PendingPromotion {
            from,
            to,
            color: state.current_player,
        }),
        ..state.clone()
    }
}

fn complete_promotion(state: &GameState, kind: PieceKind) -> GameState {
    match state.pending_promotion {
        Some(pending) if kind.is_promotion_choice() => commit_move(state, pending.from, pending.to, Some(kind)),
        _ => state.clone(),
    }
}

/// Play an already validated move and hand the turn over.
fn commit_move(state: &GameState, from: Square, to: Square, promotion: Option<PieceKind>) -> GameState {
    let Some(mut record) = build_move_record(
        &state.board,
        from,
        to,
        promotion,
        state.castling_rights,
        state.en_passant_target,
    ) else {
        return state.clone();
    };

    let mut board = state.board;
    apply_record(&mut board, &record);
    let (castling_rights, en_passant_target) = forward_state(state.castling_rights, &record);

    let next_player = state.current_player.opposite();
    let game_status = compute_game_status(&board, next_player, &castling_rights, en_passant_target);
    record.notation = generate_algebraic_notation(&state.board, &record, game_status);

    let mut move_history = state.move_history.clone();
    move_history.push(record);

    GameState {
        board,
        current_player: next_player,
        move_history,
        redo_history: Vec::new(),
        game_status,
        is_in_check: game_status.is_check(),
        selected_square: None,
        valid_moves: Vec::new(),
        pending_promotion: None,
        castling_rights,
        en_passant_target,
        initial_halfmove_clock: state.initial_halfmove_clock,
        initial_fullmove_number: state.initial_fullmove_number,
    }
}

fn undo_move(state: &GameState) -> GameState {
    let mut move_history = state.move_history.clone();
    let Some(record) = move_history.pop() else {
        return state.clone();
    };

    let mut board = state.board;
    unapply_record(&mut board, &record);

    let current_player = record.piece.color;
    let castling_rights = record.prev_castling_rights;
    let en_passant_target = record.prev_en_passant_target;
    let game_status = compute_game_status(&board, current_player, &castling_rights, en_passant_target);

    let mut redo_history = state.redo_history.clone();
    redo_history.push(record);

    GameState {
        board,
        current_player,
        move_history,
        redo_history,
        game_status,
        is_in_check: game_status.is_check(),
        selected_square: None,
        valid_moves: Vec::new(),
        pending_promotion: None,
        castling_rights,
        en_passant_target,
        initial_halfmove_clock: state.initial_halfmove_clock,
        initial_fullmove_number: state.initial_fullmove_number,
    }
}

/// Replays the most recently undone move. Rights and the en-passant target
/// are derived from the move itself, exactly as when it was first played.
fn redo_move(state: &GameState) -> GameState {
    let mut redo_history = state.redo_history.clone();
    let Some(record) = redo_history.pop() else {
        return state.clone();
    };

    let mut board = state.board;
    apply_record(&mut board, &record);
    let (castling_rights, en_passant_target) = forward_state(state.castling_rights, &record);

    let current_player = record.piece.color.opposite();
    let game_status = compute_game_status(&board, current_player, &castling_rights, en_passant_target);

    let mut move_history = state.move_history.clone();
    move_history.push(record);

    GameState {
        board,
        current_player,
        move_history,
        redo_history,
        game_status,
        is_in_check: game_status.is_check(),
        selected_square: None,
        valid_moves: Vec::new(),
        pending_promotion: None,
        castling_rights,
        en_passant_target,
        initial_halfmove_clock: state.initial_halfmove_clock,
        initial_fullmove_number: state.initial_fullmove_number,
    }
}
