//! Crate root module declarations for the Plum Board rules engine.
//!
//! This file exposes the subsystems (board and game state, the reducer and
//! its string-facing controller, move generation and the legality oracle,
//! and notation helpers) so binaries, benches and UI layers can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_controller;
    pub mod game_reducer;
    pub mod game_state;
    pub mod move_record;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod san_line;
    pub mod standard_algebraic;
}
