//! SAN line replay tool.
//!
//! Plays a single line of SAN moves from the configured start position and
//! prints the resulting board, FEN and status.
//!
//! Usage:
//! `cargo run --bin replay_san -- "1. e4 e5 2. Nf3 Nc6"`
//!
//! Set `PLUM_BOARD_START_FEN` to start from another position and `RUST_LOG`
//! to control log output.

use std::process::ExitCode;

use plum_board::game_state::game_config::GameConfig;
use plum_board::utils::render_game_state::render_game_state;
use plum_board::utils::san_line::{format_san_line, replay_san_line};
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let line = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let start = match GameConfig::default()
        .with_env_overrides()
        .and_then(|config| config.initial_state())
    {
        Ok(state) => state,
        Err(e) => {
            error!("bad configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(fen = %start.get_fen(), "starting position");

    let game = match replay_san_line(&start, &line) {
        Ok(game) => game,
        Err(e) => {
            error!("replay failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(plies = game.move_history.len(), "replayed line");

    println!("{}", render_game_state(&game));
    println!("FEN:   {}", game.get_fen());
    println!("Moves: {}", format_san_line(&game.move_history));

    ExitCode::SUCCESS
}
