use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.current_player {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_fen_char(*piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < cells.len() {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(piece: Piece) -> char {
    let ch = piece.kind.fen_char();
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::with_capacity(4);
    if rights.white.king_side {
        out.push('K');
    }
    if rights.white.queen_side {
        out.push('Q');
    }
    if rights.black.king_side {
        out.push('k');
    }
    if rights.black.queen_side {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
