//! GameState-to-FEN serializer.
//!
//! Move counters are derived from the recorded history, so a position loaded
//! from FEN restarts them at `0 1`.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castle_rights);
    let en_passant = game_state
        .en_passant
        .map_or_else(|| "-".to_owned(), |sq| sq.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock(game_state),
        fullmove_number(game_state)
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.iter().enumerate() {
        let mut empty_count = 0u8;
        for square in rank {
            match square {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastleRights) -> String {
    let mut out = String::new();
    if rights.white_king_side {
        out.push('K');
    }
    if rights.white_queen_side {
        out.push('Q');
    }
    if rights.black_king_side {
        out.push('k');
    }
    if rights.black_queen_side {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Plies since the last capture or pawn move within the recorded history.
fn halfmove_clock(game_state: &GameState) -> usize {
    game_state
        .history
        .iter()
        .rev()
        .take_while(|undo| !undo.mv.is_capture() && undo.mv.piece_moved.kind != PieceKind::Pawn)
        .count()
}

fn fullmove_number(game_state: &GameState) -> usize {
    let plies = game_state.history.len();
    let started_with_black = match game_state.side_to_move {
        Color::White => plies % 2 == 1,
        Color::Black => plies % 2 == 0,
    };
    1 + (plies + usize::from(started_with_black)) / 2
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::find_legal_move;

    #[test]
    fn start_position_serializes_to_standard_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_tracks_moves_and_en_passant() {
        let mut game = GameState::new_game();
        for lan in ["e2e4", "c7c5", "g1f3"] {
            let moves = game.get_valid_moves();
            game.make_move(find_legal_move(&moves, lan).expect("move should be legal"));
        }
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        game.undo_move(false);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
        );
    }

    #[test]
    fn parsed_positions_serialize_back() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&game), fen);
    }
}
