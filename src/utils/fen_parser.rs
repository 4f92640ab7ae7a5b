//! FEN-to-GameState parser.
//!
//! Builds a history-free position from a Forsyth-Edwards Notation string. The
//! halfmove clock and fullmove number are optional and ignored: the engine
//! keeps no move clocks. Positions the move generator cannot handle safely
//! (missing kings, a capturable king, an en-passant target for the wrong
//! side) are rejected.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid move counter: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let white_king_loc = find_single_king(&board, Color::White)?;
    let black_king_loc = find_single_king(&board, Color::Black)?;
    let side_to_move = parse_side_to_move(side_part)?;

    // The side that just moved may not have left its own king attacked.
    let waiting_king = match side_to_move {
        Color::White => black_king_loc,
        Color::Black => white_king_loc,
    };
    if is_square_attacked(&board, waiting_king, side_to_move) {
        return Err(invalid(format!(
            "{} king is in check with {side_to_move} to move",
            side_to_move.opposite()
        )));
    }

    Ok(GameState::from_parts(
        board,
        side_to_move,
        white_king_loc,
        black_king_loc,
        parse_castling_rights(castling_part)?,
        parse_en_passant_square(en_passant_part, side_to_move)?,
    ))
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board: Board = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid(format!("rank {} has too many files", 8 - row)));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

fn find_single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let king = Piece::new(color, PieceKind::King);
    let mut kings = Square::all().filter(|sq| board[sq.row as usize][sq.col as usize] == Some(king));
    match (kings.next(), kings.next()) {
        (Some(square), None) => Ok(square),
        (None, _) => Err(invalid(format!("no {color} king"))),
        (Some(_), Some(_)) => Err(invalid(format!("more than one {color} king"))),
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleRights> {
    let mut rights = CastleRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(format!("invalid castling character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target sits behind a pawn the waiting side just pushed two squares:
/// rank 6 when White is to move, rank 3 when Black is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    if square.row != expected_row {
        return Err(invalid(format!("en-passant square on wrong rank: {en_passant_part}")));
    }
    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(parsed.snapshot(), GameState::new_game().snapshot());
    }

    #[test]
    fn clocks_are_optional() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3").expect("short FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));
        assert_eq!(game.castle_rights(), CastleRights::NONE);
    }

    #[test]
    fn kings_are_located() {
        let game = parse_fen("8/8/8/8/8/2k5/8/6K1 w - - 0 1").expect("FEN should parse");
        assert_eq!(game.white_king_loc(), Square::new(7, 6));
        assert_eq!(game.black_king_loc(), Square::new(5, 2));
    }

    #[test]
    fn rejects_positions_without_exactly_one_king_each() {
        for fen in [
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))), "{fen}");
        }
    }

    #[test]
    fn rejects_malformed_fields() {
        for fen in [
            "",
            "8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w KX - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/8/8/5NP1/4K3 w - f3 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - e6 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4k3/8/8/8/8/8/8/4K2X w - - 0 1",
            "4k3/9/8/8/8/8/8/4K3 w - - 0 1",
        ] {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }

    #[test]
    fn rejects_waiting_side_in_check() {
        for fen in [
            "4k3/8/8/8/8/8/8/4RK2 w - - 0 1",
            "4k3/8/8/8/8/8/3p4/4K3 b - - 0 1",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))), "{fen}");
        }
        // Being in check on one's own move is fine.
        parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("black to move out of check");
    }

    #[test]
    fn legality_query_leaves_parsed_position_intact() {
        let mut game =
            parse_fen("4k3/8/8/8/8/8/5NP1/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.snapshot();
        let moves = game.get_valid_moves();
        assert!(moves.iter().all(|m| !m.is_en_passant));
        assert_eq!(game.snapshot(), before);
        assert_eq!(
            game.board()[6][5],
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }
}
