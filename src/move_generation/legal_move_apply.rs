//! Reversible in-place move application.
//!
//! `apply_move` performs every board side effect of a move and pushes one
//! `UndoState`; `revert_move` pops it and restores the previous position.
//! Neither touches the redo stack, so speculative moves made while filtering
//! legality or searching leave the player's redo history alone.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let record = UndoState {
        mv,
        prev_castle_rights: game_state.castle_rights,
        prev_en_passant: game_state.en_passant,
    };

    set(&mut game_state.board, mv.start, None);
    let placed = if mv.is_pawn_promotion {
        Piece::new(mv.piece_moved.color, PieceKind::Queen)
    } else {
        mv.piece_moved
    };
    set(&mut game_state.board, mv.end, Some(placed));

    if mv.is_en_passant {
        set(&mut game_state.board, mv.en_passant_capture_square(), None);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = mv.castle_rook_squares();
        let rook = game_state.board[rook_from.row as usize][rook_from.col as usize].take();
        set(&mut game_state.board, rook_to, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        set_king_loc(game_state, mv.piece_moved.color, mv.end);
    }

    game_state.en_passant = if mv.piece_moved.kind == PieceKind::Pawn
        && mv.start.row.abs_diff(mv.end.row) == 2
    {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    };

    update_castle_rights(&mut game_state.castle_rights, &mv);

    game_state.history.push(record);
    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Takes back the last applied move. Returns `None` on an empty history.
pub fn revert_move(game_state: &mut GameState) -> Option<UndoState> {
    let record = game_state.history.pop()?;
    let mv = record.mv;

    set(&mut game_state.board, mv.start, Some(mv.piece_moved));
    if mv.is_en_passant {
        set(&mut game_state.board, mv.end, None);
        set(
            &mut game_state.board,
            mv.en_passant_capture_square(),
            mv.piece_captured,
        );
    } else {
        set(&mut game_state.board, mv.end, mv.piece_captured);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = mv.castle_rook_squares();
        let rook = game_state.board[rook_to.row as usize][rook_to.col as usize].take();
        set(&mut game_state.board, rook_from, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        set_king_loc(game_state, mv.piece_moved.color, mv.start);
    }

    game_state.castle_rights = record.prev_castle_rights;
    game_state.en_passant = record.prev_en_passant;
    game_state.side_to_move = game_state.side_to_move.opposite();

    // No longer known until legal moves are generated again.
    game_state.checkmate = false;
    game_state.stalemate = false;
    game_state.stalemate_by_repeat = false;

    Some(record)
}

#[inline]
fn set(board: &mut Board, square: Square, piece: Option<Piece>) {
    board[square.row as usize][square.col as usize] = piece;
}

#[inline]
fn set_king_loc(game_state: &mut GameState, color: Color, square: Square) {
    match color {
        Color::White => game_state.white_king_loc = square,
        Color::Black => game_state.black_king_loc = square,
    }
}

fn update_castle_rights(rights: &mut CastleRights, mv: &Move) {
    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_all(mv.piece_moved.color),
        PieceKind::Rook => rights.revoke_for_rook_square(mv.start),
        _ => {}
    }

    // Capturing a rook on its home square removes its owner's right.
    if matches!(mv.piece_captured, Some(p) if p.kind == PieceKind::Rook) {
        rights.revoke_for_rook_square(mv.end);
    }
}
