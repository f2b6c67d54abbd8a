//! Text rendering for the terminal session

use chess_engine::api::{Game, GameStatus};
use chess_engine::types::{Color, Move, Piece};

/// Board diagram followed by the status lines shown after every ply
pub fn render_game(game: &Game) -> String {
    format!(
        "{}\nMove #{} - {} to move{}\nWhite captured: {}\nBlack captured: {}",
        game.board(),
        game.move_number(),
        game.side_to_move(),
        status_suffix(game.status()),
        render_pieces(game.captured_by(Color::White)),
        render_pieces(game.captured_by(Color::Black)),
    )
}

fn status_suffix(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "",
        GameStatus::Check => " (check)",
        GameStatus::Checkmate => " (checkmate)",
        GameStatus::Stalemate => " (stalemate)",
    }
}

pub fn render_pieces(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "none yet".to_string();
    }
    pieces.iter().map(Piece::to_string).collect::<Vec<_>>().join(" ")
}

/// Moves in `e2e4` form, space separated
pub fn render_moves(moves: &[Move]) -> String {
    moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}
