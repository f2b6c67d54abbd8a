//! Game session: the controller between a player and the engine
//!
//! A [`Session`] owns the [`Game`], the engine configuration and the seeded
//! random source. It turns one line of input into an action and plays the
//! engine's replies; reading stdin and sleeping for the think delay are left
//! to `main`, so the whole flow is testable with plain strings.

use chess_engine::api::Game;
use chess_engine::types::{Color, Move, Square};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{SessionError, SessionResult};
use crate::render::{render_game, render_moves};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Board,
    Moves,
    New,
    Quit,
}

/// Parse a line such as `e2e4`, `e2 e4`, `board`, `moves`, `new` or `quit`
pub fn parse_command(line: &str) -> SessionResult<Command> {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "board" | "b" => return Ok(Command::Board),
        "moves" | "m" => return Ok(Command::Moves),
        "new" => return Ok(Command::New),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let compact: String = input.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(SessionError::UnknownCommand {
            input: input.to_string(),
        });
    }

    let parse = |name: &str| {
        name.parse::<Square>().map_err(|source| SessionError::BadMoveText {
            text: input.to_string(),
            source,
        })
    };
    Ok(Command::Move {
        from: parse(&compact[..2])?,
        to: parse(&compact[2..])?,
    })
}

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading
    Continue(String),
    Quit,
}

pub struct Session {
    game: Game,
    engine_color: Option<Color>,
    config: EngineConfig,
    rng: SmallRng,
}

impl Session {
    /// `engine_color` is the side the engine plays, or `None` for two humans
    pub fn new(config: EngineConfig, engine_color: Option<Color>) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Session {
            game: Game::new(config.validation),
            engine_color,
            config,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the side to move is played by the engine
    pub fn is_engine_turn(&self) -> bool {
        self.engine_color == Some(self.game.side_to_move())
    }

    /// Handle one line of player input
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] for unreadable input, a move entered on the
    /// engine's turn, or a move the game rejects. The game is unchanged in
    /// every error case.
    pub fn handle_line(&mut self, line: &str) -> SessionResult<Outcome> {
        match parse_command(line)? {
            Command::Quit => Ok(Outcome::Quit),
            Command::Board => Ok(Outcome::Continue(render_game(&self.game))),
            Command::Moves => {
                let moves = self.game.legal_moves();
                Ok(Outcome::Continue(format!(
                    "{} legal moves for {}: {}",
                    moves.len(),
                    self.game.side_to_move(),
                    render_moves(&moves)
                )))
            }
            Command::New => {
                self.game.reset();
                info!("[GAME] New game");
                Ok(Outcome::Continue(render_game(&self.game)))
            }
            Command::Move { from, to } => {
                if self.is_engine_turn() {
                    return Err(SessionError::NotYourTurn {
                        color: self.game.side_to_move(),
                    });
                }
                let mv = self.game.play(from, to).inspect_err(|err| {
                    warn!("[GAME] Rejected move {}{}: {}", from, to, err);
                })?;
                info!("[GAME] {} played {}", mv.piece.color, mv);
                Ok(Outcome::Continue(render_game(&self.game)))
            }
        }
    }

    /// Play the engine's move if it is the engine's turn
    ///
    /// Returns `None` when it is not the engine's turn or the engine has no
    /// legal move.
    pub fn engine_turn(&mut self) -> Option<Move> {
        if !self.is_engine_turn() {
            return None;
        }
        let mv = self.game.engine_move(&self.config.search, &mut self.rng)?;
        info!("[ENGINE] {} played {}", mv.piece.color, mv);
        Some(mv)
    }

    /// Engine against itself for up to `plies` plies
    ///
    /// Stops early when the side to move has no legal move. Returns the moves
    /// played.
    pub fn selfplay(&mut self, plies: usize, mut on_move: impl FnMut(&Game, &Move)) -> Vec<Move> {
        let mut played = Vec::with_capacity(plies);
        for _ in 0..plies {
            let Some(mv) = self.game.engine_move(&self.config.search, &mut self.rng) else {
                info!("[ENGINE] {} has no legal move; stopping", self.game.side_to_move());
                break;
            };
            on_move(&self.game, &mv);
            played.push(mv);
        }
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn seeded(engine_color: Option<Color>) -> Session {
        let config = EngineConfig {
            seed: Some(9),
            think_delay_ms: 0,
            ..EngineConfig::default()
        };
        Session::new(config, engine_color)
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command(" board "), Ok(Command::Board)));
        assert!(matches!(parse_command("MOVES"), Ok(Command::Moves)));
        assert!(matches!(parse_command("q"), Ok(Command::Quit)));
        for text in ["e2e4", "e2 e4", "e2-e4"] {
            assert!(
                matches!(
                    parse_command(text),
                    Ok(Command::Move { from, to }) if from == sq("e2") && to == sq("e4")
                ),
                "{text:?} should parse as a move"
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_command("hello"),
            Err(SessionError::UnknownCommand { .. })
        ));
        assert!(matches!(
            parse_command("e9e4"),
            Err(SessionError::BadMoveText { .. })
        ));
    }

    #[test]
    fn test_human_move_then_engine_reply() {
        let mut session = seeded(Some(Color::Black));
        assert!(!session.is_engine_turn());

        let outcome = session.handle_line("e2e4").unwrap();
        assert!(matches!(outcome, Outcome::Continue(ref text) if text.contains("Black to move")));
        assert!(session.is_engine_turn());

        let reply = session.engine_turn().unwrap();
        assert_eq!(reply.piece.color, Color::Black);
        assert_eq!(session.game().history().len(), 2);
        assert_eq!(session.engine_turn(), None, "engine waits for the human");
    }

    #[test]
    fn test_move_on_engine_turn_is_refused() {
        let mut session = seeded(Some(Color::White));
        assert!(matches!(
            session.handle_line("e2e4"),
            Err(SessionError::NotYourTurn { color: Color::White })
        ));
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_rejected_move_is_reported() {
        let mut session = seeded(None);
        assert!(matches!(
            session.handle_line("e2e5"),
            Err(SessionError::Rejected(_))
        ));
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_moves_and_new_commands() {
        let mut session = seeded(None);
        let Outcome::Continue(text) = session.handle_line("moves").unwrap() else {
            panic!("moves should not quit");
        };
        assert!(text.starts_with("20 legal moves for White"), "{text}");

        session.handle_line("d2d4").unwrap();
        session.handle_line("new").unwrap();
        assert!(session.game().history().is_empty());
        assert_eq!(session.handle_line("quit").unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_selfplay_alternates_colors() {
        let mut session = seeded(None);
        let mut seen = 0;
        let moves = session.selfplay(6, |_, _| seen += 1);
        assert_eq!(moves.len(), 6);
        assert_eq!(seen, 6);
        for (i, mv) in moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(mv.piece.color, expected);
        }
    }
}
