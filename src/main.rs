use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_engine::api::{GameStatus, MoveValidation};
use chess_engine::types::Color;
use clap::{Parser, Subcommand, ValueEnum};
use folio_chess::config::EngineConfig;
use folio_chess::render::render_game;
use folio_chess::session::{Outcome, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio-chess", about = "Play chess against a minimax engine in the terminal")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the engine's opening choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive game on stdin
    Play {
        /// Side played by the engine
        #[arg(long, value_enum, default_value_t = Side::Black)]
        engine_color: Side,

        /// Move validation for typed moves
        #[arg(long, value_enum)]
        validation: Option<Validation>,
    },
    /// Engine plays both sides
    Selfplay {
        #[arg(long, default_value_t = 40)]
        plies: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
    None,
}

impl Side {
    fn color(self) -> Option<Color> {
        match self {
            Side::White => Some(Color::White),
            Side::Black => Some(Color::Black),
            Side::None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Validation {
    PseudoLegal,
    Legal,
}

impl From<Validation> for MoveValidation {
    fn from(value: Validation) -> Self {
        match value {
            Validation::PseudoLegal => MoveValidation::PseudoLegal,
            Validation::Legal => MoveValidation::Legal,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command.unwrap_or(Mode::Play {
        engine_color: Side::Black,
        validation: None,
    }) {
        Mode::Play {
            engine_color,
            validation,
        } => {
            if let Some(validation) = validation {
                config.validation = validation.into();
            }
            play(Session::new(config, engine_color.color()))
        }
        Mode::Selfplay { plies } => selfplay(Session::new(config, None), plies),
    }
}

fn play(mut session: Session) -> anyhow::Result<()> {
    info!("[GAME] Starting interactive game");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", render_game(session.game()));

    loop {
        if session.is_engine_turn() {
            std::thread::sleep(session.config().think_delay());
            match session.engine_turn() {
                Some(mv) => println!("Engine plays {mv}\n{}", render_game(session.game())),
                None => {
                    println!("Game over: {}", session.game().status());
                    return Ok(());
                }
            }
            continue;
        }

        if matches!(
            session.game().status(),
            GameStatus::Checkmate | GameStatus::Stalemate
        ) {
            println!("Game over: {}", session.game().status());
            return Ok(());
        }

        print!("{}> ", session.game().side_to_move());
        stdout.flush().context("failed to flush stdout")?;
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("failed to read from stdin")?;
        if read == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Ok(Outcome::Continue(text)) => println!("{text}"),
            Ok(Outcome::Quit) => return Ok(()),
            Err(err) => println!("{err}"),
        }
    }
}

fn selfplay(mut session: Session, plies: usize) -> anyhow::Result<()> {
    let moves = session.selfplay(plies, |game, mv| {
        println!("{}. {} {}", game.history().len(), mv.piece.color, mv);
    });
    println!("{}", render_game(session.game()));
    info!("[GAME] Self-play finished after {} plies", moves.len());
    Ok(())
}
