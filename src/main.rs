//! Terminal driver: plays a game between any mix of humans and engines.
//!
//! Run with:
//! `cargo run --release -- --white human --black negamax --depth 3`
//! `RUST_LOG=sable_chess=debug cargo run --release -- --white negamax --black lookahead --max-plies 40`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sable_chess::engines::engine_random::RandomEngine;
use sable_chess::engines::engine_search::{SearchEngine, SearchStrategy};
use sable_chess::engines::engine_trait::Engine;
use sable_chess::game_state::game_state::GameState;
use sable_chess::moves::chess_move::Move;
use sable_chess::search::board_scoring::format_score;
use sable_chess::search::random_move::find_random_move;
use sable_chess::search::search_config::SearchConfig;
use sable_chess::search::threading::SearchWorker;
use sable_chess::utils::long_algebraic::find_legal_move;
use sable_chess::utils::pgn::{game_result, save_pgn, write_pgn};
use sable_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Lookahead,
    Negamax,
    Minimax,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a negamax search engine", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Negamax)]
    black: PlayerKind,

    /// Search depth in plies for negamax and minimax.
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Seed for reproducible engine play.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies.
    #[arg(long)]
    max_plies: Option<usize>,

    /// Cancel an engine search after this many milliseconds and play a
    /// random move instead.
    #[arg(long)]
    move_time_ms: Option<u64>,

    /// Start from this position instead of the standard one.
    #[arg(long)]
    fen: Option<String>,

    /// Write the finished game here as PGN.
    #[arg(long)]
    pgn: Option<PathBuf>,
}

enum Player {
    Human,
    /// Held in an `Option` while the engine is lent to a search worker.
    Engine(Option<Box<dyn Engine>>),
}

impl Player {
    fn build(kind: PlayerKind, config: SearchConfig) -> Self {
        let engine: Box<dyn Engine> = match kind {
            PlayerKind::Human => return Player::Human,
            PlayerKind::Random => Box::new(RandomEngine::with_config(config)),
            PlayerKind::Lookahead => Box::new(SearchEngine::new(SearchStrategy::Lookahead, config)),
            PlayerKind::Negamax => Box::new(SearchEngine::new(SearchStrategy::Negamax, config)),
            PlayerKind::Minimax => Box::new(SearchEngine::new(SearchStrategy::Minimax, config)),
        };
        Player::Engine(Some(engine))
    }
}

enum Command {
    Play(Move),
    Undo,
    Redo,
    Reset,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut game = match &args.fen {
        Some(fen) => GameState::from_fen(fen).context("could not load --fen position")?,
        None => GameState::new_game(),
    };
    let initial = game.clone();

    let config = SearchConfig::default().with_depth(args.depth);
    let config_for = |offset: u64| match args.seed {
        Some(seed) => config.with_seed(seed.wrapping_add(offset)),
        None => config,
    };
    let mut players = [
        Player::build(args.white, config_for(0)),
        Player::build(args.black, config_for(1)),
    ];

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut plies = 0usize;

    loop {
        let moves = game.get_valid_moves();
        println!("\n{}", render_game_state(&game));

        if game.is_game_over() {
            announce_result(&game);
            break;
        }
        if args.max_plies.is_some_and(|max| plies >= max) {
            println!("Stopping after {plies} plies.");
            break;
        }

        let side = game.side_to_move();
        let mut restarted = false;
        let player = &mut players[side.index()];
        match player {
            Player::Human => match read_command(&mut input, &game, &moves)? {
                Command::Play(mv) => {
                    game.make_move(mv);
                    plies += 1;
                }
                Command::Undo => {
                    game.undo_move(true);
                    plies = plies.saturating_sub(1);
                }
                Command::Redo => {
                    game.redo_move();
                    plies += 1;
                }
                Command::Reset => {
                    game = initial.clone();
                    plies = 0;
                    restarted = true;
                }
                Command::Quit => break,
            },
            Player::Engine(slot) => {
                let engine = slot.take().context("engine was not returned by its worker")?;
                let name = engine.name().to_owned();
                let worker = SearchWorker::spawn(game.clone(), engine);
                let outcome = match args.move_time_ms {
                    Some(ms) => worker.wait_with_budget(Duration::from_millis(ms))?,
                    None => worker.wait()?,
                };
                *slot = Some(outcome.engine);

                let chosen = outcome.output.best_move.or_else(|| find_random_move(&moves));
                let Some(mv) = chosen else {
                    bail!("{name} found no move in a position that is not over");
                };
                match outcome.output.score {
                    Some(score) => println!(
                        "{side} ({name}) plays {mv}  [eval {}, {} nodes, {} ms]",
                        format_score(score),
                        outcome.output.nodes,
                        outcome.elapsed.as_millis()
                    ),
                    None => println!("{side} ({name}) plays {mv}"),
                }
                game.make_move(mv);
                plies += 1;
            }
        }

        if restarted {
            for player in &mut players {
                if let Player::Engine(Some(engine)) = player {
                    engine.new_game();
                }
            }
        }
    }

    if let Some(path) = &args.pgn {
        let _ = game.get_valid_moves();
        let pgn = write_pgn(&game, player_name(args.white), player_name(args.black));
        save_pgn(path, &pgn).with_context(|| format!("could not write {}", path.display()))?;
        println!("Saved game to {}", path.display());
    }

    Ok(())
}

fn read_command(input: &mut impl BufRead, game: &GameState, moves: &[Move]) -> anyhow::Result<Command> {
    loop {
        print!("{} to move (e2e4, moves, undo, redo, reset, quit): ", game.side_to_move());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(Command::Quit),
            "reset" => return Ok(Command::Reset),
            "undo" if game.can_undo() => return Ok(Command::Undo),
            "redo" if game.can_redo() => return Ok(Command::Redo),
            "undo" | "redo" => println!("Nothing to {}.", line.trim()),
            "moves" => {
                let listed: Vec<String> = moves.iter().map(|m| m.long_algebraic()).collect();
                println!("{}", listed.join(" "));
            }
            text => match find_legal_move(moves, text) {
                Ok(mv) => return Ok(Command::Play(mv)),
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn announce_result(game: &GameState) {
    if game.checkmate() {
        let winner = game.side_to_move().opposite();
        println!("Checkmate. {winner} wins ({}).", game_result(game));
    } else if game.stalemate() {
        println!("Stalemate ({}).", game_result(game));
    } else if game.stalemate_by_repeat() {
        println!("Draw by repetition ({}).", game_result(game));
    }
}

fn player_name(kind: PlayerKind) -> &'static str {
    match kind {
        PlayerKind::Human => "Human",
        PlayerKind::Random => "Sable Random",
        PlayerKind::Lookahead => "Sable Lookahead",
        PlayerKind::Negamax => "Sable Negamax",
        PlayerKind::Minimax => "Sable Minimax",
    }
}
