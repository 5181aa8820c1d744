//! Nine Men's Morris in the terminal
//!
//! - `morris play`: human against the computer over stdin/stdout
//! - `morris selfplay`: two engines play each other and print the transcript

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use morris::board::topology::point_at;
use morris::{
    CapturePolicy, EngineConfig, Game, GameEnd, GameState, Move, MorrisEngine, Point, Side,
    StrategyKind, Turn,
};

#[derive(Debug, Parser)]
#[command(name = "morris", version, about = "Nine Men's Morris against the computer")]
struct Cli {
    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play against the computer. You move first.
    Play {
        /// "Greedy", "Divide & Conquer" or "DP"
        #[arg(long, default_value_t = StrategyKind::Dp)]
        strategy: StrategyKind,
        /// Seed for the greedy tie-break
        #[arg(long)]
        seed: Option<u64>,
        /// "first" or "evaluated"
        #[arg(long, default_value_t = CapturePolicy::FirstCandidate)]
        capture: CapturePolicy,
    },
    /// Let two engines play each other
    Selfplay {
        /// Strategy playing the human side
        #[arg(long, default_value_t = StrategyKind::Greedy)]
        human_strategy: StrategyKind,
        /// Strategy playing the computer side
        #[arg(long, default_value_t = StrategyKind::Dp)]
        computer_strategy: StrategyKind,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = CapturePolicy::FirstCandidate)]
        capture: CapturePolicy,
        /// Stop after this many moves and report the game unfinished
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout stays clean for the board and transcripts
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Command::Play {
            strategy,
            seed,
            capture,
        } => play(EngineConfig {
            strategy,
            seed,
            capture_policy: capture,
        }),
        Command::Selfplay {
            human_strategy,
            computer_strategy,
            seed,
            capture,
            max_turns,
            json,
        } => {
            let human = EngineConfig {
                strategy: human_strategy,
                seed,
                capture_policy: capture,
            };
            let computer = EngineConfig {
                strategy: computer_strategy,
                seed: seed.map(|s| s.wrapping_add(1)),
                capture_policy: capture,
            };
            selfplay(human, computer, max_turns, json)
        }
    }
}

/// 7x7 grid: empty points show their label, pieces show X (human) or O (computer)
fn render(state: &GameState) -> String {
    let mut out = String::new();
    for row in 0..7u8 {
        for col in 0..7u8 {
            let cell = match point_at(col, row).map(Point::new) {
                Some(p) => match state.get(p) {
                    Some(Side::Human) => "X".to_string(),
                    Some(Side::Computer) => "O".to_string(),
                    None => (p.index() + 1).to_string(),
                },
                None => String::new(),
            };
            out.push_str(&format!("{cell:>4}"));
        }
        out.push('\n');
    }
    out
}

/// Pieces left on the board for each side
fn piece_counts(state: &GameState) -> String {
    format!(
        "Your pieces (X): {}   Computer pieces (O): {}",
        state.count_on_board(Side::Human),
        state.count_on_board(Side::Computer)
    )
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("flushing stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("reading stdin")?.trim().to_string())),
        None => Ok(None),
    }
}

/// Read a human move, asking for the capture when it forms a mill
fn read_human_move(
    game: &Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<Move>> {
    loop {
        let Some(input) = prompt(lines, "your move> ")? else {
            return Ok(None);
        };
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if input.eq_ignore_ascii_case("moves") {
            let moves: Vec<String> = game.legal_moves().iter().map(Move::to_string).collect();
            println!("{}", moves.join(", "));
            continue;
        }

        let mv: Move = match input.parse() {
            Ok(mv) => mv,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match game.pending_capture(mv) {
            Some(candidates) if mv.removed.is_none() && !candidates.is_empty() => {
                let labels: Vec<String> = candidates.iter().map(Point::to_string).collect();
                println!("Mill formed! Remove one of: {}", labels.join(" "));
                let Some(choice) = prompt(lines, "remove> ")? else {
                    return Ok(None);
                };
                match choice.parse::<Point>() {
                    Ok(point) => return Ok(Some(mv.with_capture(point))),
                    Err(err) => println!("{err}"),
                }
            }
            _ => return Ok(Some(mv)),
        }
    }
}

fn announce(end: Option<GameEnd>) {
    match end {
        Some(end) => println!("Game over: {} wins ({:?})", end.winner, end.reason),
        None => println!("Game unfinished"),
    }
}

fn play(config: EngineConfig) -> Result<()> {
    info!(strategy = %config.strategy, capture = %config.capture_policy, "starting game");
    let mut engine = MorrisEngine::with_config(config);
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are X and move first. Moves: P3, P4->P5, P1->P2 x P9. 'moves' lists options.");

    while !game.is_over() {
        println!("\n{}", render(game.state()));
        println!("{}", piece_counts(game.state()));
        match game.to_move() {
            Side::Human => {
                let Some(mv) = read_human_move(&game, &mut lines)? else {
                    println!("Bye");
                    return Ok(());
                };
                if let Err(err) = game.play_human(mv) {
                    println!("{err}");
                }
            }
            Side::Computer => match game.engine_turn(&mut engine) {
                Some(mv) => println!("Computer plays {mv}"),
                None => bail!("engine found no move in a live position"),
            },
        }
    }

    println!("\n{}", render(game.state()));
    println!("{}", piece_counts(game.state()));
    announce(game.outcome());
    Ok(())
}

#[derive(Debug, Serialize)]
struct Transcript {
    human_strategy: StrategyKind,
    computer_strategy: StrategyKind,
    seed: Option<u64>,
    turns: Vec<Turn>,
    outcome: Option<GameEnd>,
}

fn selfplay(human: EngineConfig, computer: EngineConfig, max_turns: usize, json: bool) -> Result<()> {
    info!(human = %human.strategy, computer = %computer.strategy, max_turns, "starting selfplay");
    let mut engines = [MorrisEngine::with_config(human), MorrisEngine::with_config(computer)];
    let mut game = Game::new();

    while !game.is_over() && game.history().len() < max_turns {
        let engine = match game.to_move() {
            Side::Human => &mut engines[0],
            Side::Computer => &mut engines[1],
        };
        if game.engine_turn(engine).is_none() {
            break;
        }
    }

    let transcript = Transcript {
        human_strategy: human.strategy,
        computer_strategy: computer.strategy,
        seed: human.seed,
        turns: game.history().to_vec(),
        outcome: game.outcome(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    println!("{} (X) vs {} (O)", human.strategy, computer.strategy);
    for (i, turn) in transcript.turns.iter().enumerate() {
        println!("{:>4}. {:<8} {}", i + 1, turn.side.to_string(), turn.mv);
    }
    println!("\n{}", render(game.state()));
    println!("{}", piece_counts(game.state()));
    announce(transcript.outcome);
    Ok(())
}
