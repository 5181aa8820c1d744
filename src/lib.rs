//! Nine Men's Morris rules engine and computer opponent
//!
//! Two players, human and computer, alternate turns on a board of 24 points:
//! - Placement: each side drops 9 pieces
//! - Movement: pieces slide along board lines
//! - Flying: a side down to 3 pieces may move to any empty point
//! - A new mill (three in a line) removes one opposing piece
//! - A side with fewer than 3 pieces, or no legal move, loses
//!
//! # Architecture
//!
//! - [`board`]: Topology tables, game state and moves
//! - [`rules`]: Move generation, mills, captures and game end
//! - [`eval`]: Heuristic primitives and the position evaluator
//! - [`search`]: Greedy, divide-and-conquer and lookahead strategies
//! - [`engine`]: Computer player wrapping a strategy
//! - [`game`]: Turn-by-turn driver
//!
//! # Quick Start
//!
//! ```
//! use morris::{Game, Move, MorrisEngine, Point};
//!
//! let mut game = Game::new();
//! let mut engine = MorrisEngine::new();
//!
//! // Human opens on P1, the computer answers
//! game.play_human(Move::placement(Point(0))).unwrap();
//! if let Some(mv) = game.engine_turn(&mut engine) {
//!     println!("Computer plays {mv}");
//! }
//! assert_eq!(game.history().len(), 2);
//! ```
//!
//! # Strategies
//!
//! Selected by name (`"Greedy"`, `"Divide & Conquer"`, `"DP"`):
//! 1. Greedy: one-ply scoring against the strongest single reply
//! 2. Divide & Conquer: rank moves per ring, merge the rankings
//! 3. DP: placement priorities, then a cached two-ply search

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{GameState, Move, Phase, Point, Side, NUM_POINTS};
pub use config::{CapturePolicy, EngineConfig};
pub use engine::{MorrisEngine, MoveResult};
pub use game::{Game, Turn};
pub use rules::{EndReason, GameEnd, RuleError};
pub use search::{MoveStrategy, StrategyKind};
