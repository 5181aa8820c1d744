//! Move selection strategies for the computer player
//!
//! Contains:
//! - Greedy one-ply scoring with a one-ply look at the opponent's replies
//! - Divide-and-conquer ranking by ring with merge sort
//! - Two-ply lookahead ("DP") with a position cache
//!
//! Every strategy reads the state it is given and works on clones; the
//! caller's state is never mutated.

pub mod cache;
pub mod divide;
pub mod greedy;
pub mod lookahead;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::board::{GameState, Move, Side};

pub use cache::{CacheStats, PositionCache};
pub use divide::DivideAndConquerStrategy;
pub use greedy::GreedyStrategy;
pub use lookahead::DpStrategy;

/// Result of a strategy search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any. Captures are never attached.
    pub best_move: Option<Move>,
    /// Strategy-specific score of the best move
    pub score: i32,
    /// Positions examined
    pub nodes: u64,
    /// Position cache usage, for strategies that keep one
    pub cache: Option<CacheStats>,
}

impl SearchResult {
    /// Result for a position without legal moves
    #[inline]
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
            cache: None,
        }
    }
}

/// A way of choosing the computer's move.
pub trait MoveStrategy {
    /// Search `state` for `computer`'s best move against `human`.
    fn search(&mut self, state: &GameState, computer: Side, human: Side) -> SearchResult;

    /// Best move only
    fn best_move(&mut self, state: &GameState, computer: Side, human: Side) -> Option<Move> {
        self.search(state, computer, human).best_move
    }
}

/// Strategy selector, spelled as in the strategy menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrategyKind {
    #[serde(rename = "Greedy")]
    Greedy,
    #[serde(rename = "Divide & Conquer")]
    DivideAndConquer,
    #[default]
    #[serde(rename = "DP")]
    Dp,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Greedy,
        StrategyKind::DivideAndConquer,
        StrategyKind::Dp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "Greedy",
            StrategyKind::DivideAndConquer => "Divide & Conquer",
            StrategyKind::Dp => "DP",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}, expected \"Greedy\", \"Divide & Conquer\" or \"DP\"")]
pub struct ParseStrategyError(String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s.trim())
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// One of the three strategies, selected at the driver boundary.
pub enum AnyStrategy {
    Greedy(GreedyStrategy),
    DivideAndConquer(DivideAndConquerStrategy),
    Dp(DpStrategy),
}

impl AnyStrategy {
    /// Build a strategy. `seed` pins the greedy tie-break; `None` seeds from the OS.
    pub fn new(kind: StrategyKind, seed: Option<u64>) -> Self {
        match kind {
            StrategyKind::Greedy => AnyStrategy::Greedy(match seed {
                Some(seed) => GreedyStrategy::new(seed),
                None => GreedyStrategy::from_entropy(),
            }),
            StrategyKind::DivideAndConquer => AnyStrategy::DivideAndConquer(DivideAndConquerStrategy),
            StrategyKind::Dp => AnyStrategy::Dp(DpStrategy),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            AnyStrategy::Greedy(_) => StrategyKind::Greedy,
            AnyStrategy::DivideAndConquer(_) => StrategyKind::DivideAndConquer,
            AnyStrategy::Dp(_) => StrategyKind::Dp,
        }
    }
}

impl MoveStrategy for AnyStrategy {
    fn search(&mut self, state: &GameState, computer: Side, human: Side) -> SearchResult {
        match self {
            AnyStrategy::Greedy(s) => s.search(state, computer, human),
            AnyStrategy::DivideAndConquer(s) => s.search(state, computer, human),
            AnyStrategy::Dp(s) => s.search(state, computer, human),
        }
    }
}
