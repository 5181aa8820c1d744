//! Computer player: strategy selection, terminal guard and search stats
//!
//! The engine wraps one of the three strategies behind a single entry point
//! and answers two questions for the driver: which move to play, and which
//! piece to remove after that move formed a mill.
//!
//! # Example
//!
//! ```
//! use morris::{EngineConfig, GameState, MorrisEngine, Side, StrategyKind};
//!
//! let mut engine = MorrisEngine::with_config(
//!     EngineConfig::with_strategy(StrategyKind::Greedy).seeded(42),
//! );
//! let state = GameState::new();
//!
//! let result = engine.get_move_with_stats(&state, Side::Computer);
//! println!("Best move: {:?}", result.best_move);
//! println!("Strategy: {}", result.strategy);
//! println!("Time: {}ms", result.time_ms);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{GameState, Move, Point, Side};
use crate::config::{CapturePolicy, EngineConfig};
use crate::eval::evaluate;
use crate::rules::{capture_candidates, is_terminal};
use crate::search::{AnyStrategy, CacheStats, MoveStrategy, StrategyKind};

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found. `None` when the game is over or no move exists
    pub best_move: Option<Move>,
    /// Strategy-specific score of the move
    pub score: i32,
    /// Strategy that chose the move
    pub strategy: StrategyKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions examined
    pub nodes: u64,
    /// Position cache usage (lookahead only)
    pub cache: Option<CacheStats>,
}

/// Computer player for Nine Men's Morris.
///
/// # Example
///
/// ```
/// use morris::{GameState, Move, MorrisEngine, Point, Side};
///
/// let mut engine = MorrisEngine::new();
/// let mut state = GameState::new();
/// state.apply_move(Move::placement(Point(0)), Side::Human);
///
/// if let Some(mv) = engine.get_move(&state, Side::Computer) {
///     println!("Play {mv}");
/// }
/// ```
pub struct MorrisEngine {
    config: EngineConfig,
    strategy: AnyStrategy,
}

impl MorrisEngine {
    /// Create an engine with the default configuration (lookahead strategy)
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            strategy: AnyStrategy::new(config.strategy, config.seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Switch strategy. A seeded greedy strategy restarts its tie-break sequence.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        self.config.strategy = kind;
        self.strategy = AnyStrategy::new(kind, self.config.seed);
    }

    /// Get the best move for `side`
    pub fn get_move(&mut self, state: &GameState, side: Side) -> Option<Move> {
        self.get_move_with_stats(state, side).best_move
    }

    /// Get the best move for `side` with search statistics.
    ///
    /// The returned move never carries a capture; see [`Self::choose_capture`].
    pub fn get_move_with_stats(&mut self, state: &GameState, side: Side) -> MoveResult {
        let start = Instant::now();
        let kind = self.strategy.kind();

        if let Some(winner) = is_terminal(state, side) {
            debug!(%side, %winner, "position is terminal, no move");
            return MoveResult {
                best_move: None,
                score: 0,
                strategy: kind,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
                cache: None,
            };
        }

        let result = self.strategy.search(state, side, side.opponent());
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(mv) => debug!(
                strategy = %kind,
                %side,
                %mv,
                score = result.score,
                nodes = result.nodes,
                cache = ?result.cache,
                time_ms,
                "move chosen"
            ),
            None => debug!(strategy = %kind, %side, "no legal move"),
        }

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            strategy: kind,
            time_ms,
            nodes: result.nodes,
            cache: result.cache,
        }
    }

    /// Pick the piece `mover` removes after forming a mill in `after`.
    ///
    /// Follows the configured [`CapturePolicy`]. `None` when the opponent
    /// has nothing on the board.
    pub fn choose_capture(&self, after: &GameState, mover: Side) -> Option<Point> {
        let opponent = mover.opponent();
        let candidates = capture_candidates(after, opponent);

        match self.config.capture_policy {
            CapturePolicy::FirstCandidate => candidates.first().copied(),
            CapturePolicy::Evaluated => {
                let mut best: Option<(Point, i32)> = None;
                for candidate in candidates {
                    let mut trial = after.clone();
                    trial.remove_piece(candidate);
                    let score = evaluate(&trial, mover, opponent);
                    if best.map_or(true, |(_, s)| score > s) {
                        best = Some((candidate, score));
                    }
                }
                best.map(|(point, _)| point)
            }
        }
    }
}

impl Default for MorrisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;

    fn state_with(human: &[u8], computer: &[u8], placed: (u8, u8)) -> GameState {
        let mut state = GameState::new();
        for &p in human {
            state.place_piece(Point(p), Side::Human);
        }
        for &p in computer {
            state.place_piece(Point(p), Side::Computer);
        }
        state.set_placed(Side::Human, placed.0);
        state.set_placed(Side::Computer, placed.1);
        state
    }

    #[test]
    fn test_engine_creation() {
        let engine = MorrisEngine::new();
        assert_eq!(engine.strategy(), StrategyKind::Dp);
        assert_eq!(engine.config().capture_policy, CapturePolicy::FirstCandidate);
    }

    #[test]
    fn test_set_strategy() {
        let mut engine = MorrisEngine::new();
        engine.set_strategy(StrategyKind::DivideAndConquer);
        assert_eq!(engine.strategy(), StrategyKind::DivideAndConquer);
        assert_eq!(engine.config().strategy, StrategyKind::DivideAndConquer);
    }

    #[test]
    fn test_terminal_position_has_no_move() {
        // Computer down to two pieces in movement
        let state = state_with(&[0, 1, 2, 9], &[4, 7], (9, 9));
        let result = MorrisEngine::new().get_move_with_stats(&state, Side::Computer);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_every_strategy_returns_legal_move() {
        let state = state_with(&[0, 4, 13], &[7, 10], (3, 2));
        for kind in StrategyKind::ALL {
            let mut engine = MorrisEngine::with_config(EngineConfig::with_strategy(kind).seeded(5));
            let result = engine.get_move_with_stats(&state, Side::Computer);
            let mv = result.best_move.expect("placement has moves");
            assert!(legal_moves(&state, Side::Computer).contains(&mv));
            assert_eq!(result.strategy, kind);
            assert!(mv.removed.is_none());
        }
    }

    #[test]
    fn test_lookahead_reports_cache() {
        let state = state_with(&[0, 2, 21, 23], &[1, 9, 14, 19], (9, 9));
        let result = MorrisEngine::new().get_move_with_stats(&state, Side::Computer);
        assert!(result.cache.is_some());
    }

    #[test]
    fn test_choose_capture_first_candidate() {
        // Human pieces 9 and 13 free, {0,1,2} a mill
        let state = state_with(&[0, 1, 2, 9, 13], &[3, 4, 5], (5, 3));
        let engine = MorrisEngine::new();
        assert_eq!(engine.choose_capture(&state, Side::Computer), Some(Point(9)));
    }

    #[test]
    fn test_choose_capture_evaluated_is_candidate() {
        let state = state_with(&[0, 1, 2, 9, 13], &[3, 4, 5], (5, 3));
        let engine = MorrisEngine::with_config(
            EngineConfig::default().capture_policy(CapturePolicy::Evaluated),
        );
        let pick = engine.choose_capture(&state, Side::Computer).expect("human has pieces");
        assert!(capture_candidates(&state, Side::Human).contains(&pick));
    }

    #[test]
    fn test_choose_capture_empty_opponent() {
        let state = state_with(&[], &[3, 4, 5], (0, 3));
        assert_eq!(MorrisEngine::new().choose_capture(&state, Side::Computer), None);
    }
}
