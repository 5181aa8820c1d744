//! Turn-by-turn game driver
//!
//! [`Game`] owns the live position and the side to move. The human moves
//! first; human moves arrive from outside and are validated, computer moves
//! come from a [`MorrisEngine`] together with the capture it picks.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{GameState, Move, Point, Side};
use crate::engine::MorrisEngine;
use crate::rules::{self, forms_mill, game_end, validate_move, GameEnd, RuleError};

/// One played move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub side: Side,
    #[serde(rename = "move")]
    pub mv: Move,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    to_move: Side,
    history: Vec<Turn>,
    outcome: Option<GameEnd>,
}

impl Game {
    /// Empty board, human to move
    pub fn new() -> Self {
        Self::from_position(GameState::new(), Side::Human)
    }

    /// Resume from an arbitrary position
    pub fn from_position(state: GameState, to_move: Side) -> Self {
        let outcome = game_end(&state, to_move);
        Self {
            state,
            to_move,
            history: Vec::new(),
            outcome,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameEnd> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves for the side to move, without captures
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.state, self.to_move)
    }

    /// Opponent pieces the side to move could currently remove
    pub fn capture_candidates(&self) -> Vec<Point> {
        rules::capture_candidates(&self.state, self.to_move.opponent())
    }

    /// Pieces that may be removed if the side to move plays `mv`.
    ///
    /// `None` when `mv` is illegal or forms no mill. An empty list means a
    /// mill formed but the opponent has nothing to remove.
    pub fn pending_capture(&self, mv: Move) -> Option<Vec<Point>> {
        let bare = mv.without_capture();
        if !self.legal_moves().contains(&bare) {
            return None;
        }
        let mut after = self.state.clone();
        after.apply_move(bare, self.to_move);
        forms_mill(&after, self.to_move, mv.to)
            .then(|| rules::capture_candidates(&after, self.to_move.opponent()))
    }

    /// Play a human move, capture included when it forms a mill.
    ///
    /// Returns the game end if this move finished the game.
    pub fn play_human(&mut self, mv: Move) -> Result<Option<GameEnd>, RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if self.to_move != Side::Human {
            return Err(RuleError::NotYourTurn {
                expected: self.to_move,
            });
        }
        if let Err(err) = validate_move(&self.state, Side::Human, mv) {
            warn!(%mv, %err, "rejected human move");
            return Err(err);
        }

        self.commit(Side::Human, mv);
        Ok(self.outcome)
    }

    /// Let `engine` play for the side to move.
    ///
    /// Returns the move played, capture attached, or `None` if the game is
    /// over or the engine found nothing to play.
    pub fn engine_turn(&mut self, engine: &mut MorrisEngine) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let side = self.to_move;
        let mut mv = engine.get_move(&self.state, side)?;

        let mut after = self.state.clone();
        after.apply_move(mv, side);
        if forms_mill(&after, side, mv.to) {
            if let Some(removed) = engine.choose_capture(&after, side) {
                mv = mv.with_capture(removed);
            }
        }

        self.commit(side, mv);
        Some(mv)
    }

    fn commit(&mut self, side: Side, mv: Move) {
        let milled = {
            let mut after = self.state.clone();
            after.apply_move(mv.without_capture(), side);
            forms_mill(&after, side, mv.to)
        };

        self.state.apply_move(mv, side);
        self.history.push(Turn { side, mv });
        narrate(side, mv, milled);

        self.to_move = side.opponent();
        self.outcome = game_end(&self.state, self.to_move);
        if let Some(end) = self.outcome {
            info!(winner = %end.winner, reason = ?end.reason, turns = self.history.len(), "game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Commentary line for a committed move
fn narrate(side: Side, mv: Move, milled: bool) {
    match mv.from {
        Some(from) => info!("{side} moved {from} -> {}", mv.to),
        None => info!("{side} placed at {}", mv.to),
    }
    match (milled, mv.removed) {
        (true, Some(removed)) => info!("{side} formed a mill and removed {removed}"),
        (true, None) => info!("{side} formed a mill, but nothing could be removed"),
        _ => {}
    }
}
