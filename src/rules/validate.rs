//! Validation of moves supplied from outside the engine
//!
//! The engine itself only ever applies moves it generated. Moves typed by a
//! player go through [`validate_move`] first so that contract violations
//! surface as errors instead of corrupting the state.

use thiserror::Error;

use crate::board::{GameState, Move, Point, Side};

use super::mill::{capture_candidates, forms_mill};
use super::movegen::legal_moves;

/// Errors for moves that break the rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("the game is over")]
    GameOver,

    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Side },

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("move formed a mill, a piece must be removed")]
    NoCaptureSelectedWhenRequired,

    #[error("move did not form a mill, nothing may be removed")]
    CaptureWhenNotAllowed,

    #[error("{0} cannot be removed")]
    IllegalCapture(Point),
}

/// Check that `mv` (with its capture, if any) is legal for `side`.
pub fn validate_move(state: &GameState, side: Side, mv: Move) -> Result<(), RuleError> {
    let bare = mv.without_capture();
    if !legal_moves(state, side).contains(&bare) {
        return Err(RuleError::IllegalMove(bare));
    }

    let mut after = state.clone();
    after.apply_move(bare, side);

    let formed = forms_mill(&after, side, mv.to);
    let opponent = side.opponent();

    match mv.removed {
        None if formed && !capture_candidates(&after, opponent).is_empty() => {
            Err(RuleError::NoCaptureSelectedWhenRequired)
        }
        None => Ok(()),
        Some(_) if !formed => Err(RuleError::CaptureWhenNotAllowed),
        Some(removed) if !capture_candidates(&after, opponent).contains(&removed) => {
            Err(RuleError::IllegalCapture(removed))
        }
        Some(_) => Ok(()),
    }
}
