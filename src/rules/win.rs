//! Terminal position detection
//!
//! Only the movement phase can end the game:
//! 1. A side reduced below three pieces loses
//! 2. The side to move without a legal move loses

use serde::{Deserialize, Serialize};

use crate::board::{GameState, Phase, Side, FLYING_COUNT};

use super::movegen::legal_moves;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser has fewer than three pieces
    TooFewPieces,
    /// The loser was to move and had no legal move
    Blocked,
}

/// A finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    pub winner: Side,
    pub reason: EndReason,
}

/// Check whether the game is over with `to_move` about to play.
///
/// Returns the winner, or `None` while the game goes on.
#[inline]
pub fn is_terminal(state: &GameState, to_move: Side) -> Option<Side> {
    game_end(state, to_move).map(|end| end.winner)
}

/// Like [`is_terminal`], also reporting the reason
pub fn game_end(state: &GameState, to_move: Side) -> Option<GameEnd> {
    if state.phase() != Phase::Movement {
        return None;
    }

    for side in [to_move, to_move.opponent()] {
        if state.count_on_board(side) < FLYING_COUNT {
            return Some(GameEnd {
                winner: side.opponent(),
                reason: EndReason::TooFewPieces,
            });
        }
    }

    if legal_moves(state, to_move).is_empty() {
        return Some(GameEnd {
            winner: to_move.opponent(),
            reason: EndReason::Blocked,
        });
    }

    None
}
