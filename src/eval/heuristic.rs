//! Position evaluator used by the lookahead strategy
//!
//! Scores a position from the computer's point of view:
//! - Decided positions (a side below three pieces in the movement phase)
//! - Material and mobility
//! - Open two-in-a-row lines
//! - Presence on the middle and inner rings

use crate::board::{GameState, Phase, Ring, Side};

use super::patterns::{count_in_ring, mill_potential, mobility, piece_count, two_in_row};

/// Evaluator weights
pub struct EvalWeight;

impl EvalWeight {
    /// Computer reduced to two pieces
    pub const LOSS: i32 = -100_000;
    /// Human reduced to two pieces
    pub const WIN: i32 = 100_000;

    pub const PIECE: i32 = 120;
    pub const MOBILITY: i32 = 10;
    pub const OWN_POTENTIAL: i32 = 40;
    pub const OPP_POTENTIAL: i32 = 45;
    pub const OWN_TWO_IN_ROW: i32 = 6;
    pub const OPP_TWO_IN_ROW: i32 = 8;
    pub const MIDDLE_RING: i32 = 5;
    pub const INNER_RING: i32 = 8;
}

/// Evaluate `state` for `computer` playing against `human`.
///
/// Positive values favour the computer. The non-terminal part is nearly
/// antisymmetric: swapping the two sides negates everything except the
/// asymmetric threat weights.
#[must_use]
pub fn evaluate(state: &GameState, computer: Side, human: Side) -> i32 {
    let cpu_pieces = piece_count(state, computer);
    let human_pieces = piece_count(state, human);

    if state.phase() == Phase::Movement {
        if cpu_pieces <= 2 {
            return EvalWeight::LOSS;
        }
        if human_pieces <= 2 {
            return EvalWeight::WIN;
        }
    }

    let material = (cpu_pieces - human_pieces) * EvalWeight::PIECE;
    let mobility_score = (mobility(state, computer) - mobility(state, human)) * EvalWeight::MOBILITY;

    let threats = mill_potential(state, computer) * EvalWeight::OWN_POTENTIAL
        - mill_potential(state, human) * EvalWeight::OPP_POTENTIAL
        + two_in_row(state, computer) * EvalWeight::OWN_TWO_IN_ROW
        - two_in_row(state, human) * EvalWeight::OPP_TWO_IN_ROW;

    let rings = ring_presence(state, computer) - ring_presence(state, human);

    material + mobility_score + threats + rings
}

fn ring_presence(state: &GameState, side: Side) -> i32 {
    count_in_ring(state, side, Ring::Middle) * EvalWeight::MIDDLE_RING
        + count_in_ring(state, side, Ring::Inner) * EvalWeight::INNER_RING
}
