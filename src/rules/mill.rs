//! Mill detection and capture candidates
//!
//! A mill is any of the 16 lines in [`MILLS`] fully owned by one side.
//! Forming a new mill entitles the mover to remove one opposing piece,
//! preferring pieces that are not themselves part of a mill.

use crate::board::topology::MILLS_THROUGH;
use crate::board::{GameState, Move, Point, Side, MILLS};

use super::movegen::legal_moves;

#[inline]
fn line_owned(state: &GameState, line: &[u8; 3], side: Side) -> bool {
    line.iter().all(|&p| state.is_owned_by(Point(p), side))
}

/// Check if `side` owns a full mill through `pos`.
///
/// Called after the piece has been placed or moved onto `pos`.
#[inline]
pub fn forms_mill(state: &GameState, side: Side, pos: Point) -> bool {
    MILLS_THROUGH[pos.index()]
        .iter()
        .any(|&m| line_owned(state, &MILLS[m], side))
}

/// Check if `side` owns any full mill on the board
pub fn has_any_mill(state: &GameState, side: Side) -> bool {
    MILLS.iter().any(|line| line_owned(state, line, side))
}

/// Number of full mills owned by `side`
pub fn mill_count(state: &GameState, side: Side) -> usize {
    MILLS.iter().filter(|line| line_owned(state, line, side)).count()
}

/// Check if the piece on `pos` belongs to a full mill of `side`
#[inline]
pub fn is_part_of_mill(state: &GameState, pos: Point, side: Side) -> bool {
    state.is_owned_by(pos, side) && forms_mill(state, side, pos)
}

/// Pieces of `opponent` that may be removed, ascending.
///
/// Pieces outside mills are preferred; when every piece stands in a mill,
/// all of them become candidates.
pub fn capture_candidates(state: &GameState, opponent: Side) -> Vec<Point> {
    let free: Vec<Point> = state
        .points_of(opponent)
        .filter(|&p| !forms_mill(state, opponent, p))
        .collect();

    if free.is_empty() {
        state.points_of(opponent).collect()
    } else {
        free
    }
}

/// Landing points where one legal move of `side` would form a new mill.
///
/// Only a mill through the landing point counts. A mill that already stood
/// elsewhere on the board is not a threat, so a side sitting on an old mill
/// does not trigger threat bonuses on every turn.
///
/// Each point appears once, ascending.
pub fn mill_threats(state: &GameState, side: Side) -> Vec<Point> {
    let mut threats: Vec<Point> = Vec::new();
    for mv in legal_moves(state, side) {
        if threats.contains(&mv.to) {
            continue;
        }
        if move_forms_mill(state, mv, side) {
            threats.push(mv.to);
        }
    }
    threats.sort_unstable();
    threats
}

/// Whether playing `mv` for `side` would form a mill at its landing point
#[inline]
pub fn move_forms_mill(state: &GameState, mv: Move, side: Side) -> bool {
    let mut after = state.clone();
    after.apply_move(mv.without_capture(), side);
    forms_mill(&after, side, mv.to)
}
