//! Divide-and-conquer strategy
//!
//! Candidates are split by the ring of their landing point, each region is
//! scored with a compact evaluator and merge sorted, then the three sorted
//! regions are merged into one ranking whose head is played.

use tracing::trace;

use crate::board::{GameState, Move, Point, Ring, Side};
use crate::eval::mobility;
use crate::rules::{forms_mill, legal_moves, mill_threats};

use super::{MoveStrategy, SearchResult};

/// Compact evaluator weights
pub struct RegionWeight;

impl RegionWeight {
    pub const FORMS_MILL: i32 = 80;
    pub const BLOCKS_THREAT: i32 = 1000;
    /// Applied to every move that ignores a live human threat
    pub const IGNORES_THREAT: i32 = -200;
    pub const MOBILITY: i32 = 4;
    pub const INNER_RING: i32 = 12;
    pub const MIDDLE_RING: i32 = 6;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScoredMove {
    mv: Move,
    score: i32,
}

/// Region-sort-and-merge strategy. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideAndConquerStrategy;

impl DivideAndConquerStrategy {
    fn score_move(
        state: &GameState,
        mv: Move,
        computer: Side,
        human: Side,
        threats: &[Point],
    ) -> i32 {
        let mut after = state.clone();
        after.apply_move(mv, computer);

        let mut score = 0;
        if forms_mill(&after, computer, mv.to) {
            score += RegionWeight::FORMS_MILL;
        }
        if !threats.is_empty() {
            score += if threats.contains(&mv.to) {
                RegionWeight::BLOCKS_THREAT
            } else {
                RegionWeight::IGNORES_THREAT
            };
        }
        score += RegionWeight::MOBILITY * (mobility(&after, computer) - mobility(&after, human));
        score += match mv.to.ring() {
            Ring::Inner => RegionWeight::INNER_RING,
            Ring::Middle => RegionWeight::MIDDLE_RING,
            Ring::Outer => 0,
        };
        score
    }
}

impl MoveStrategy for DivideAndConquerStrategy {
    fn search(&mut self, state: &GameState, computer: Side, human: Side) -> SearchResult {
        let moves = legal_moves(state, computer);
        if moves.is_empty() {
            return SearchResult::no_move();
        }
        let nodes = moves.len() as u64;
        let threats = mill_threats(state, human);

        // Divide
        let mut regions: [Vec<ScoredMove>; 3] = Default::default();
        for mv in moves {
            let score = Self::score_move(state, mv, computer, human, &threats);
            trace!(%mv, score, ring = ?mv.to.ring(), "region candidate");
            let slot = match mv.to.ring() {
                Ring::Outer => 0,
                Ring::Middle => 1,
                Ring::Inner => 2,
            };
            regions[slot].push(ScoredMove { mv, score });
        }

        // Conquer
        let [outer, middle, inner] = regions.map(|region| merge_sort(&region));

        // Combine
        let ranked = merge(&merge(&outer, &middle), &inner);

        match ranked.first() {
            Some(head) => SearchResult {
                best_move: Some(head.mv),
                score: head.score,
                nodes,
                cache: None,
            },
            None => SearchResult::no_move(),
        }
    }
}

/// Stable merge sort, descending by score
fn merge_sort(moves: &[ScoredMove]) -> Vec<ScoredMove> {
    if moves.len() <= 1 {
        return moves.to_vec();
    }
    let (left, right) = moves.split_at(moves.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merge two descending runs; ties go to `left`
fn merge(left: &[ScoredMove], right: &[ScoredMove]) -> Vec<ScoredMove> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i].score >= right[j].score {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
