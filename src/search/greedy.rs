//! Greedy one-ply strategy
//!
//! Scores every computer move by the position it leaves behind, penalised
//! by the strongest single human reply. Captures are not simulated: the
//! ranker rewards forming a mill and the driver picks the capture after.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::board::{GameState, Move, Ring, Side};
use crate::eval::{centrality, count_in_ring, largest_cluster, mobility, two_in_row};
use crate::rules::{forms_mill, legal_moves, mill_threats};

use super::{MoveStrategy, SearchResult};

/// Score weights for greedy move ranking
pub struct GreedyWeight;

impl GreedyWeight {
    pub const FORMS_MILL: i32 = 1000;
    /// Flat bonus when the human had a mill-in-one before the move
    pub const THREAT_PRESENT: i32 = 800;
    pub const MOBILITY: i32 = 15;
    pub const OWN_TWO_IN_ROW: i32 = 60;
    pub const OPP_TWO_IN_ROW: i32 = 80;
    pub const CENTRALITY: i32 = 10;
    pub const OWN_CLUSTER: i32 = 12;
    pub const OPP_CLUSTER: i32 = 14;
    pub const INNER_RING: i32 = 20;
    pub const MIDDLE_RING: i32 = 10;

    // Human reply scoring
    pub const REPLY_MILL: i32 = 600;
    pub const REPLY_TWO_IN_ROW: i32 = 50;
    pub const REPLY_MOBILITY: i32 = 5;
}

/// Exclusive upper bound of the random tie-break
const TIE_BREAK: i32 = 3;

/// Greedy strategy with a seedable tie-break source
pub struct GreedyStrategy {
    rng: ChaCha20Rng,
}

impl GreedyStrategy {
    /// Create with a fixed seed, for reproducible play
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Deterministic part of a move's score, given the state after it
    fn score_move(
        after: &GameState,
        mv: Move,
        computer: Side,
        human: Side,
        threat_present: bool,
        nodes: &mut u64,
    ) -> i32 {
        let mut score = 0;

        if forms_mill(after, computer, mv.to) {
            score += GreedyWeight::FORMS_MILL;
        }
        if threat_present {
            score += GreedyWeight::THREAT_PRESENT;
        }

        score -= worst_opponent_reply(after, human, nodes);

        score += GreedyWeight::MOBILITY * (mobility(after, computer) - mobility(after, human));
        score += GreedyWeight::OWN_TWO_IN_ROW * two_in_row(after, computer)
            - GreedyWeight::OPP_TWO_IN_ROW * two_in_row(after, human);
        score += GreedyWeight::CENTRALITY * centrality(mv.to);
        score += GreedyWeight::OWN_CLUSTER * largest_cluster(after, computer)
            - GreedyWeight::OPP_CLUSTER * largest_cluster(after, human);
        score += GreedyWeight::INNER_RING * count_in_ring(after, computer, Ring::Inner)
            + GreedyWeight::MIDDLE_RING * count_in_ring(after, computer, Ring::Middle);

        score
    }
}

impl MoveStrategy for GreedyStrategy {
    fn search(&mut self, state: &GameState, computer: Side, human: Side) -> SearchResult {
        let moves = legal_moves(state, computer);
        if moves.is_empty() {
            return SearchResult::no_move();
        }

        let threat_present = !mill_threats(state, human).is_empty();
        let mut nodes = 0u64;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let mut after = state.clone();
            after.apply_move(mv, computer);
            nodes += 1;

            let score = Self::score_move(&after, mv, computer, human, threat_present, &mut nodes)
                + self.rng.gen_range(0..TIE_BREAK);
            trace!(%mv, score, "greedy candidate");

            // Strict improvement keeps the first of equal scores
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };
        SearchResult {
            best_move,
            score,
            nodes,
            cache: None,
        }
    }
}

/// Strongest single human reply to `after`, never below zero
fn worst_opponent_reply(after: &GameState, human: Side, nodes: &mut u64) -> i32 {
    let mut worst = 0;
    for reply in legal_moves(after, human) {
        let mut next = after.clone();
        next.apply_move(reply, human);
        *nodes += 1;

        let mut value = GreedyWeight::REPLY_TWO_IN_ROW * two_in_row(&next, human)
            + GreedyWeight::REPLY_MOBILITY * mobility(&next, human);
        if forms_mill(&next, human, reply.to) {
            value += GreedyWeight::REPLY_MILL;
        }
        worst = worst.max(value);
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    fn placement_state(human: &[u8], computer: &[u8]) -> GameState {
        let mut state = GameState::new();
        for &p in human {
            state.place_piece(Point(p), Side::Human);
        }
        for &p in computer {
            state.place_piece(Point(p), Side::Computer);
        }
        state.set_placed(Side::Human, human.len() as u8);
        state.set_placed(Side::Computer, computer.len() as u8);
        state
    }

    #[test]
    fn test_completes_open_mill() {
        let state = placement_state(&[13, 16, 18], &[0, 1]);
        let mut greedy = GreedyStrategy::new(1);
        let result = greedy.search(&state, Side::Computer, Side::Human);
        assert_eq!(result.best_move, Some(Move::placement(Point(2))));
        assert!(result.score > 0);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let state = placement_state(&[4], &[]);
        let first = GreedyStrategy::new(99).best_move(&state, Side::Computer, Side::Human);
        let second = GreedyStrategy::new(99).best_move(&state, Side::Computer, Side::Human);
        assert_eq!(first, second);
    }

    #[test]
    fn test_move_is_legal() {
        let state = placement_state(&[4, 10], &[7]);
        for seed in 0..5 {
            let mv = GreedyStrategy::new(seed).best_move(&state, Side::Computer, Side::Human);
            let mv = mv.expect("placement always has moves");
            assert!(legal_moves(&state, Side::Computer).contains(&mv));
        }
    }

    #[test]
    fn test_blocked_computer_has_no_move() {
        let mut state = placement_state(&[1, 9, 14, 22], &[0, 2, 21, 23]);
        state.set_placed(Side::Human, 9);
        state.set_placed(Side::Computer, 9);
        let result = GreedyStrategy::new(0).search(&state, Side::Computer, Side::Human);
        assert_eq!(result, SearchResult::no_move());
    }

    #[test]
    fn test_state_untouched() {
        let state = placement_state(&[4, 10], &[7]);
        let before = state.clone();
        GreedyStrategy::new(3).search(&state, Side::Computer, Side::Human);
        assert_eq!(state, before);
    }

    #[test]
    fn test_worst_reply_counts_mill() {
        // Human threatens 14 through {12,13,14}
        let state = placement_state(&[12, 13], &[0]);
        let mut nodes = 0;
        let worst = worst_opponent_reply(&state, Side::Human, &mut nodes);
        assert!(worst >= GreedyWeight::REPLY_MILL);
        assert_eq!(nodes, 21);
    }
}
