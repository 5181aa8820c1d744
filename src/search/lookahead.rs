//! Shallow lookahead strategy ("DP")
//!
//! Placement uses a fixed priority cascade:
//!
//! 1. complete a mill
//! 2. block a human mill-in-one
//! 3. land on the inner ring
//! 4. land on the middle ring
//! 5. first legal placement
//!
//! Movement searches two plies: each computer move, then the human reply
//! that minimises the evaluation. Mills formed along the way are resolved
//! with the capture that is best for the side that formed them. Leaf
//! evaluations are memoised in a [`PositionCache`] that lives for one call.

use tracing::trace;

use crate::board::{GameState, Move, Phase, Point, Ring, Side};
use crate::eval::evaluate;
use crate::rules::{capture_candidates, forms_mill, legal_moves, mill_threats, move_forms_mill};

use super::{MoveStrategy, PositionCache, SearchResult};

/// Bonus for leaving the human without a legal reply
pub const STALEMATE_BONUS: i32 = 50_000;

/// Placement cascade plus two-ply movement search. Stateless between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpStrategy;

/// Per-call search context
struct Lookahead {
    computer: Side,
    human: Side,
    cache: PositionCache,
    nodes: u64,
}

impl Lookahead {
    fn new(computer: Side, human: Side) -> Self {
        Self {
            computer,
            human,
            cache: PositionCache::new(),
            nodes: 0,
        }
    }

    /// Cached evaluation of `state`
    fn eval(&mut self, state: &GameState) -> i32 {
        let (computer, human) = (self.computer, self.human);
        self.nodes += 1;
        self.cache
            .get_or_insert_with(state.position_key(), || evaluate(state, computer, human))
    }

    /// Resolve a mill `side` just formed with its best capture.
    ///
    /// The computer maximises the evaluation and the human minimises it.
    /// The first candidate wins ties. No candidates: nothing happens.
    fn apply_best_capture(&mut self, state: &mut GameState, side: Side) {
        let maximise = side == self.computer;
        let mut best: Option<(Point, i32)> = None;

        for candidate in capture_candidates(state, side.opponent()) {
            let mut trial = state.clone();
            trial.remove_piece(candidate);
            let score = self.eval(&trial);

            let better = match best {
                None => true,
                Some((_, b)) if maximise => score > b,
                Some((_, b)) => score < b,
            };
            if better {
                best = Some((candidate, score));
            }
        }

        if let Some((point, _)) = best {
            state.remove_piece(point);
        }
    }

    /// Two-ply score of a computer move
    fn score_move(&mut self, state: &GameState, mv: Move) -> i32 {
        let (computer, human) = (self.computer, self.human);

        let mut after = state.clone();
        after.apply_move(mv, computer);
        if forms_mill(&after, computer, mv.to) {
            self.apply_best_capture(&mut after, computer);
        }

        let replies = legal_moves(&after, human);
        if replies.is_empty() {
            return self.eval(&after) + STALEMATE_BONUS;
        }

        let mut worst = i32::MAX;
        for reply in replies {
            let mut leaf = after.clone();
            leaf.apply_move(reply, human);
            if forms_mill(&leaf, human, reply.to) {
                self.apply_best_capture(&mut leaf, human);
            }
            worst = worst.min(self.eval(&leaf));
        }
        worst
    }

    fn search_movement(&mut self, state: &GameState, moves: Vec<Move>) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let score = self.score_move(state, mv);
            trace!(%mv, score, "lookahead candidate");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best
    }
}

/// Pick a placement by the priority cascade
fn choose_placement(state: &GameState, moves: &[Move], computer: Side, human: Side) -> Option<Move> {
    if let Some(&mv) = moves.iter().find(|&&mv| move_forms_mill(state, mv, computer)) {
        return Some(mv);
    }

    if let Some(block) = mill_threats(state, human)
        .into_iter()
        .find_map(|threat| moves.iter().find(|mv| mv.to == threat).copied())
    {
        return Some(block);
    }

    moves
        .iter()
        .find(|mv| mv.to.ring() == Ring::Inner)
        .or_else(|| moves.iter().find(|mv| mv.to.ring() == Ring::Middle))
        .or_else(|| moves.first())
        .copied()
}

impl MoveStrategy for DpStrategy {
    fn search(&mut self, state: &GameState, computer: Side, human: Side) -> SearchResult {
        let moves = legal_moves(state, computer);
        if moves.is_empty() {
            return SearchResult::no_move();
        }

        let mut ctx = Lookahead::new(computer, human);

        let best = match state.phase() {
            Phase::Placement => choose_placement(state, &moves, computer, human).map(|mv| {
                let mut after = state.clone();
                after.apply_move(mv, computer);
                (mv, ctx.eval(&after))
            }),
            Phase::Movement => ctx.search_movement(state, moves),
        };

        let (best_move, score) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };
        SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            cache: Some(ctx.cache.stats()),
        }
    }
}
