//! Legal move generation
//!
//! Placement phase: every empty point. Movement phase: every slide of an
//! owned piece to an empty neighbour, or to any empty point while the side
//! is flying. Captures are never attached here.

use crate::board::{GameState, Move, Phase, Side, FLYING_COUNT};

/// Whether `side` may fly (movement phase with exactly three pieces)
#[inline]
pub fn is_flying(state: &GameState, side: Side) -> bool {
    state.phase() == Phase::Movement && state.count_on_board(side) == FLYING_COUNT
}

/// All legal moves for `side`, ordered by `(from, to)` with placements first.
///
/// The order is part of the contract: strategies break ties by taking the
/// first move generated.
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    if state.phase() == Phase::Placement {
        return state.empty_points().map(Move::placement).collect();
    }

    let flying = is_flying(state, side);
    let mut moves = Vec::with_capacity(if flying { 3 * 21 } else { 32 });

    for from in state.points_of(side) {
        if flying {
            moves.extend(state.empty_points().map(|to| Move::slide(from, to)));
        } else {
            moves.extend(
                from.neighbors()
                    .filter(|&to| state.is_empty(to))
                    .map(|to| Move::slide(from, to)),
            );
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    fn movement_state() -> GameState {
        let mut state = GameState::new();
        state.set_placed(Side::Human, 9);
        state.set_placed(Side::Computer, 9);
        state
    }

    #[test]
    fn test_empty_board_has_24_placements() {
        let moves = legal_moves(&GameState::new(), Side::Human);
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(Move::is_placement));
        assert_eq!(moves[0], Move::placement(Point(0)));
        assert_eq!(moves[23], Move::placement(Point(23)));
    }

    #[test]
    fn test_placement_skips_occupied() {
        let mut state = GameState::new();
        state.apply_move(Move::placement(Point(4)), Side::Human);
        state.apply_move(Move::placement(Point(7)), Side::Computer);
        let moves = legal_moves(&state, Side::Human);
        assert_eq!(moves.len(), 22);
        assert!(!moves.iter().any(|m| m.to == Point(4) || m.to == Point(7)));
    }

    #[test]
    fn test_slides_follow_adjacency() {
        let mut state = movement_state();
        for p in [4, 9, 16, 20] {
            state.place_piece(Point(p), Side::Human);
        }
        state.place_piece(Point(1), Side::Computer);

        let moves = legal_moves(&state, Side::Human);
        let expected = vec![
            Move::slide(Point(4), Point(3)),
            Move::slide(Point(4), Point(5)),
            Move::slide(Point(4), Point(7)),
            Move::slide(Point(9), Point(0)),
            Move::slide(Point(9), Point(10)),
            Move::slide(Point(9), Point(21)),
            Move::slide(Point(16), Point(15)),
            Move::slide(Point(16), Point(17)),
            Move::slide(Point(16), Point(19)),
            Move::slide(Point(20), Point(13)),
            Move::slide(Point(20), Point(19)),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_flying_with_three_pieces() {
        let mut state = movement_state();
        for p in [21, 22, 23] {
            state.place_piece(Point(p), Side::Human);
        }
        for p in [0, 4, 8, 12] {
            state.place_piece(Point(p), Side::Computer);
        }
        assert!(is_flying(&state, Side::Human));
        assert!(!is_flying(&state, Side::Computer));

        let moves = legal_moves(&state, Side::Human);
        // 17 empty points per piece
        assert_eq!(moves.len(), 3 * 17);
        for from in [21, 22, 23] {
            for to in state.empty_points() {
                assert!(moves.contains(&Move::slide(Point(from), to)));
            }
        }
    }

    #[test]
    fn test_no_flying_during_placement() {
        let mut state = GameState::new();
        for p in [0, 1, 2] {
            state.place_piece(Point(p), Side::Human);
        }
        assert!(!is_flying(&state, Side::Human));
    }

    #[test]
    fn test_blocked_side_has_no_moves() {
        let mut state = movement_state();
        // Computer on the outer corners, every neighbour taken by the human
        for p in [0, 2, 21, 23] {
            state.place_piece(Point(p), Side::Computer);
        }
        for p in [1, 9, 14, 22] {
            state.place_piece(Point(p), Side::Human);
        }
        assert!(legal_moves(&state, Side::Computer).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic_and_sorted() {
        let mut state = movement_state();
        for p in [3, 10, 13, 19] {
            state.place_piece(Point(p), Side::Computer);
        }
        let first = legal_moves(&state, Side::Computer);
        let second = legal_moves(&state.clone(), Side::Computer);
        assert_eq!(first, second);
        let keys: Vec<_> = first.iter().map(|m| (m.from, m.to)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
