//! Heuristic primitives shared by the strategies
//!
//! All functions are pure reads of a state snapshot.

use std::collections::VecDeque;

use crate::board::{GameState, Point, Ring, Side, MILLS, NUM_POINTS};
use crate::rules::legal_moves;

/// Pieces `side` has on the board
#[inline]
pub fn piece_count(state: &GameState, side: Side) -> i32 {
    state.count_on_board(side) as i32
}

/// Number of legal moves for `side`
#[inline]
pub fn mobility(state: &GameState, side: Side) -> i32 {
    legal_moves(state, side).len() as i32
}

/// Mill lines holding exactly two pieces of `side` and one empty point
pub fn two_in_row(state: &GameState, side: Side) -> i32 {
    MILLS
        .iter()
        .filter(|line| {
            let own = line.iter().filter(|&&p| state.is_owned_by(Point(p), side)).count();
            let empty = line.iter().filter(|&&p| state.is_empty(Point(p))).count();
            own == 2 && empty == 1
        })
        .count() as i32
}

/// Open two-in-a-row lines read as mill-in-one threats.
///
/// Counts the same lines as [`two_in_row`]; the evaluator weighs the two
/// readings separately.
#[inline]
pub fn mill_potential(state: &GameState, side: Side) -> i32 {
    two_in_row(state, side)
}

/// Size of the largest group of `side` pieces connected along board lines
pub fn largest_cluster(state: &GameState, side: Side) -> i32 {
    let mut visited = [false; NUM_POINTS];
    let mut largest = 0;

    for start in state.points_of(side) {
        if visited[start.index()] {
            continue;
        }
        largest = largest.max(flood(state, side, start, &mut visited));
    }

    largest
}

/// Breadth-first flood from `start`, returning the component size
fn flood(state: &GameState, side: Side, start: Point, visited: &mut [bool; NUM_POINTS]) -> i32 {
    let mut queue = VecDeque::from([start]);
    visited[start.index()] = true;
    let mut size = 1;

    while let Some(p) = queue.pop_front() {
        for nb in p.neighbors() {
            if !visited[nb.index()] && state.is_owned_by(nb, side) {
                visited[nb.index()] = true;
                size += 1;
                queue.push_back(nb);
            }
        }
    }

    size
}

/// Pieces of `side` on `ring`
#[inline]
pub fn count_in_ring(state: &GameState, side: Side, ring: Ring) -> i32 {
    state.count_in_ring(side, ring) as i32
}

/// Degree of a point in the board graph (2, 3 or 4)
#[inline]
pub fn centrality(pos: Point) -> i32 {
    pos.centrality() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(human: &[u8], computer: &[u8]) -> GameState {
        let mut state = GameState::new();
        for &p in human {
            state.place_piece(Point(p), Side::Human);
        }
        for &p in computer {
            state.place_piece(Point(p), Side::Computer);
        }
        state
    }

    #[test]
    fn test_piece_count() {
        let state = board_with(&[0, 5, 9], &[1]);
        assert_eq!(piece_count(&state, Side::Human), 3);
        assert_eq!(piece_count(&state, Side::Computer), 1);
    }

    #[test]
    fn test_mobility_matches_move_count() {
        let state = board_with(&[0], &[]);
        assert_eq!(mobility(&state, Side::Computer), 23);
    }

    #[test]
    fn test_two_in_row_needs_empty_third() {
        // {0,1,2}: two human + empty -> counts
        // {3,4,5}: two human + computer -> blocked
        let state = board_with(&[0, 1, 3, 4], &[5]);
        assert_eq!(two_in_row(&state, Side::Human), 2); // {0,1,2} and {1,4,7}
        assert_eq!(mill_potential(&state, Side::Human), 2);
        assert_eq!(two_in_row(&state, Side::Computer), 0);
    }

    #[test]
    fn test_full_mill_is_not_two_in_row() {
        let state = board_with(&[0, 1, 2], &[]);
        assert_eq!(two_in_row(&state, Side::Human), 0);
    }

    #[test]
    fn test_largest_cluster() {
        // 0-1-2 connected, 9 hangs off 0, 20 alone
        let state = board_with(&[0, 1, 2, 9, 20], &[]);
        assert_eq!(largest_cluster(&state, Side::Human), 4);
        assert_eq!(largest_cluster(&state, Side::Computer), 0);
    }

    #[test]
    fn test_cluster_blocked_by_opponent() {
        let state = board_with(&[0, 2], &[1]);
        assert_eq!(largest_cluster(&state, Side::Human), 1);
    }

    #[test]
    fn test_count_in_ring_and_centrality() {
        let state = board_with(&[], &[6, 7, 3]);
        assert_eq!(count_in_ring(&state, Side::Computer, Ring::Inner), 2);
        assert_eq!(count_in_ring(&state, Side::Computer, Ring::Middle), 1);
        assert_eq!(centrality(Point(10)), 4);
        assert_eq!(centrality(Point(23)), 2);
    }
}
