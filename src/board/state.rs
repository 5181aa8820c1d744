//! Game state: occupancy, placement counters and phase

use super::{Move, Phase, Point, Ring, Side, NUM_POINTS, TOTAL_PLACEMENTS};
use std::fmt;

/// Full position of a game.
///
/// A handful of bytes; search code clones it freely instead of undoing moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    cells: [Option<Side>; NUM_POINTS],
    /// Pieces ever placed, indexed by `Side::index`
    placed: [u8; 2],
    phase: Phase,
}

/// Occupancy-only key: 24 ASCII digits over `{'0','1','2'}`.
///
/// Does not record phase, counters or side to move, so distinct game
/// states with the same occupancy share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u8; NUM_POINTS]);

impl PositionKey {
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_POINTS],
            placed: [0; 2],
            phase: Phase::Placement,
        }
    }

    /// Piece on a point
    #[inline]
    pub fn get(&self, point: Point) -> Option<Side> {
        self.cells[point.index()]
    }

    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        self.cells[point.index()].is_none()
    }

    #[inline]
    pub fn is_owned_by(&self, point: Point, side: Side) -> bool {
        self.cells[point.index()] == Some(side)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pieces `side` has placed so far
    #[inline]
    pub fn placed(&self, side: Side) -> u8 {
        self.placed[side.index()]
    }

    /// Pieces `side` currently has on the board
    #[inline]
    pub fn count_on_board(&self, side: Side) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(side)).count() as u32
    }

    /// Pieces of `side` removed by the opponent so far
    #[inline]
    pub fn captures_suffered(&self, side: Side) -> u32 {
        u32::from(self.placed(side)).saturating_sub(self.count_on_board(side))
    }

    /// Pieces of `side` on the given ring
    pub fn count_in_ring(&self, side: Side, ring: Ring) -> u32 {
        ring.points()
            .iter()
            .filter(|&&p| self.cells[p as usize] == Some(side))
            .count() as u32
    }

    /// Points owned by `side`, ascending
    pub fn points_of(&self, side: Side) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(move |&p| self.is_owned_by(p, side))
    }

    /// Empty points, ascending
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(move |&p| self.is_empty(p))
    }

    /// Apply a legal move for `side`, including its capture if any.
    ///
    /// The move must come from `legal_moves` and the capture from
    /// `capture_candidates`; anything else is a caller bug.
    pub fn apply_move(&mut self, mv: Move, side: Side) {
        debug_assert!(self.is_empty(mv.to), "{mv} lands on an occupied point");

        match mv.from {
            Some(from) => {
                debug_assert!(self.phase == Phase::Movement, "{mv} slides during placement");
                debug_assert!(self.is_owned_by(from, side), "{mv} moves a piece {side} does not own");
                self.cells[from.index()] = None;
            }
            None => {
                debug_assert!(self.phase == Phase::Placement, "{mv} places during movement");
                self.placed[side.index()] = self.placed[side.index()].saturating_add(1);
            }
        }
        self.cells[mv.to.index()] = Some(side);

        if let Some(removed) = mv.removed {
            debug_assert!(
                self.is_owned_by(removed, side.opponent()),
                "{mv} removes a point without an opponent piece"
            );
            self.cells[removed.index()] = None;
        }

        self.update_phase();
    }

    /// Put a piece on a point without touching counters (position setup)
    #[inline]
    pub fn place_piece(&mut self, point: Point, side: Side) {
        self.cells[point.index()] = Some(side);
    }

    /// Clear a point (captures and position setup)
    #[inline]
    pub fn remove_piece(&mut self, point: Point) {
        self.cells[point.index()] = None;
    }

    /// Set a placement counter (position setup). The phase follows the
    /// counters but never returns to placement once movement began.
    pub fn set_placed(&mut self, side: Side, count: u8) {
        self.placed[side.index()] = count;
        self.update_phase();
    }

    /// Encode occupancy as the cache key
    pub fn position_key(&self) -> PositionKey {
        let mut key = [b'0'; NUM_POINTS];
        for (k, cell) in key.iter_mut().zip(self.cells.iter()) {
            if let Some(side) = cell {
                *k = b'0' + side.code();
            }
        }
        PositionKey(key)
    }

    fn update_phase(&mut self) {
        let total = u16::from(self.placed[0]) + u16::from(self.placed[1]);
        if total >= u16::from(TOTAL_PLACEMENTS) {
            self.phase = Phase::Movement;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
