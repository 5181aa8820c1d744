//! Board representation for Nine Men's Morris

pub mod moves;
pub mod state;
pub mod topology;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Re-exports
pub use moves::{Move, ParseMoveError};
pub use state::{GameState, PositionKey};
pub use topology::{Ring, ADJ, MILLS};

/// Number of points on the board
pub const NUM_POINTS: usize = 24;
/// Pieces each side places during the placement phase
pub const PIECES_PER_SIDE: u8 = 9;
/// Total placements that end the placement phase
pub const TOTAL_PLACEMENTS: u8 = PIECES_PER_SIDE * 2;
/// A side with exactly this many pieces may fly
pub const FLYING_COUNT: u32 = 3;

/// The two players.
///
/// Codes match the cell encoding: 0 is an empty point, 1 the human, 2 the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Numeric cell code (1 or 2)
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Side::Human => 1,
            Side::Computer => 2,
        }
    }

    /// Index into per-side arrays (0 or 1)
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.code() as usize - 1
    }

    pub fn from_code(code: u8) -> Option<Side> {
        match code {
            1 => Some(Side::Human),
            2 => Some(Side::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => f.write_str("Human"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Game phase. Flying is not a phase: it is decided per side at move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Placement,
    Movement,
}

/// A point on the board, `0..24`.
///
/// Displayed 1-based as `P1`..`P24`, the notation used in move logs.
///
/// The field is public for terse literals; keeping it below [`NUM_POINTS`]
/// is the caller's job. State accessors index with it directly and panic on
/// anything larger. Use [`Point::checked`] or `FromStr` for untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point(pub u8);

impl Point {
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < NUM_POINTS);
        Self(index as u8)
    }

    /// Point for `index`, or `None` when it is off the board
    #[inline]
    pub fn checked(index: usize) -> Option<Self> {
        (index < NUM_POINTS).then(|| Self(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 points in ascending order
    pub fn all() -> impl Iterator<Item = Point> {
        (0..NUM_POINTS as u8).map(Point)
    }

    /// Neighbours along board lines, ascending
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        ADJ[self.index()].iter().map(|&p| Point(p))
    }

    /// Ring this point lies on
    #[inline]
    pub fn ring(self) -> Ring {
        topology::RING_OF[self.index()]
    }

    /// Number of neighbours (2, 3 or 4)
    #[inline]
    pub fn centrality(self) -> usize {
        ADJ[self.index()].len()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Error parsing a point label such as `P7`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePointError {
    #[error("point label must look like P1..P24, got {0:?}")]
    Malformed(String),
    #[error("point P{0} is off the board")]
    OutOfRange(u32),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('P')
            .or_else(|| trimmed.strip_prefix('p'))
            .ok_or_else(|| ParsePointError::Malformed(trimmed.to_string()))?;
        let label: u32 = digits
            .parse()
            .map_err(|_| ParsePointError::Malformed(trimmed.to_string()))?;
        label
            .checked_sub(1)
            .and_then(|index| Point::checked(index as usize))
            .ok_or(ParsePointError::OutOfRange(label))
    }
}
