//! Static board graph: adjacency, mill lines and rings
//!
//! Points are numbered row by row on the classic 7x7 layout:
//!
//! ```text
//!  0 ----------- 1 ----------- 2
//!  |             |             |
//!  |    3 ------ 4 ------ 5    |
//!  |    |        |        |    |
//!  |    |   6 -- 7 -- 8   |    |
//!  |    |   |         |   |    |
//!  9 - 10 - 11       12 - 13 - 14
//!  |    |   |         |   |    |
//!  |    |  15 - 16 - 17   |    |
//!  |    |        |        |    |
//!  |   18 ------ 19 ----- 20   |
//!  |             |             |
//! 21 ----------- 22 ---------- 23
//! ```
//!
//! All tables are built at compile time and never change.

use super::NUM_POINTS;
use serde::{Deserialize, Serialize};

/// Neighbours of each point, ascending.
pub const ADJ: [&[u8]; NUM_POINTS] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// Number of mill lines
pub const NUM_MILLS: usize = 16;

/// The 16 mill triples. Rows and columns per ring first, then the
/// cross-ring lines through the mid-edges.
pub const MILLS: [[u8; 3]; NUM_MILLS] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [2, 14, 23],
    [5, 13, 20],
    [8, 12, 17],
    [1, 4, 7],
    [16, 19, 22],
    [9, 10, 11],
    [12, 13, 14],
];

/// Concentric ring of eight points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    Outer,
    Middle,
    Inner,
}

impl Ring {
    /// Points on this ring
    #[inline]
    pub fn points(self) -> &'static [u8; 8] {
        match self {
            Ring::Outer => &OUTER_RING,
            Ring::Middle => &MIDDLE_RING,
            Ring::Inner => &INNER_RING,
        }
    }
}

pub const OUTER_RING: [u8; 8] = [0, 1, 2, 14, 23, 22, 21, 9];
pub const MIDDLE_RING: [u8; 8] = [3, 4, 5, 13, 20, 19, 18, 10];
pub const INNER_RING: [u8; 8] = [6, 7, 8, 12, 17, 16, 15, 11];

/// Ring membership per point
pub const RING_OF: [Ring; NUM_POINTS] = build_ring_of();

/// The two mills through each point, as indices into [`MILLS`]
pub const MILLS_THROUGH: [[usize; 2]; NUM_POINTS] = build_mills_through();

/// Column/row of each point on the 7x7 grid, used for rendering and symmetry checks
pub const COORDS: [(u8, u8); NUM_POINTS] = [
    (0, 0),
    (3, 0),
    (6, 0),
    (1, 1),
    (3, 1),
    (5, 1),
    (2, 2),
    (3, 2),
    (4, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (4, 3),
    (5, 3),
    (6, 3),
    (2, 4),
    (3, 4),
    (4, 4),
    (1, 5),
    (3, 5),
    (5, 5),
    (0, 6),
    (3, 6),
    (6, 6),
];

const fn build_ring_of() -> [Ring; NUM_POINTS] {
    let mut rings = [Ring::Outer; NUM_POINTS];
    let mut i = 0;
    while i < 8 {
        rings[MIDDLE_RING[i] as usize] = Ring::Middle;
        rings[INNER_RING[i] as usize] = Ring::Inner;
        i += 1;
    }
    rings
}

const fn build_mills_through() -> [[usize; 2]; NUM_POINTS] {
    let mut through = [[usize::MAX; 2]; NUM_POINTS];
    let mut filled = [0usize; NUM_POINTS];
    let mut m = 0;
    while m < NUM_MILLS {
        let mut k = 0;
        while k < 3 {
            let p = MILLS[m][k] as usize;
            through[p][filled[p]] = m;
            filled[p] += 1;
            k += 1;
        }
        m += 1;
    }
    through
}

/// Look up the point at a grid coordinate, if any
pub fn point_at(col: u8, row: u8) -> Option<usize> {
    COORDS.iter().position(|&c| c == (col, row))
}
