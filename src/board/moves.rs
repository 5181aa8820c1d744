//! Move value type and its text encoding
//!
//! Encoding: `P{to}` for a placement, `P{from}->P{to}` for a slide, each
//! optionally followed by ` x P{removed}` when the move captured.

use super::{ParsePointError, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A move: placement (`from == None`) or slide, with an optional capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Option<Point>,
    pub to: Point,
    pub removed: Option<Point>,
}

impl Move {
    /// Drop a new piece on `to`
    #[inline]
    pub fn placement(to: Point) -> Self {
        Self {
            from: None,
            to,
            removed: None,
        }
    }

    /// Move the piece on `from` to `to`
    #[inline]
    pub fn slide(from: Point, to: Point) -> Self {
        Self {
            from: Some(from),
            to,
            removed: None,
        }
    }

    /// Same move, removing the opponent piece on `removed`
    #[inline]
    #[must_use]
    pub fn with_capture(self, removed: Point) -> Self {
        Self {
            removed: Some(removed),
            ..self
        }
    }

    /// Same move without a capture attached
    #[inline]
    #[must_use]
    pub fn without_capture(self) -> Self {
        Self {
            removed: None,
            ..self
        }
    }

    #[inline]
    pub fn is_placement(&self) -> bool {
        self.from.is_none()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(from) = self.from {
            write!(f, "{from}->")?;
        }
        write!(f, "{}", self.to)?;
        if let Some(removed) = self.removed {
            write!(f, " x {removed}")?;
        }
        Ok(())
    }
}

/// Error parsing a move in log notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("bad point in move: {0}")]
    Point(#[from] ParsePointError),
    #[error("unexpected trailing input {0:?}")]
    Trailing(String),
}

fn is_capture_mark(c: char) -> bool {
    c == 'x' || c == 'X'
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        let (body, capture) = match s.split_once(is_capture_mark) {
            Some((body, capture)) => (body.trim(), Some(capture.trim())),
            None => (s, None),
        };

        let mv = match body.split_once("->") {
            Some((from, to)) => Move::slide(from.parse()?, to.parse()?),
            None => Move::placement(body.parse()?),
        };

        match capture {
            Some(c) if c.contains(is_capture_mark) => Err(ParseMoveError::Trailing(c.to_string())),
            Some(c) => Ok(mv.with_capture(c.parse()?)),
            None => Ok(mv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_placement() {
        assert_eq!(Move::placement(Point(0)).to_string(), "P1");
        assert_eq!(Move::placement(Point(23)).to_string(), "P24");
    }

    #[test]
    fn test_display_slide_with_capture() {
        let mv = Move::slide(Point(3), Point(4)).with_capture(Point(8));
        assert_eq!(mv.to_string(), "P4->P5 x P9");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("P3".parse::<Move>(), Ok(Move::placement(Point(2))));
        assert_eq!("p10 -> p11".parse::<Move>(), Ok(Move::slide(Point(9), Point(10))));
        assert_eq!(
            "P3 x P7".parse::<Move>(),
            Ok(Move::placement(Point(2)).with_capture(Point(6)))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert!(matches!("Q3".parse::<Move>(), Err(ParseMoveError::Point(_))));
        assert!(matches!(
            "P25".parse::<Move>(),
            Err(ParseMoveError::Point(ParsePointError::OutOfRange(25)))
        ));
        assert!(matches!("P1 x P2 x P3".parse::<Move>(), Err(ParseMoveError::Trailing(_))));
    }

    #[test]
    fn test_capture_attach_and_strip() {
        let mv = Move::slide(Point(1), Point(2));
        let cap = mv.with_capture(Point(5));
        assert_eq!(cap.removed, Some(Point(5)));
        assert_eq!(cap.without_capture(), mv);
        assert!(!mv.is_placement());
        assert!(Move::placement(Point(0)).is_placement());
    }
}
