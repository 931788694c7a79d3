//! Closed enumerations of sides, corners and grid directions.
//!
//! Several queries return fixed-size arrays whose positions carry meaning
//! (`Point::neighbors_around`, `Rect::vertices`, `Rect::edges`). Each enum's
//! `index()` is the position of its entry in those arrays and `ALL` lists the
//! entries in that same order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four sides of a box or of a grid cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Toward growing `y`.
    Top = 0,
    /// Toward growing `x`.
    Right = 1,
    /// Toward shrinking `y`.
    Bottom = 2,
    /// Toward shrinking `x`.
    Left = 3,
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side in arrays ordered by [`Side::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the four corners of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Smallest `x`, largest `y`.
    TopLeft = 0,
    /// Largest `x`, largest `y`.
    TopRight = 1,
    /// Largest `x`, smallest `y`.
    BottomRight = 2,
    /// Smallest `x`, smallest `y`.
    BottomLeft = 3,
}

impl Corner {
    /// All corners, clockwise from the top-left.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Position of this corner in arrays ordered by [`Corner::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the eight grid directions around a cell.
///
/// The four sides come first, then the four diagonals clockwise from the
/// top-left. Callers index `Point::neighbors_around` with this numbering.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    Top = 0,
    /// `(+1, 0)`
    Right = 1,
    /// `(0, -1)`
    Bottom = 2,
    /// `(-1, 0)`
    Left = 3,
    /// `(-1, +1)`
    TopLeft = 4,
    /// `(+1, +1)`
    TopRight = 5,
    /// `(+1, -1)`
    BottomRight = 6,
    /// `(-1, -1)`
    BottomLeft = 7,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
    ];

    /// Position of this direction in arrays ordered by [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit grid step `(dx, dy)` for this direction.
    pub const fn offset(self) -> (f64, f64) {
        match self {
            Direction::Top => (0.0, 1.0),
            Direction::Right => (1.0, 0.0),
            Direction::Bottom => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::TopLeft => (-1.0, 1.0),
            Direction::TopRight => (1.0, 1.0),
            Direction::BottomRight => (1.0, -1.0),
            Direction::BottomLeft => (-1.0, -1.0),
        }
    }
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Direction::Top,
            Side::Right => Direction::Right,
            Side::Bottom => Direction::Bottom,
            Side::Left => Direction::Left,
        }
    }
}
