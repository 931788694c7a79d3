//! Points and free vectors on the plane.
//!
//! A [`Point`] is both an absolute position and a displacement. Coordinates are
//! conventionally snapped to integers by [`Point::new`], which is what makes the
//! exact floating-point comparisons used across the kernel meaningful.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use libm::{fabs, round, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::side::{Direction, Side};

/// A point `(x, y)` on the plane, or the vector from the origin to it.
///
/// Equality is exact. Build values with [`Point::new`] to get grid-rounded
/// coordinates; a struct literal keeps the coordinates as given.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing toward [`Side::Top`].
    pub y: f64,
}

/// Signed distance from `x` to the nearer of the bounds `0` and `bound`.
///
/// Negative when `x` lies outside `[0, bound]`.
pub fn distance_to_bound(x: f64, bound: f64) -> f64 {
    x.min(bound - x)
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Construct a grid-rounded point.
    ///
    /// Both coordinates are rounded to the nearest integer, halves away from zero.
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            x: round(x),
            y: round(y),
        }
    }

    /// Exact equality with `other`, same as `==`.
    pub fn is_same(&self, other: &Point) -> bool {
        self == other
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        sqrt((*self - *other).square_length())
    }

    /// Manhattan (L1) distance to `other`.
    pub fn distance_manhattan(&self, other: &Point) -> f64 {
        fabs(self.x - other.x) + fabs(self.y - other.y)
    }

    /// Chebyshev (L∞) distance to `other`.
    pub fn distance_chebyshev(&self, other: &Point) -> f64 {
        fabs(self.x - other.x).max(fabs(self.y - other.y))
    }

    /// Squared length of the vector, `x² + y²`.
    pub fn square_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Dot product of two vectors.
    pub fn dot_product(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `self.x * other.y - self.y * other.x`.
    ///
    /// Positive when `other` turns counter-clockwise from `self`, zero when the
    /// two vectors are parallel.
    pub fn cross_product(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Scale the vector down by its own `length`, yielding a unit vector.
    ///
    /// The result is not grid-rounded.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn normalize(&self, length: f64) -> Point {
        match self.try_normalize(length) {
            Ok(unit) => unit,
            Err(e) => panic!("cannot normalize {}: {}", self, e),
        }
    }

    /// Non-panicking form of [`Point::normalize`].
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::ZeroLength)` if `length` is zero.
    pub fn try_normalize(&self, length: f64) -> Result<Point, GeometryError> {
        if length == 0.0 {
            return Err(GeometryError::ZeroLength("normalization length must be non-zero"));
        }
        Ok(Point {
            x: self.x / length,
            y: self.y / length,
        })
    }

    /// Row-major index `y * width + x` of the point in a grid of `width` columns.
    ///
    /// # Panics
    ///
    /// Panics if `x < 0`, `x >= width`, `y < 0` or a coordinate is not finite.
    /// An out-of-grid point here is a bug in the caller, not a recoverable state.
    pub fn index(&self, width: usize) -> usize {
        match self.try_index(width) {
            Ok(index) => index,
            Err(_) => panic!("point {} is out of bound {}", self, width),
        }
    }

    /// Non-panicking form of [`Point::index`].
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::OutOfBounds)` when the point lies outside the grid.
    pub fn try_index(&self, width: usize) -> Result<usize, GeometryError> {
        let w = width as f64;
        // Written as a negated conjunction so NaN coordinates are rejected too.
        if !(self.x >= 0.0 && self.x < w && self.y >= 0.0 && self.y.is_finite()) {
            return Err(GeometryError::OutOfBounds("expected 0 <= x < width and y >= 0"));
        }
        Ok((self.y * w + self.x) as usize)
    }

    /// Whether `from <= x <= to`.
    pub fn is_in_x_range(&self, from: f64, to: f64) -> bool {
        self.x >= from && self.x <= to
    }

    /// Whether `from <= y <= to`.
    pub fn is_in_y_range(&self, from: f64, to: f64) -> bool {
        self.y >= from && self.y <= to
    }

    /// Whether both coordinates lie in `[from, to]`.
    pub fn is_in_range(&self, from: f64, to: f64) -> bool {
        self.is_in_x_range(from, to) && self.is_in_y_range(from, to)
    }

    /// Whether `0 <= x <= width`.
    pub fn is_in_x_bound(&self, width: f64) -> bool {
        self.is_in_x_range(0.0, width)
    }

    /// Whether `0 <= y <= height`.
    pub fn is_in_y_bound(&self, height: f64) -> bool {
        self.is_in_y_range(0.0, height)
    }

    /// Whether the point lies in the field `[0, width] x [0, height]`, bounds included.
    pub fn is_in_bound(&self, width: f64, height: f64) -> bool {
        self.is_in_x_bound(width) && self.is_in_y_bound(height)
    }

    /// Signed distance from `x` to the nearer vertical bound of a field of `width`.
    pub fn distance_to_x_bound(&self, width: f64) -> f64 {
        distance_to_bound(self.x, width)
    }

    /// Signed distance from `y` to the nearer horizontal bound of a field of `height`.
    pub fn distance_to_y_bound(&self, height: f64) -> f64 {
        distance_to_bound(self.y, height)
    }

    /// Mirror image across the vertical middle of a field of `width`.
    pub fn symmetric_x(&self, width: f64) -> Point {
        Point {
            x: width - self.x,
            y: self.y,
        }
    }

    /// Mirror image across the horizontal middle of a field of `height`.
    pub fn symmetric_y(&self, height: f64) -> Point {
        Point {
            x: self.x,
            y: height - self.y,
        }
    }

    /// Mirror image across both middles of a `width` by `height` field.
    pub fn symmetric(&self, width: f64, height: f64) -> Point {
        Point {
            x: width - self.x,
            y: height - self.y,
        }
    }

    /// The adjacent grid cell in `direction`.
    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four side neighbors, indexed by [`Side::index`].
    pub fn neighbors_cross(&self) -> [Point; 4] {
        Side::ALL.map(|side| self.step(side.into()))
    }

    /// The eight surrounding neighbors, indexed by [`Direction::index`].
    pub fn neighbors_around(&self) -> [Point; 8] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point {
            x: self.x * k,
            y: self.y * k,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[X:{:.0},Y:{:.0}]", self.x, self.y)
    }
}
