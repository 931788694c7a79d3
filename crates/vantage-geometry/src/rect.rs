//! Axis-aligned rectangles.

use core::fmt;
use libm::round;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line::Line;
use crate::point::Point;
use crate::side::{Corner, Side};

/// An axis-aligned box spanning `[xf, xt]` by `[yf, yt]`.
///
/// Only [`Rect::new`] guarantees `xf <= xt` and `yf <= yt`; containment and
/// intersection queries assume it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Lower `x` bound.
    pub xf: f64,
    /// Upper `x` bound.
    pub xt: f64,
    /// Lower `y` bound.
    pub yf: f64,
    /// Upper `y` bound.
    pub yt: f64,
}

impl Rect {
    /// Construct a rectangle, swapping bounds given in the wrong order.
    pub fn new(xf: f64, xt: f64, yf: f64, yt: f64) -> Self {
        Rect {
            xf: xf.min(xt),
            xt: xf.max(xt),
            yf: yf.min(yt),
            yt: yf.max(yt),
        }
    }

    /// Exact equality of all four bounds.
    pub fn is_same(&self, other: &Rect) -> bool {
        self == other
    }

    /// Extent along `x`.
    pub fn width(&self) -> f64 {
        self.xt - self.xf
    }

    /// Extent along `y`.
    pub fn height(&self) -> f64 {
        self.yt - self.yf
    }

    /// Width times height.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The grid-rounded middle point.
    pub fn center(&self) -> Point {
        Point::new(
            round(self.xf + self.width() / 2.0),
            round(self.yf + self.height() / 2.0),
        )
    }

    /// Whether `p` lies inside, bounds included.
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.xf && p.x <= self.xt && p.y >= self.yf && p.y <= self.yt
    }

    /// Whether `other` lies entirely inside, shared bounds included.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.xf <= other.xf && self.xt >= other.xt && self.yf <= other.yf && self.yt >= other.yt
    }

    /// Whether the two boxes share at least one point; touching edges count.
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        !(other.xf > self.xt || other.xt < self.xf || other.yf > self.yt || other.yt < self.yf)
    }

    /// The overlapping box of two rectangles.
    ///
    /// Returns `None` when they are apart, and also when they only share an edge
    /// or a corner, even though [`Rect::intersects_rect`] reports those as touching.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects_rect(other) {
            return None;
        }

        let overlap = Rect {
            xf: self.xf.max(other.xf),
            xt: self.xt.min(other.xt),
            yf: self.yf.max(other.yf),
            yt: self.yt.min(other.yt),
        };
        if overlap.width() == 0.0 || overlap.height() == 0.0 {
            return None;
        }
        Some(overlap)
    }

    /// The corner point at `corner`.
    pub fn vertex(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point { x: self.xf, y: self.yt },
            Corner::TopRight => Point { x: self.xt, y: self.yt },
            Corner::BottomRight => Point { x: self.xt, y: self.yf },
            Corner::BottomLeft => Point { x: self.xf, y: self.yf },
        }
    }

    /// The four corners, indexed by [`Corner::index`].
    pub fn vertices(&self) -> [Point; 4] {
        Corner::ALL.map(|corner| self.vertex(corner))
    }

    /// The edge on `side`, directed clockwise around the box.
    pub fn edge(&self, side: Side) -> Line {
        let (from, to) = match side {
            Side::Top => (Corner::TopLeft, Corner::TopRight),
            Side::Right => (Corner::TopRight, Corner::BottomRight),
            Side::Bottom => (Corner::BottomRight, Corner::BottomLeft),
            Side::Left => (Corner::BottomLeft, Corner::TopLeft),
        };
        Line::new(self.vertex(from), self.vertex(to))
    }

    /// The four edges, indexed by [`Side::index`].
    pub fn edges(&self) -> [Line; 4] {
        Side::ALL.map(|side| self.edge(side))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[X:{:.0}>{:.0},Y:{:.0}>{:.0}]", self.xf, self.xt, self.yf, self.yt)
    }
}
