//! Directed lines, segments and unit-time trajectories.
//!
//! A [`Line`] is read three ways depending on the query: as the infinite line
//! through both points, as the bounded segment between them, or as a trajectory
//! where `from` is the position now and `to` the position one time unit later.

use core::f64::consts::PI;
use core::fmt;
use libm::{cos, sin, sqrt};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::rect::Rect;

/// How far an operand extends along its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    /// Unbounded in both directions.
    Line,
    /// Bounded by `from` (parameter 0) and `to` (parameter 1).
    Segment,
}

impl Extent {
    /// Whether the parametric position `t` lies on the operand.
    fn admits(self, t: f64) -> bool {
        match self {
            Extent::Line => true,
            Extent::Segment => (0.0..=1.0).contains(&t),
        }
    }
}

/// A directed line from `from` to `to`.
///
/// A line with `from == to` is stationary: a valid zero-length, zero-velocity state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point, or the current position of a trajectory.
    pub from: Point,
    /// End point, or the position after one time unit.
    pub to: Point,
}

impl Line {
    /// Construct a line from `from` to `to`.
    pub const fn new(from: Point, to: Point) -> Self {
        Line { from, to }
    }

    /// Exact equality of both endpoints, direction included.
    pub fn is_same(&self, other: &Line) -> bool {
        self == other
    }

    /// Direction vector `to - from`; the velocity of a trajectory.
    pub fn vector(&self) -> Point {
        self.to - self.from
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }

    /// Whether both endpoints share the same `y`.
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    /// Whether both endpoints share the same `x`.
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    /// Slope `dy / dx`.
    ///
    /// Vertical lines yield a signed infinity; check [`Line::is_vertical`] first
    /// when that is not acceptable.
    pub fn slope(&self) -> f64 {
        (self.to.y - self.from.y) / (self.to.x - self.from.x)
    }

    /// Whether the line has a non-zero length, i.e. describes a moving object.
    pub fn is_moving(&self) -> bool {
        self.from != self.to
    }

    /// The line from `from` along this direction with the given `length`.
    ///
    /// A zero `length` gives a stationary line at `from`, a negative one points
    /// the opposite way. The new endpoint is grid-rounded. A stationary line has
    /// no direction to follow and is returned as is.
    pub fn segment(&self, length: f64) -> Line {
        let own = self.length();
        if length == 0.0 || own == 0.0 {
            return Line::new(self.from, self.from);
        }

        let unit = self.vector().normalize(own);
        Line::new(
            self.from,
            Point::new(self.from.x + unit.x * length, self.from.y + unit.y * length),
        )
    }

    /// Whether `p` lies on the infinite line.
    pub fn is_point_on_line(&self, p: &Point) -> bool {
        self.contains(p, Extent::Line)
    }

    /// Whether `p` lies on the segment between the endpoints, endpoints included.
    pub fn is_point_on_segment(&self, p: &Point) -> bool {
        self.contains(p, Extent::Segment)
    }

    /// Colinearity is an exact zero cross product; the segment extent is checked
    /// on the scalar projection of `p - from` onto the direction.
    fn contains(&self, p: &Point, extent: Extent) -> bool {
        let offset = *p - self.from;
        if !self.is_moving() {
            return offset == Point::ORIGIN;
        }

        let v = self.vector();
        if v.cross_product(&offset) != 0.0 {
            return false;
        }
        match extent {
            Extent::Line => true,
            Extent::Segment => {
                let projection = offset.dot_product(&v);
                projection >= 0.0 && projection <= v.square_length()
            }
        }
    }

    /// The grid-rounded point of the infinite line closest to `p`.
    pub fn closest_point_on_line(&self, p: &Point) -> Point {
        self.closest(p, Extent::Line)
    }

    /// The grid-rounded point of the segment closest to `p`.
    ///
    /// When the projection of `p` falls outside the segment the nearer endpoint
    /// is returned.
    pub fn closest_point_on_segment(&self, p: &Point) -> Point {
        self.closest(p, Extent::Segment)
    }

    fn closest(&self, p: &Point, extent: Extent) -> Point {
        let length = self.length();
        if length == 0.0 {
            return self.from;
        }

        let unit = self.vector().normalize(length);
        let mut along = (*p - self.from).dot_product(&unit);
        if extent == Extent::Segment {
            along = along.clamp(0.0, length);
        }
        let closest = self.from + unit * along;
        Point::new(closest.x, closest.y)
    }

    /// Crossing point of the two infinite lines.
    ///
    /// Returns `None` for parallel lines, colinear ones included.
    pub fn lines_intersection(&self, other: &Line) -> Option<Point> {
        self.intersection(Extent::Line, other, Extent::Line)
    }

    /// Crossing point of the two segments, endpoints included.
    pub fn segments_intersection(&self, other: &Line) -> Option<Point> {
        self.intersection(Extent::Segment, other, Extent::Segment)
    }

    /// Crossing point of this infinite line with the segment `other`.
    pub fn line_segment_intersection(&self, other: &Line) -> Option<Point> {
        self.intersection(Extent::Line, other, Extent::Segment)
    }

    /// Parametric intersection: solves `self.from + t * av == other.from + u * bv`
    /// by Cramer's rule and checks `t` and `u` against each operand's extent.
    fn intersection(&self, own: Extent, other: &Line, theirs: Extent) -> Option<Point> {
        let av = self.vector();
        let bv = other.vector();
        let vcp = av.cross_product(&bv);
        if vcp == 0.0 {
            trace!(a = %self, b = %other, "parallel lines have no single crossing point");
            return None;
        }

        let sv = other.from - self.from;
        let t = sv.cross_product(&bv) / vcp;
        let u = sv.cross_product(&av) / vcp;
        if !own.admits(t) || !theirs.admits(u) {
            trace!(a = %self, b = %other, t, u, "crossing point is outside the segment extent");
            return None;
        }

        let crossing = self.from + av * t;
        Some(Point::new(crossing.x, crossing.y))
    }

    /// Rotate the direction about `from` by `angle` degrees.
    ///
    /// Uses `rx = vx·cos θ + vy·sin θ`, `ry = -vx·sin θ + vy·cos θ`, which turns
    /// clockwise for positive angles when `y` grows upward. The new endpoint is
    /// grid-rounded.
    pub fn rotate(&self, angle: f64) -> Line {
        let radians = angle * PI / 180.0;
        let (s, c) = (sin(radians), cos(radians));

        let v = self.vector();
        let rx = v.x * c + v.y * s;
        let ry = -v.x * s + v.y * c;

        Line::new(self.from, Point::new(self.from.x + rx, self.from.y + ry))
    }

    /// Whether two trajectories come within `radius` of each other during the
    /// next time unit.
    ///
    /// Solves `|dx + t·vx|² = radius²` for the relative offset `dx` and relative
    /// velocity `vx`, and takes the earliest root. A collision needs that root in
    /// `(0, 1]`: strictly after now, no later than the unit horizon. Objects
    /// without relative motion never collide.
    pub fn is_collision(&self, other: &Line, radius: f64) -> bool {
        let vx = other.vector() - self.vector();
        let dx = other.from - self.from;

        let a = vx.square_length();
        if a <= 0.0 {
            trace!(a = %self, b = %other, "no relative motion");
            return false;
        }

        let b = 2.0 * dx.dot_product(&vx);
        let c = dx.square_length() - radius * radius;
        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return false;
        }

        let t = (-b - sqrt(d)) / (2.0 * a);
        t > 0.0 && t <= 1.0
    }

    /// Axis-aligned bounding box of the two endpoints.
    pub fn rect(&self) -> Rect {
        Rect::new(self.from.x, self.to.x, self.from.y, self.to.y)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}->{})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn ln(fx: f64, fy: f64, tx: f64, ty: f64) -> Line {
        Line::new(p(fx, fy), p(tx, ty))
    }

    fn random_line(rng: &mut StdRng) -> Line {
        Line::new(
            Point::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0)),
            Point::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0)),
        )
    }

    #[test]
    fn test_is_same() {
        assert!(ln(0.0, 0.0, 300.0, 400.0).is_same(&ln(0.0, 0.0, 300.0, 400.0)));
        assert!(!ln(0.0, 0.0, 300.0, 400.0).is_same(&ln(300.0, 400.0, 0.0, 0.0)));
    }

    #[test]
    fn test_length_and_vector() {
        assert_eq!(ln(0.0, 0.0, 300.0, 400.0).length(), 500.0);
        assert_eq!(ln(200.0, 250.0, 300.0, 300.0).vector(), p(100.0, 50.0));
        assert_eq!(ln(300.0, 300.0, 200.0, 250.0).vector(), p(-100.0, -50.0));
    }

    #[test]
    fn test_segment() {
        let cases = [
            ("horizontal longer", ln(0.0, 0.0, 300.0, 0.0), 500.0, ln(0.0, 0.0, 500.0, 0.0)),
            ("vertical longer", ln(0.0, 0.0, 0.0, 300.0), 500.0, ln(0.0, 0.0, 0.0, 500.0)),
            ("diagonal exact", ln(0.0, 0.0, 300.0, 400.0), 500.0, ln(0.0, 0.0, 300.0, 400.0)),
            ("diagonal shorter", ln(0.0, 0.0, 600.0, 800.0), 500.0, ln(0.0, 0.0, 300.0, 400.0)),
            ("diagonal longer", ln(0.0, 0.0, 150.0, 200.0), 500.0, ln(0.0, 0.0, 300.0, 400.0)),
            ("half", ln(0.0, 0.0, 300.0, 400.0), 250.0, ln(0.0, 0.0, 150.0, 200.0)),
            ("zero", ln(0.0, 0.0, 300.0, 400.0), 0.0, ln(0.0, 0.0, 0.0, 0.0)),
            ("negative", ln(300.0, 400.0, 600.0, 800.0), -500.0, ln(300.0, 400.0, 0.0, 0.0)),
            ("backwards", ln(300.0, 400.0, 0.0, 0.0), 250.0, ln(300.0, 400.0, 150.0, 200.0)),
            ("stationary", ln(10.0, 10.0, 10.0, 10.0), 250.0, ln(10.0, 10.0, 10.0, 10.0)),
        ];
        for (name, line, length, want) in cases {
            assert_eq!(line.segment(length), want, "{}", name);
        }
    }

    #[test]
    fn test_is_moving() {
        assert!(ln(0.0, 0.0, 300.0, 400.0).is_moving());
        assert!(!ln(300.0, 400.0, 300.0, 400.0).is_moving());
    }

    #[test]
    fn test_axis_tests_and_slope() {
        assert!(ln(0.0, 0.0, 300.0, 0.0).is_horizontal());
        assert!(!ln(0.0, 0.0, 0.0, 300.0).is_horizontal());
        assert!(ln(0.0, 0.0, 0.0, 300.0).is_vertical());
        assert!(!ln(0.0, 0.0, 300.0, 0.0).is_vertical());

        assert_eq!(ln(0.0, 0.0, 300.0, 0.0).slope(), 0.0);
        assert_eq!(ln(0.0, 0.0, 0.0, 300.0).slope(), f64::INFINITY);
        assert_eq!(ln(0.0, 300.0, 0.0, 0.0).slope(), f64::NEG_INFINITY);
        assert_eq!(ln(0.0, 0.0, 300.0, 300.0).slope(), 1.0);
        assert_eq!(ln(0.0, 300.0, 300.0, 0.0).slope(), -1.0);
    }

    #[test]
    fn test_is_point_on_line() {
        let cases = [
            ("horizontal", ln(0.0, 0.0, 300.0, 0.0), p(150.0, 0.0), true),
            ("vertical", ln(0.0, 0.0, 0.0, 300.0), p(0.0, 150.0), true),
            ("diagonal ascending", ln(0.0, 0.0, 300.0, 300.0), p(150.0, 150.0), true),
            ("diagonal descending", ln(0.0, 300.0, 300.0, 0.0), p(150.0, 150.0), true),
            ("diagonal reverse", ln(300.0, 400.0, 0.0, 0.0), p(600.0, 800.0), true),
            ("beyond the end", ln(0.0, 0.0, 300.0, 0.0), p(450.0, 0.0), true),
            ("off the line", ln(0.0, 0.0, 300.0, 300.0), p(150.0, 100.0), false),
            ("off by one", ln(0.0, 0.0, 300.0, 400.0), p(3.0, 5.0), false),
        ];
        for (name, line, point, want) in cases {
            assert_eq!(line.is_point_on_line(&point), want, "{}", name);
        }
    }

    #[test]
    fn test_is_point_on_segment() {
        let cases = [
            ("horizontal out of bounds", ln(0.0, 0.0, 300.0, 0.0), p(450.0, 0.0), false),
            ("vertical out of bounds", ln(0.0, 0.0, 0.0, 300.0), p(0.0, 450.0), false),
            ("diagonal out of bounds", ln(0.0, 0.0, 300.0, 300.0), p(450.0, 450.0), false),
            ("behind the start", ln(0.0, 0.0, 300.0, 300.0), p(-1.0, -1.0), false),
            ("false in bounds", ln(0.0, 0.0, 300.0, 300.0), p(150.0, 250.0), false),
            ("inside", ln(0.0, 300.0, 300.0, 0.0), p(100.0, 200.0), true),
            ("start", ln(0.0, 0.0, 300.0, 400.0), p(0.0, 0.0), true),
            ("end", ln(0.0, 0.0, 300.0, 400.0), p(300.0, 400.0), true),
        ];
        for (name, line, point, want) in cases {
            assert_eq!(line.is_point_on_segment(&point), want, "{}", name);
        }
    }

    #[test]
    fn test_stationary_line_contains_only_its_point() {
        let line = ln(10.0, 20.0, 10.0, 20.0);
        assert!(line.is_point_on_line(&p(10.0, 20.0)));
        assert!(line.is_point_on_segment(&p(10.0, 20.0)));
        assert!(!line.is_point_on_line(&p(11.0, 20.0)));
        // The cross product with a zero direction vanishes for every point.
        assert_eq!(line.vector().cross_product(&(p(500.0, -3.0) - line.from)), 0.0);
        assert!(!line.is_point_on_line(&p(500.0, -3.0)));
        assert!(!line.is_point_on_segment(&p(500.0, 20.0)));
    }

    #[test]
    fn test_endpoints_are_on_line() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let line = random_line(&mut rng);
            assert!(line.is_point_on_line(&line.from), "{}", line);
            assert!(line.is_point_on_line(&line.to), "{}", line);
            assert!(line.is_point_on_segment(&line.from), "{}", line);
            assert!(line.is_point_on_segment(&line.to), "{}", line);
        }
    }

    #[test]
    fn test_closest_point() {
        let line = ln(0.0, 0.0, 300.0, 0.0);
        assert_eq!(line.closest_point_on_line(&p(150.0, 80.0)), p(150.0, 0.0));
        assert_eq!(line.closest_point_on_line(&p(500.0, -80.0)), p(500.0, 0.0));
        assert_eq!(line.closest_point_on_line(&p(-500.0, 10.0)), p(-500.0, 0.0));
        assert_eq!(line.closest_point_on_segment(&p(150.0, 80.0)), p(150.0, 0.0));
        assert_eq!(line.closest_point_on_segment(&p(500.0, -80.0)), p(300.0, 0.0));
        assert_eq!(line.closest_point_on_segment(&p(-500.0, 10.0)), p(0.0, 0.0));

        let diagonal = ln(0.0, 0.0, 300.0, 300.0);
        assert_eq!(diagonal.closest_point_on_line(&p(0.0, 200.0)), p(100.0, 100.0));
        assert_eq!(diagonal.closest_point_on_segment(&p(500.0, 500.0)), p(300.0, 300.0));

        let stationary = ln(7.0, 7.0, 7.0, 7.0);
        assert_eq!(stationary.closest_point_on_line(&p(100.0, 0.0)), p(7.0, 7.0));
    }

    #[test]
    fn test_lines_intersection() {
        let cases = [
            ("cross", ln(0.0, 0.0, 300.0, 300.0), ln(0.0, 300.0, 300.0, 0.0), Some(p(150.0, 150.0))),
            ("horizontal and vertical", ln(0.0, 100.0, 10.0, 100.0), ln(50.0, 0.0, 50.0, 10.0), Some(p(50.0, 100.0))),
            ("vertical and diagonal", ln(100.0, 0.0, 100.0, 10.0), ln(0.0, 0.0, 10.0, 20.0), Some(p(100.0, 200.0))),
            ("far away", ln(0.0, 0.0, 10.0, 10.0), ln(0.0, 300.0, 10.0, 290.0), Some(p(150.0, 150.0))),
            ("parallel", ln(0.0, 0.0, 300.0, 300.0), ln(0.0, 100.0, 300.0, 400.0), None),
            ("colinear overlapping", ln(0.0, 0.0, 300.0, 300.0), ln(100.0, 100.0, 400.0, 400.0), None),
            ("same", ln(0.0, 0.0, 300.0, 0.0), ln(0.0, 0.0, 300.0, 0.0), None),
            ("stationary", ln(0.0, 0.0, 0.0, 0.0), ln(0.0, 300.0, 300.0, 0.0), None),
        ];
        for (name, a, b, want) in cases {
            assert_eq!(a.lines_intersection(&b), want, "{}", name);
        }
    }

    #[test]
    fn test_segments_intersection() {
        let cases = [
            ("cross", ln(0.0, 0.0, 300.0, 300.0), ln(0.0, 300.0, 300.0, 0.0), Some(p(150.0, 150.0))),
            ("touching ends", ln(0.0, 0.0, 100.0, 100.0), ln(100.0, 100.0, 200.0, 0.0), Some(p(100.0, 100.0))),
            ("short of each other", ln(0.0, 0.0, 10.0, 10.0), ln(0.0, 300.0, 10.0, 290.0), None),
            ("crossing only as lines", ln(0.0, 0.0, 100.0, 0.0), ln(200.0, -50.0, 200.0, 50.0), None),
            ("colinear overlapping", ln(0.0, 0.0, 300.0, 0.0), ln(100.0, 0.0, 400.0, 0.0), None),
        ];
        for (name, a, b, want) in cases {
            assert_eq!(a.segments_intersection(&b), want, "{}", name);
        }
    }

    #[test]
    fn test_line_segment_intersection() {
        let line = ln(0.0, 0.0, 10.0, 10.0);
        assert_eq!(line.line_segment_intersection(&ln(0.0, 300.0, 300.0, 0.0)), Some(p(150.0, 150.0)));
        assert_eq!(line.line_segment_intersection(&ln(0.0, 300.0, 100.0, 200.0)), None);
        // The line side is unbounded: the crossing lies behind `from`.
        assert_eq!(line.line_segment_intersection(&ln(-300.0, 0.0, 0.0, -300.0)), Some(p(-150.0, -150.0)));
    }

    #[test]
    fn test_segments_intersection_lies_in_both_boxes() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut found = 0;
        for _ in 0..2000 {
            let a = random_line(&mut rng);
            let b = random_line(&mut rng);
            if let Some(crossing) = a.segments_intersection(&b) {
                found += 1;
                assert!(a.rect().contains_point(&crossing), "{} {} {}", a, b, crossing);
                assert!(b.rect().contains_point(&crossing), "{} {} {}", a, b, crossing);
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn test_rotate() {
        let line = ln(1000.0, 500.0, 500.0, 500.0);
        assert_eq!(line.rotate(90.0), ln(1000.0, 500.0, 1000.0, 1000.0));
        assert_eq!(line.rotate(-90.0), ln(1000.0, 500.0, 1000.0, 0.0));
        assert_eq!(line.rotate(180.0), ln(1000.0, 500.0, 1500.0, 500.0));
        assert_eq!(line.rotate(0.0), line);
        assert_eq!(line.rotate(360.0), line);

        let diagonal = ln(0.0, 0.0, 300.0, 400.0);
        assert_eq!(diagonal.rotate(0.0), diagonal);
        assert_eq!(diagonal.rotate(360.0), diagonal);
        assert_eq!(diagonal.rotate(90.0), ln(0.0, 0.0, 400.0, -300.0));
    }

    #[test]
    fn test_is_collision() {
        let cases = [
            ("converging", ln(0.0, 0.0, 600.0, 800.0), ln(300.0, 400.0, 150.0, 200.0), 50.0, true),
            ("both stationary", ln(0.0, 0.0, 0.0, 0.0), ln(10.0, 0.0, 10.0, 0.0), 50.0, false),
            ("same velocity", ln(0.0, 0.0, 100.0, 0.0), ln(10.0, 0.0, 110.0, 0.0), 50.0, false),
            ("diverging", ln(0.0, 0.0, -100.0, 0.0), ln(100.0, 0.0, 200.0, 0.0), 50.0, false),
            ("passing wide", ln(0.0, 0.0, 1000.0, 0.0), ln(500.0, 300.0, 500.0, 300.0), 50.0, false),
            ("touching at the horizon", ln(0.0, 0.0, 0.0, 0.0), ln(200.0, 0.0, 100.0, 0.0), 100.0, true),
            ("just past the horizon", ln(0.0, 0.0, 0.0, 0.0), ln(200.0, 0.0, 100.0, 0.0), 99.0, false),
            ("already overlapping", ln(0.0, 0.0, -10.0, 0.0), ln(10.0, 0.0, 20.0, 0.0), 50.0, false),
        ];
        for (name, a, b, radius, want) in cases {
            assert_eq!(a.is_collision(&b, radius), want, "{}", name);
        }
    }

    #[test]
    fn test_rect() {
        assert_eq!(ln(300.0, 400.0, 100.0, 200.0).rect(), Rect::new(100.0, 300.0, 200.0, 400.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ln(0.0, 0.0, 300.0, 400.0)), "([X:0,Y:0]->[X:300,Y:400])");
    }
}
