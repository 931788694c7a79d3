#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of simple movement formulas."]
#![doc = ""]
#![doc = "This crate converts headings, speeds and accelerations into displacement"]
#![doc = "vectors and unit trajectories on the `vantage-geometry` plane."]

use core::f64::consts::PI;
use core::fmt;
use libm::{cos, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vantage_geometry::{Line, Point};

pub mod error;
pub use error::KinematicsError;

/// Heading angles in degrees for the polar convention used by [`moving_vector`].
///
/// Zero points forward (toward growing `y`) and positive angles turn left.
pub mod angle {
    /// Straight ahead, toward growing `y`.
    pub const FORWARD: f64 = 0.0;
    /// Quarter turn left, toward shrinking `x`.
    pub const LEFT: f64 = 90.0;
    /// Quarter turn right, toward growing `x`.
    pub const RIGHT: f64 = -90.0;
    /// Half turn, toward shrinking `y`.
    pub const BACK: f64 = 180.0;
}

/// Distance travelled after `time` from an initial `speed` under constant
/// `acceleration`: `s = ut + at²/2`.
pub fn moving_distance(speed: f64, acceleration: f64, time: f64) -> f64 {
    (speed * time) + (0.5 * acceleration * time * time)
}

/// Cartesian displacement of magnitude `power` along the heading `angle` (degrees).
///
/// See [`angle`] for the convention: `x = -power·sin θ`, `y = power·cos θ`.
/// The result is not grid-rounded.
pub fn moving_vector(angle: f64, power: f64) -> Point {
    let radians = angle * (PI / 180.0);
    Point {
        x: -power * sin(radians),
        y: power * cos(radians),
    }
}

/// The trajectory of an object leaving `position` along `angle`, starting at
/// `speed` and accelerating by `acceleration`, observed after `time`.
///
/// The end point is grid-rounded, so the result can be queried with the
/// exact-arithmetic tests of [`Line`].
///
/// # Errors
///
/// Returns `Err(KinematicsError::NegativeTimeDelta)` if `time` is negative.
/// Returns `Err(KinematicsError::NonFinite)` if any input is NaN or infinite.
pub fn trajectory(
    position: Point,
    angle: f64,
    speed: f64,
    acceleration: f64,
    time: f64,
) -> Result<Line, KinematicsError> {
    let inputs = [position.x, position.y, angle, speed, acceleration, time];
    if inputs.iter().any(|v| !v.is_finite()) {
        return Err(KinematicsError::NonFinite("trajectory inputs must be finite"));
    }
    if time < 0.0 {
        return Err(KinematicsError::NegativeTimeDelta("must be non-negative"));
    }

    let displacement = moving_vector(angle, moving_distance(speed, acceleration, time));
    let to = position + displacement;
    Ok(Line::new(position, Point::new(to.x, to.y)))
}

/// Heading and speed profile of a moving object.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Heading in degrees, see [`angle`].
    pub angle: f64,
    /// Initial speed, in distance units per time unit.
    pub speed: f64,
    /// Constant acceleration along the heading.
    pub acceleration: f64,
}

impl Motion {
    /// Construct a motion profile.
    ///
    /// # Arguments
    ///
    /// * `angle`: Heading in degrees.
    /// * `speed`: Initial speed.
    /// * `acceleration`: Constant acceleration along the heading.
    pub const fn new(angle: f64, speed: f64, acceleration: f64) -> Self {
        Motion {
            angle,
            speed,
            acceleration,
        }
    }

    /// Distance covered after `time`.
    pub fn distance(&self, time: f64) -> f64 {
        moving_distance(self.speed, self.acceleration, time)
    }

    /// Displacement after `time`, not grid-rounded.
    pub fn displacement(&self, time: f64) -> Point {
        moving_vector(self.angle, self.distance(time))
    }

    /// Trajectory from `position` over `time`, see [`trajectory`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`trajectory`].
    pub fn trajectory(&self, position: Point, time: f64) -> Result<Line, KinematicsError> {
        trajectory(position, self.angle, self.speed, self.acceleration, time)
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(θ: {:.1}°, v: {:.2}, a: {:.2})",
            self.angle, self.speed, self.acceleration
        )
    }
}
