#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` 2D geometry kernel on a grid-rounded plane."]
#![doc = ""]
#![doc = "This crate provides points, directed lines and axis-aligned rectangles,"]
#![doc = "together with the distance, containment, intersection and collision-in-time"]
#![doc = "queries a turn-based agent runs every tick. Every value is immutable and every"]
#![doc = "query is a pure function of its arguments."]

pub mod error;
pub mod line;
pub mod point;
pub mod rect;
pub mod side;

pub use error::GeometryError;
pub use line::Line;
pub use point::{Point, distance_to_bound};
pub use rect::Rect;
pub use side::{Corner, Direction, Side};
