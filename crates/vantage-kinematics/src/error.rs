#![warn(missing_docs)]

//! Error types for the kinematics library.
//!
//! This module defines error types that can occur while turning movement
//! parameters into trajectories.

use core::fmt;

/// Errors that can occur in movement calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error for negative time delta.
    /// This variant is returned when a trajectory is requested over a negative duration.
    NegativeTimeDelta(&'static str),
    /// Error for non-finite input.
    /// This variant is returned when an angle, speed, acceleration or position is NaN or infinite.
    NonFinite(&'static str),
}

impl core::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::NegativeTimeDelta(msg) => write!(f, "Negative time delta: {}", msg),
            KinematicsError::NonFinite(msg) => write!(f, "Non-finite input: {}", msg),
        }
    }
}

impl core::error::Error for KinematicsError {}
