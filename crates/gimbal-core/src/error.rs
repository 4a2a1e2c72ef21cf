use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GimbalError {
    #[error("cutoff frequency {0} outside the open interval (0, 1)")]
    InvalidCutoff(f64),

    #[error("filter order must be at least 1 (got {0})")]
    InvalidOrder(usize),

    #[error("landmark threshold must be positive (got {0})")]
    InvalidThreshold(f64),

    #[error("target frame index {index} out of range (total: {total})")]
    TargetFrameOutOfRange { index: usize, total: usize },

    #[error("frame size {height}x{width} too small for order-{order} zero-phase filtering (each axis needs at least {min} samples)")]
    FrameTooSmall {
        height: usize,
        width: usize,
        order: usize,
        min: usize,
    },

    #[error("filtered stack is entirely zero; normalization is undefined")]
    DegenerateInput,

    #[error("no landmark found on the {axis} profile: no standardized sample exceeds {threshold}")]
    LandmarkNotFound { axis: ProfileAxis, threshold: f64 },

    #[error("target is {target_height}x{target_width} but frame is {frame_height}x{frame_width}")]
    DimensionMismatch {
        target_height: usize,
        target_width: usize,
        frame_height: usize,
        frame_width: usize,
    },

    #[error("cannot align a zero-sized frame")]
    EmptyFrame,

    #[error("frame {frame}: {source}")]
    Frame {
        frame: usize,
        #[source]
        source: Box<GimbalError>,
    },

    #[error("empty frame sequence")]
    EmptySequence,
}

/// Axis of the 1-D marginal profile a landmark was searched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAxis {
    Row,
    Column,
}

impl fmt::Display for ProfileAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileAxis::Row => write!(f, "row"),
            ProfileAxis::Column => write!(f, "column"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GimbalError>;
