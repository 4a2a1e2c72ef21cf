//! Motion-correction orchestration.

use ndarray::{Array2, Array3, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::align::align_frame;
use crate::consts::{
    DEFAULT_CUTOFF, DEFAULT_FILTER_ORDER, DEFAULT_THRESHOLD, PARALLEL_FRAME_THRESHOLD,
};
use crate::error::{GimbalError, Result};
use crate::filter::spatial_lowpass;
use crate::translate::translate;
use crate::video::{quantize, to_f64, Pixel};

/// Parameters for one motion-correction run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Z-score a standardized profile sample must exceed to count toward the landmark.
    pub threshold: f64,
    /// Normalized spatial cutoff frequency in (0, 1); structure sharper than
    /// this is removed before displacement estimation.
    pub cutoff: f64,
    /// Butterworth order of the background filter; larger rolls off more steeply.
    pub filter_order: usize,
    /// Index of the frame every other frame is registered to.
    pub target_frame: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            cutoff: DEFAULT_CUTOFF,
            filter_order: DEFAULT_FILTER_ORDER,
            target_frame: 0,
        }
    }
}

/// Motion-correct a video stack against its target frame.
///
/// The stack is low-pass filtered once to isolate the background; each
/// frame's displacement is then estimated between the filtered target and the
/// filtered frame, and the inverse translation is applied to the original
/// frame. Returns a newly allocated stack of the same shape and pixel type;
/// the input is never mutated.
///
/// Fails on invalid parameters, an all-zero stack, or any frame whose
/// profiles never exceed the landmark threshold. Per-frame failures carry the
/// offending frame index and abort the run with no partial output.
pub fn align_video<T: Pixel>(video: &Array3<T>, config: &AlignConfig) -> Result<Array3<T>> {
    let (frames, height, width) = video.dim();
    if frames == 0 {
        return Err(GimbalError::EmptySequence);
    }
    if config.target_frame >= frames {
        return Err(GimbalError::TargetFrameOutOfRange {
            index: config.target_frame,
            total: frames,
        });
    }
    if !(config.threshold > 0.0) {
        return Err(GimbalError::InvalidThreshold(config.threshold));
    }

    info!(
        frames,
        height,
        width,
        cutoff = config.cutoff,
        order = config.filter_order,
        "Filtering video stack"
    );
    let raw = to_f64(video);
    let filtered = spatial_lowpass(&raw, config.filter_order, config.cutoff)?;
    let target = filtered.index_axis(Axis(0), config.target_frame);

    info!(
        target_frame = config.target_frame,
        threshold = config.threshold,
        "Correcting per-frame displacement"
    );
    let correct = |index: usize| -> Result<Array2<T>> {
        let original = raw.index_axis(Axis(0), index);
        if index == config.target_frame {
            // Degenerate zero shift keeps the target slot consistent with the rest.
            return Ok(quantize(&translate(&original, 0.0, 0.0)));
        }
        let displacement = align_frame(
            &target,
            &filtered.index_axis(Axis(0), index),
            config.threshold,
        )
        .map_err(|source| GimbalError::Frame {
            frame: index,
            source: Box::new(source),
        })?;
        debug!(
            frame = index,
            tx = displacement.tx,
            ty = displacement.ty,
            "Displacement estimated"
        );
        Ok(quantize(&translate(
            &original,
            -displacement.tx,
            -displacement.ty,
        )))
    };

    let corrected: Vec<Array2<T>> = if frames >= PARALLEL_FRAME_THRESHOLD {
        (0..frames)
            .into_par_iter()
            .map(&correct)
            .collect::<Result<_>>()?
    } else {
        (0..frames).map(&correct).collect::<Result<_>>()?
    };

    let mut output = Array3::<T>::zeros((frames, height, width));
    for (index, frame) in corrected.into_iter().enumerate() {
        output.index_axis_mut(Axis(0), index).assign(&frame);
    }

    info!("Motion correction complete");
    Ok(output)
}
